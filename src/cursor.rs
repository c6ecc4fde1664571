//! Text caret for the input fields.
//!
//! The cursor is a sub-component embedded in [`crate::textinput`]; it owns
//! nothing but the glyph it sits on and its blink state. Blink timing runs
//! through the bubbletea runtime: every scheduled blink carries the cursor's
//! instance id and a sequence tag, and messages that don't match both are
//! ignored, so stale timers from a previous focus session can't toggle the
//! caret.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Asks a blinking cursor to start its timer. Sent once after focus.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// One tick of the blink timer.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Instance id of the cursor this tick targets.
    pub id: usize,
    /// Sequence tag; ticks with a stale tag are dropped.
    pub tag: usize,
}

/// How the caret behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The caret blinks at `blink_speed`.
    #[default]
    Blink,
    /// The caret is always shown.
    Static,
    /// The caret is never shown.
    Hide,
}

/// The cursor model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between blink phase flips.
    pub blink_speed: Duration,
    /// Style of the caret block when shown.
    pub style: Style,
    /// Style of the underlying character when the caret is not shown.
    pub text_style: Style,

    glyph: String,
    id: usize,
    focus: bool,
    hidden: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            glyph: " ".to_string(),
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            focus: false,
            hidden: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

/// Creates a cursor with default settings.
pub fn new() -> Model {
    Model::default()
}

/// A command that kicks off blinking; return it from `init()` or when
/// focusing an input.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| Box::new(InitialBlinkMsg) as Msg)
}

impl Model {
    /// Creates a cursor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles blink messages. Not a `bubbletea_rs::Model` implementation;
    /// the owning input forwards messages here.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            return self.blink_cmd();
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            if blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }
            self.hidden = !self.hidden;
            return self.blink_cmd();
        }

        None
    }

    /// Current caret mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the caret mode, returning a blink command when entering
    /// [`Mode::Blink`].
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.hidden = mode == Mode::Hide || !self.focus;
        (mode == Mode::Blink).then(blink)
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }
        self.blink_tag += 1;
        let (id, tag) = (self.id, self.blink_tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Focuses the cursor; starts the blink timer in blink mode.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.hidden = self.mode == Mode::Hide;
        if self.mode == Mode::Blink {
            return self.blink_cmd();
        }
        None
    }

    /// Blurs the cursor; the caret stops rendering.
    pub fn blur(&mut self) {
        self.focus = false;
        self.hidden = true;
    }

    /// Whether the cursor currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character the caret sits on.
    pub fn set_char(&mut self, s: &str) {
        self.glyph = s.to_string();
    }

    /// Renders the caret (or the plain character, depending on phase).
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.hidden {
            return self.text_style.clone().inline(true).render(&self.glyph);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_hides_caret() {
        let mut c = new();
        let _ = c.focus();
        assert!(c.focused());
        c.blur();
        assert!(!c.focused());
        c.set_char("x");
        // Blurred cursors render the bare character.
        assert_eq!(c.view(), "x");
    }

    #[test]
    fn test_static_mode_shows_caret_without_timer() {
        let mut c = new();
        assert!(c.set_mode(Mode::Static).is_none());
        let cmd = c.focus();
        assert!(cmd.is_none());
        assert_eq!(c.mode(), Mode::Static);
    }

    #[test]
    fn test_stale_blink_tick_is_ignored() {
        let mut c = new();
        c.blink_speed = Duration::from_millis(10);
        let _ = c.focus();
        let before = c.view();

        // A tick carrying the wrong tag must not flip the blink phase.
        let stale: Msg = Box::new(BlinkMsg {
            id: usize::MAX,
            tag: 9999,
        });
        assert!(c.update(&stale).is_none());
        assert_eq!(c.view(), before);
    }

    #[test]
    fn test_blink_cmd_tags_advance() {
        let mut c = new();
        c.mode = Mode::Blink;
        c.focus = true;
        let _ = c.blink_cmd().expect("blink command");
        let first = c.blink_tag;
        let _ = c.blink_cmd().expect("blink command");
        assert_ne!(first, c.blink_tag);
    }
}
