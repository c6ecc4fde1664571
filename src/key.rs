//! Key presses, key bindings, and the canonical key-combination format.
//!
//! This module provides the building blocks the rest of the crate uses for
//! keyboard handling:
//!
//! - [`KeyPress`]: one concrete key chord (a key code plus a modifier set).
//! - [`format_key_press`] / [`parse_key_press`]: convert between chords and
//!   their canonical textual form (`"ctrl+alt+k"`).
//! - [`Binding`]: a named set of chords with help text, declared with
//!   [`new_binding`] and the `with_*` options, and matched against incoming
//!   [`KeyMsg`] events.
//! - [`KeyMap`]: a trait components implement so their bindings can be
//!   rendered as footer help.
//!
//! # Example
//!
//! ```rust
//! use keybind_editor::key::{self, matches_binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let save = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+s"]),
//!     key::with_help("ctrl+s", "save"),
//! ]);
//!
//! let press = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&press, &save));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use std::fmt;

/// Modifiers that make a key press a combination rather than plain typing.
///
/// Shift is deliberately absent: a shifted character is still ordinary text
/// entry (capitals, punctuation), so a press only counts as a capturable
/// combination when it carries at least one of these.
pub const CAPTURE_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER)
    .union(KeyModifiers::HYPER)
    .union(KeyModifiers::META);

/// A single concrete key chord: a key code plus the modifiers held with it.
///
/// `KeyPress` is the unit a [`Binding`] matches on, and its `Display`
/// implementation produces the canonical textual form used throughout the
/// crate (and stored in binding records).
///
/// ```rust
/// use keybind_editor::key::KeyPress;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let chord = KeyPress::from((KeyCode::Char('k'), KeyModifiers::CONTROL | KeyModifiers::ALT));
/// assert_eq!(chord.to_string(), "ctrl+alt+k");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// The modifiers held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_key_press(self.code, self.mods))
    }
}

// Key names that appear on either side of the string conversion. Single
// characters and function keys are handled structurally.
static NAMED_KEYS: Lazy<Vec<(&'static str, KeyCode)>> = Lazy::new(|| {
    vec![
        ("enter", KeyCode::Enter),
        ("esc", KeyCode::Esc),
        ("tab", KeyCode::Tab),
        ("backtab", KeyCode::BackTab),
        ("space", KeyCode::Char(' ')),
        ("backspace", KeyCode::Backspace),
        ("delete", KeyCode::Delete),
        ("insert", KeyCode::Insert),
        ("up", KeyCode::Up),
        ("down", KeyCode::Down),
        ("left", KeyCode::Left),
        ("right", KeyCode::Right),
        ("home", KeyCode::Home),
        ("end", KeyCode::End),
        ("pgup", KeyCode::PageUp),
        ("pgdown", KeyCode::PageDown),
    ]
});

/// Converts a key code and modifier set into the canonical display string.
///
/// Modifiers are rendered lowercase in a fixed order (`ctrl`, `alt`, `shift`,
/// `super`, `hyper`, `meta`), joined to the key name with `+`. Letter keys
/// are lowercased so a shifted letter renders as `ctrl+shift+k` rather than
/// `ctrl+K`.
///
/// ```rust
/// use keybind_editor::key::format_key_press;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// assert_eq!(format_key_press(KeyCode::Char('k'), KeyModifiers::CONTROL), "ctrl+k");
/// assert_eq!(format_key_press(KeyCode::F(5), KeyModifiers::ALT), "alt+f5");
/// assert_eq!(format_key_press(KeyCode::Enter, KeyModifiers::NONE), "enter");
/// ```
pub fn format_key_press(code: KeyCode, mods: KeyModifiers) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (flag, name) in [
        (KeyModifiers::CONTROL, "ctrl"),
        (KeyModifiers::ALT, "alt"),
        (KeyModifiers::SHIFT, "shift"),
        (KeyModifiers::SUPER, "super"),
        (KeyModifiers::HYPER, "hyper"),
        (KeyModifiers::META, "meta"),
    ] {
        if mods.contains(flag) {
            parts.push(name.to_string());
        }
    }
    parts.push(key_name(code));
    parts.join("+")
}

fn key_name(code: KeyCode) -> String {
    if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, c)| *c == code) {
        return (*name).to_string();
    }
    match code {
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::F(n) => format!("f{}", n),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// Parses the canonical textual form back into a [`KeyPress`].
///
/// Accepts everything [`format_key_press`] produces, plus the common aliases
/// `control`, `option`/`opt`, `cmd`/`win`, `escape`, `del`, `pageup` and
/// `pagedown`. Returns `None` for empty or unrecognized input.
///
/// ```rust
/// use keybind_editor::key::{parse_key_press, KeyPress};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// assert_eq!(
///     parse_key_press("ctrl+alt+k"),
///     Some(KeyPress { code: KeyCode::Char('k'), mods: KeyModifiers::CONTROL | KeyModifiers::ALT })
/// );
/// assert_eq!(parse_key_press(""), None);
/// ```
pub fn parse_key_press(s: &str) -> Option<KeyPress> {
    if s.is_empty() {
        return None;
    }

    // A trailing '+' means the key itself is the plus character.
    let (body, key_token) = match s.rfind('+') {
        Some(i) if i + 1 < s.len() => (&s[..i], &s[i + 1..]),
        Some(i) => (&s[..i], "+"),
        None => ("", s),
    };

    let mut mods = KeyModifiers::NONE;
    for token in body.split('+').filter(|t| !t.is_empty()) {
        mods |= parse_modifier(token)?;
    }

    let code = parse_key_token(key_token)?;
    Some(KeyPress { code, mods })
}

fn parse_modifier(token: &str) -> Option<KeyModifiers> {
    match token {
        "ctrl" | "control" => Some(KeyModifiers::CONTROL),
        "alt" | "opt" | "option" => Some(KeyModifiers::ALT),
        "shift" => Some(KeyModifiers::SHIFT),
        "super" | "cmd" | "win" => Some(KeyModifiers::SUPER),
        "hyper" => Some(KeyModifiers::HYPER),
        "meta" => Some(KeyModifiers::META),
        _ => None,
    }
}

fn parse_key_token(token: &str) -> Option<KeyCode> {
    if let Some((_, code)) = NAMED_KEYS.iter().find(|(name, _)| *name == token) {
        return Some(*code);
    }
    match token {
        "escape" => Some(KeyCode::Esc),
        "del" => Some(KeyCode::Delete),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => token
                    .strip_prefix('f')
                    .and_then(|n| n.parse::<u8>().ok())
                    .map(KeyCode::F),
            }
        }
    }
}

/// Help information for a key binding, rendered in help footers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display, e.g. `"tab"` or `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A key binding: one or more chords that trigger the same action.
///
/// Bindings are declared with [`new_binding`] and the `with_*` option
/// functions, the same builder shape used by every component keymap in this
/// crate:
///
/// ```rust
/// use keybind_editor::key;
///
/// let cancel = key::new_binding(vec![
///     key::with_keys_str(&["esc"]),
///     key::with_help("esc", "cancel"),
/// ]);
/// assert!(cancel.enabled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Returns the chords this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help entry for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it has at least one chord and has not been
    /// explicitly disabled. Disabled bindings never match.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key event triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        // Terminals report shift+tab as BackTab with the shift flag still
        // set; fold that back so "backtab" bindings match either encoding.
        let mods = if msg.key == KeyCode::BackTab {
            msg.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            msg.modifiers
        };
        self.keys
            .iter()
            .any(|k| k.code == msg.key && k.mods == mods)
    }
}

/// An option passed to [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Sets the chords the binding responds to.
    Keys(Vec<KeyPress>),
    /// Sets the help entry.
    WithHelp(Help),
    /// Creates the binding disabled.
    Disabled,
}

/// Builds a [`Binding`] from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: bind the given chords.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    BindingOpt::Keys(keys)
}

/// Option: bind the chords described by canonical key strings.
///
/// Strings that fail to parse are skipped, so a typo degrades to a binding
/// with fewer chords rather than a panic at construction.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key_press(s)).collect())
}

/// Option: attach help text.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether the key event triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether the key event triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by component keymaps so their bindings can be rendered as
/// help text.
pub trait KeyMap {
    /// Bindings for the single-line help footer.
    fn short_help(&self) -> Vec<&Binding>;
    /// Binding columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
