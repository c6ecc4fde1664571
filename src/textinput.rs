//! Single-line text input field.
//!
//! A reduced input component used for the editor dialog's key, name, and
//! argument fields: value editing with cursor movement, word motions,
//! horizontal scrolling for values wider than the field, and a placeholder
//! shown while empty. Messages are forwarded from the owning model; only a
//! focused input reacts to them.
//!
//! ```rust
//! use keybind_editor::textinput;
//!
//! let mut field = textinput::new();
//! field.set_placeholder("http://...");
//! field.set_value("http://example.com");
//! assert_eq!(field.value(), "http://example.com");
//! ```

use crate::cursor::{self, Model as Cursor};
use crate::key::{self, Binding, CAPTURE_MODIFIERS};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

/// Key bindings for editing within the input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Move the cursor one word right.
    pub word_forward: Binding,
    /// Move the cursor one word left.
    pub word_backward: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
    /// Delete from the cursor to the end of the line.
    pub delete_after_cursor: Binding,
    /// Delete from the start of the line to the cursor.
    pub delete_before_cursor: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Jump to the start of the line.
    pub line_start: Binding,
    /// Jump to the end of the line.
    pub line_end: Binding,
}

/// The default editing bindings (emacs-flavored, matching common readline
/// behavior).
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: key::new_binding(vec![key::with_keys_str(&["right", "ctrl+f"])]),
        character_backward: key::new_binding(vec![key::with_keys_str(&["left", "ctrl+b"])]),
        word_forward: key::new_binding(vec![key::with_keys_str(&["alt+right", "alt+f"])]),
        word_backward: key::new_binding(vec![key::with_keys_str(&["alt+left", "alt+b"])]),
        delete_word_backward: key::new_binding(vec![key::with_keys_str(&[
            "alt+backspace",
            "ctrl+w",
        ])]),
        delete_after_cursor: key::new_binding(vec![key::with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: key::new_binding(vec![key::with_keys_str(&["ctrl+u"])]),
        delete_character_backward: key::new_binding(vec![key::with_keys_str(&[
            "backspace",
            "ctrl+h",
        ])]),
        delete_character_forward: key::new_binding(vec![key::with_keys_str(&["delete", "ctrl+d"])]),
        line_start: key::new_binding(vec![key::with_keys_str(&["home", "ctrl+a"])]),
        line_end: key::new_binding(vec![key::with_keys_str(&["end", "ctrl+e"])]),
    }
}

/// The text input model.
pub struct Model {
    /// Prompt rendered before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the entered text.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// The embedded caret.
    pub cursor: Cursor,
    /// Editing key bindings.
    pub key_map: KeyMap,
    /// Maximum number of characters accepted; 0 means unlimited.
    pub char_limit: usize,

    value: Vec<char>,
    pos: usize,
    width: usize,
    offset: usize,
    focus: bool,
}

/// Creates a text input with default settings. The input starts blurred.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor: cursor::new(),
        key_map: default_key_map(),
        char_limit: 0,
        value: Vec::new(),
        pos: 0,
        width: 0,
        offset: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the value, clamping to the character limit and moving the
    /// cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit);
        }
        self.pos = self.value.len();
        self.scroll();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.scroll();
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the value and resets the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.offset = 0;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width in characters; 0 disables scrolling.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.scroll();
    }

    /// Whether the input reacts to key events.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input and starts the caret.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.cursor.focus()
    }

    /// Blurs the input; further key events are ignored.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Processes one message. Unfocused inputs ignore everything.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_deletion(key_msg);
            self.handle_movement(key_msg);
            self.handle_character(key_msg);
        }

        let cmd = self.cursor.update(msg);
        self.scroll();
        cmd
    }

    fn handle_deletion(&mut self, msg: &KeyMsg) {
        if self.key_map.delete_word_backward.matches(msg) {
            let end = self.pos;
            self.word_backward();
            self.value.drain(self.pos..end);
        } else if self.key_map.delete_character_backward.matches(msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if self.key_map.delete_character_forward.matches(msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if self.key_map.delete_after_cursor.matches(msg) {
            self.value.truncate(self.pos);
        } else if self.key_map.delete_before_cursor.matches(msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
        }
    }

    fn handle_movement(&mut self, msg: &KeyMsg) {
        if self.key_map.character_backward.matches(msg) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if self.key_map.character_forward.matches(msg) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if self.key_map.word_backward.matches(msg) {
            self.word_backward();
        } else if self.key_map.word_forward.matches(msg) {
            self.word_forward();
        } else if self.key_map.line_start.matches(msg) {
            self.cursor_start();
        } else if self.key_map.line_end.matches(msg) {
            self.cursor_end();
        }
    }

    fn handle_character(&mut self, msg: &KeyMsg) {
        // Plain and shift-only presses are text entry; anything carrying a
        // capture modifier belongs to a keymap, not to the value.
        if let KeyCode::Char(ch) = msg.key {
            if !msg.modifiers.intersects(CAPTURE_MODIFIERS) {
                if self.char_limit > 0 && self.value.len() >= self.char_limit {
                    return;
                }
                self.value.insert(self.pos, ch);
                self.pos += 1;
            }
        }
    }

    fn word_backward(&mut self) {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1] == ' ' {
            i -= 1;
        }
        while i > 0 && self.value[i - 1] != ' ' {
            i -= 1;
        }
        self.set_cursor(i);
    }

    fn word_forward(&mut self) {
        let mut i = self.pos;
        while i < self.value.len() && self.value[i] == ' ' {
            i += 1;
        }
        while i < self.value.len() && self.value[i] != ' ' {
            i += 1;
        }
        self.set_cursor(i);
    }

    // Keep the cursor inside the visible window.
    fn scroll(&mut self) {
        if self.width == 0 {
            self.offset = 0;
            return;
        }
        if self.pos < self.offset {
            self.offset = self.pos;
        } else if self.pos > self.offset + self.width {
            self.offset = self.pos - self.width;
        }
    }

    /// Renders the input: prompt, visible slice of the value, and caret.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = if self.width > 0 {
            (self.offset + self.width).min(self.value.len())
        } else {
            self.value.len()
        };
        let window = &self.value[self.offset..end];
        let pos = self.pos - self.offset;

        let mut out = String::new();
        let before: String = window[..pos.min(window.len())].iter().collect();
        out.push_str(&self.text_style.render(&before));

        if self.focus {
            let mut caret = self.cursor.clone();
            if pos < window.len() {
                caret.set_char(&window[pos].to_string());
                out.push_str(&caret.view());
                let after: String = window[pos + 1..].iter().collect();
                out.push_str(&self.text_style.render(&after));
            } else {
                caret.set_char(" ");
                out.push_str(&caret.view());
            }
        } else if pos < window.len() {
            let after: String = window[pos..].iter().collect();
            out.push_str(&self.text_style.render(&after));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), out)
    }

    fn placeholder_view(&self) -> String {
        let mut out = String::new();
        let chars: Vec<char> = self.placeholder.chars().collect();
        if self.focus {
            let mut caret = self.cursor.clone();
            caret.set_char(&chars[0].to_string());
            out.push_str(&caret.view());
            let rest: String = chars[1..].iter().collect();
            out.push_str(&self.placeholder_style.render(&rest));
        } else {
            out.push_str(&self.placeholder_style.render(&self.placeholder));
        }
        format!("{}{}", self.prompt_style.render(&self.prompt), out)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode, mods: KeyModifiers) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: mods,
        }) as Msg
    }

    #[test]
    fn test_typing_appends_characters() {
        let mut input = new();
        let _ = input.focus();
        for ch in "hi".chars() {
            input.update(&key(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        assert_eq!(input.value(), "hi");
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn test_shifted_characters_are_text_entry() {
        let mut input = new();
        let _ = input.focus();
        input.update(&key(KeyCode::Char('H'), KeyModifiers::SHIFT));
        assert_eq!(input.value(), "H");
    }

    #[test]
    fn test_modified_characters_are_not_inserted() {
        let mut input = new();
        let _ = input.focus();
        input.update(&key(KeyCode::Char('x'), KeyModifiers::ALT));
        input.update(&key(KeyCode::Char('y'), KeyModifiers::SUPER));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = new();
        input.update(&key(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("abc");
        input.update(&key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input.value(), "ab");

        input.set_cursor(0);
        input.update(&key(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_movement_and_insertion_mid_value() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("ac");
        input.update(&key(KeyCode::Left, KeyModifiers::NONE));
        input.update(&key(KeyCode::Char('b'), KeyModifiers::NONE));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_word_motions() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("foo bar baz");
        input.update(&key(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(input.position(), 8);
        input.update(&key(KeyCode::Home, KeyModifiers::NONE));
        input.update(&key(KeyCode::Char('f'), KeyModifiers::ALT));
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("open http://foo");
        input.update(&key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "open ");
    }

    #[test]
    fn test_kill_line_both_directions() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("hello world");
        input.set_cursor(5);
        input.update(&key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "hello");

        input.set_value("hello");
        input.set_cursor(3);
        input.update(&key(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "lo");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_char_limit() {
        let mut input = new();
        let _ = input.focus();
        input.char_limit = 3;
        input.set_value("abcdef");
        assert_eq!(input.value(), "abc");
        input.update(&key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_placeholder_shown_only_while_empty() {
        let mut input = new();
        input.set_placeholder("type here");
        assert!(input.view().contains("type here"));
        input.set_value("x");
        assert!(!input.view().contains("type here"));
    }

    #[test]
    fn test_window_follows_cursor() {
        let mut input = new();
        let _ = input.focus();
        input.set_width(5);
        input.set_value("abcdefghij");
        // Cursor lands at the end; the window must have scrolled with it.
        let view = input.view();
        assert!(view.contains('j'));
        assert!(!view.contains('a'));
    }
}
