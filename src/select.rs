//! A small horizontal choice widget.
//!
//! Renders a fixed set of labeled options and lets the user move the
//! selection between them; [`Model::value`] yields the selected value
//! directly, typed. Used by the editor dialog to pick a binding's action
//! kind, and deliberately minimal: no filtering, no scrolling, just a
//! selection.
//!
//! ```rust
//! use keybind_editor::select;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! enum Fruit { Apple, Pear }
//!
//! let choice = select::Model::new(vec![
//!     ("apple".to_string(), Fruit::Apple),
//!     ("pear".to_string(), Fruit::Pear),
//! ]);
//! assert_eq!(choice.value(), Fruit::Apple);
//! ```

use crate::key::{self, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// Key bindings for moving the selection.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Select the next option.
    pub next: Binding,
    /// Select the previous option.
    pub prev: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next: key::new_binding(vec![key::with_keys_str(&["right", "space", "l"])]),
            prev: key::new_binding(vec![key::with_keys_str(&["left", "h"])]),
        }
    }
}

/// The choice model. `T` is the value each option carries.
#[derive(Debug, Clone)]
pub struct Model<T: Copy + PartialEq> {
    /// Navigation bindings.
    pub key_map: KeyMap,
    /// Style for the selected option.
    pub selected_style: Style,
    /// Style for unselected options.
    pub option_style: Style,

    options: Vec<(String, T)>,
    selected: usize,
    focus: bool,
}

impl<T: Copy + PartialEq> Model<T> {
    /// Creates a choice over the given `(label, value)` options. The first
    /// option starts selected.
    ///
    /// Panics when `options` is empty; a choice with nothing to choose has
    /// no meaningful selection.
    pub fn new(options: Vec<(String, T)>) -> Self {
        assert!(!options.is_empty(), "select: at least one option required");
        Self {
            key_map: KeyMap::default(),
            selected_style: Style::new().bold(true).underline(true),
            option_style: Style::new().foreground(Color::from("240")),
            options,
            selected: 0,
            focus: false,
        }
    }

    /// The value of the currently selected option.
    pub fn value(&self) -> T {
        self.options[self.selected].1
    }

    /// The index of the currently selected option.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Moves the selection to the option carrying `value`; options without
    /// a match leave the selection unchanged.
    pub fn select_value(&mut self, value: T) {
        if let Some(i) = self.options.iter().position(|(_, v)| *v == value) {
            self.selected = i;
        }
    }

    /// Selects the next option, wrapping at the end.
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    /// Selects the previous option, wrapping at the start.
    pub fn prev(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    /// Processes one message. Unfocused choices ignore everything.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.next.matches(key_msg) {
                self.next();
            } else if self.key_map.prev.matches(key_msg) {
                self.prev();
            }
        }
        None
    }

    /// Renders the options on one line, selection marked.
    pub fn view(&self) -> String {
        self.options
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                if i == self.selected {
                    self.selected_style.render(&format!("• {}", label))
                } else {
                    self.option_style.render(&format!("○ {}", label))
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl<T: Copy + PartialEq> Component for Model<T> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn two_way() -> Model<u8> {
        Model::new(vec![("one".to_string(), 1), ("two".to_string(), 2)])
    }

    #[test]
    fn test_first_option_starts_selected() {
        let choice = two_way();
        assert_eq!(choice.value(), 1);
        assert_eq!(choice.selected_index(), 0);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut choice = two_way();
        choice.next();
        assert_eq!(choice.value(), 2);
        choice.next();
        assert_eq!(choice.value(), 1);
        choice.prev();
        assert_eq!(choice.value(), 2);
    }

    #[test]
    fn test_select_value() {
        let mut choice = two_way();
        choice.select_value(2);
        assert_eq!(choice.selected_index(), 1);
        choice.select_value(42); // unknown: selection untouched
        assert_eq!(choice.selected_index(), 1);
    }

    #[test]
    fn test_keys_only_move_focused_choice() {
        let mut choice = two_way();
        choice.update(&key(KeyCode::Right));
        assert_eq!(choice.value(), 1);

        let _ = Component::focus(&mut choice);
        choice.update(&key(KeyCode::Right));
        assert_eq!(choice.value(), 2);
        choice.update(&key(KeyCode::Left));
        assert_eq!(choice.value(), 1);
    }

    #[test]
    #[should_panic]
    fn test_empty_options_panic() {
        let _ = Model::<u8>::new(vec![]);
    }
}
