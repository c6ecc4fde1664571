//! Key bindings for the editor dialog.

use crate::key::{self, Binding, KeyMap};

/// The dialog-level actions and their bindings.
///
/// This is the complete registration table for the dialog: every action the
/// dialog reacts to is matched against exactly one of these bindings in
/// `update`, so rebinding a field here is all it takes to change the
/// dialog's keys.
#[derive(Debug, Clone)]
pub struct EditorKeyMap {
    /// Commit the edit and close the dialog.
    pub confirm: Binding,
    /// Discard the edit and close the dialog.
    pub cancel: Binding,
    /// Move focus to the next field.
    pub next_field: Binding,
    /// Move focus to the previous field.
    pub prev_field: Binding,
}

impl Default for EditorKeyMap {
    fn default() -> Self {
        Self {
            confirm: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "save"),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "cancel"),
            ]),
            next_field: key::new_binding(vec![
                key::with_keys_str(&["tab"]),
                key::with_help("tab", "next field"),
            ]),
            prev_field: key::new_binding(vec![
                key::with_keys_str(&["backtab"]),
                key::with_help("shift+tab", "previous field"),
            ]),
        }
    }
}

impl KeyMap for EditorKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.confirm, &self.cancel, &self.next_field]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.confirm, &self.cancel],
            vec![&self.next_field, &self.prev_field],
        ]
    }
}
