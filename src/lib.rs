#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/keybind-editor/")]

//! # keybind-editor
//!
//! A modal key-binding editor dialog for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs), plus the small
//! widgets it is composed of.
//!
//! The dialog edits one binding record at a time: a key combination mapped
//! to an action, either opening a URL or executing a command. It is meant to
//! be embedded in a preferences screen: the host owns the record list, the
//! dialog owns a working copy of one record for the duration of a session,
//! and confirmed edits flow back through the [`binding::BindingHost`] trait.
//!
//! ## Components
//!
//! - [`editor`]: the dialog itself (edit and create flows, key capture,
//!   confirm, cancel).
//! - [`textinput`]: single-line input used for the key, name, and argument
//!   fields.
//! - [`select`]: typed choice widget used for the action kind.
//! - [`cursor`]: the caret embedded in text inputs.
//! - [`key`]: key presses, canonical combination formatting, and the
//!   binding/keymap machinery every component's keys run through.
//! - [`binding`]: the record type, the record list, and the host seam.
//!
//! ## Key capture
//!
//! While the dialog's key field has focus, any press carrying a modifier
//! other than shift (see [`key::CAPTURE_MODIFIERS`]) is intercepted: the
//! field's text is replaced with the canonical combination string, e.g.
//! `ctrl+alt+k`, and the press goes nowhere else. Plain and shift-only
//! presses remain ordinary typing, so the field can still be edited by
//! hand.
//!
//! ## Embedding
//!
//! The embedding model owns the canonical list and implements
//! [`binding::BindingHost`]; the dialog calls back exactly once per
//! confirmed change:
//!
//! ```rust
//! use keybind_editor::binding::{BindingHost, BindingSet, KeyBinding};
//! use keybind_editor::editor;
//!
//! struct Prefs {
//!     bindings: BindingSet,
//! }
//!
//! impl BindingHost for Prefs {
//!     fn updated(&mut self, index: usize, binding: &KeyBinding) {
//!         self.bindings.replace(index, binding.clone());
//!     }
//!
//!     fn created(&mut self, binding: KeyBinding) {
//!         self.bindings.push(binding);
//!     }
//! }
//!
//! let mut dialog = editor::new(Box::new(Prefs {
//!     bindings: BindingSet::new(),
//! }));
//! let _ = dialog.open_create();
//! assert!(dialog.visible());
//! ```
//!
//! Forward messages to the dialog while it is visible and splice its view
//! into yours; `view()` renders to an empty string while hidden, and
//! `update()` ignores everything, so unconditional forwarding is also fine.

pub mod binding;
pub mod cursor;
pub mod editor;
pub mod key;
pub mod select;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Focus management implemented by every widget in this crate.
///
/// Only one widget receives keyboard input at a time; the owning model
/// moves focus between them. Focusing may return a command (typically the
/// caret blink timer), blurring never does.
///
/// ```rust
/// use keybind_editor::prelude::*;
///
/// fn cycle<T: Component>(widget: &mut T) {
///     let _cmd = widget.focus();
///     assert!(widget.focused());
///     widget.blur();
///     assert!(!widget.focused());
/// }
///
/// cycle(&mut textinput_new());
/// ```
pub trait Component {
    /// Gives the widget keyboard focus. May return a command to start
    /// focus-related work such as cursor blinking.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the widget currently has focus.
    fn focused(&self) -> bool;
}

pub use binding::{ActionKind, BindingHost, BindingSet, KeyBinding};
pub use cursor::{new as cursor_new, Mode as CursorMode, Model as Cursor};
pub use editor::{
    default_styles as editor_default_styles, new as editor_new, EditorKeyMap,
    Model as BindingEditor, Styles as EditorStyles,
};
pub use key::{
    format_key_press, matches, matches_binding, new_binding, parse_key_press, with_disabled,
    with_help, with_keys, with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
    CAPTURE_MODIFIERS,
};
pub use select::Model as Select;
pub use textinput::{
    default_key_map as textinput_default_key_map, new as textinput_new,
    KeyMap as TextInputKeyMap, Model as TextInput,
};

/// Convenience re-exports of the most commonly used items.
///
/// ```rust
/// use keybind_editor::prelude::*;
///
/// let mut input = textinput_new();
/// input.set_placeholder("name");
/// ```
pub mod prelude {
    pub use crate::binding::{ActionKind, BindingHost, BindingSet, KeyBinding};
    pub use crate::cursor::{new as cursor_new, Mode as CursorMode, Model as Cursor};
    pub use crate::editor::{
        default_styles as editor_default_styles, new as editor_new, EditorKeyMap,
        Model as BindingEditor, Styles as EditorStyles,
    };
    pub use crate::key::{
        format_key_press, matches, matches_binding, new_binding, parse_key_press, with_disabled,
        with_help, with_keys, with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
        CAPTURE_MODIFIERS,
    };
    pub use crate::select::Model as Select;
    pub use crate::textinput::{
        default_key_map as textinput_default_key_map, new as textinput_new,
        KeyMap as TextInputKeyMap, Model as TextInput,
    };
    pub use crate::Component;
}
