//! Core model and event handling for the editor dialog.

use super::keymap::EditorKeyMap;
use super::view::{default_styles, Styles};
use crate::binding::{ActionKind, BindingHost, BindingSet, KeyBinding};
use crate::key::{format_key_press, CAPTURE_MODIFIERS};
use crate::select::Model as Select;
use crate::textinput::{self, Model as TextInput};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::{debug, trace};

/// Which widget currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Key,
    Name,
    Action,
    Argument,
}

const FIELD_ORDER: [Field; 4] = [Field::Key, Field::Name, Field::Action, Field::Argument];

// One editing session, alive from open to confirm/cancel. The draft is an
// owned copy; the host's list is only touched through BindingHost.
struct Session {
    index: Option<usize>,
    draft: KeyBinding,
}

/// The editor dialog model.
pub struct Model {
    /// Dialog-level key bindings.
    pub key_map: EditorKeyMap,
    /// Rendering styles.
    pub styles: Styles,
    /// Input for the key combination. Presses carrying a capture modifier
    /// overwrite its value with the canonical combination string.
    pub key_input: TextInput,
    /// Input for the user-facing name.
    pub name_input: TextInput,
    /// Selector for what the binding does.
    pub action_select: Select<ActionKind>,
    /// Input for the URL or command line.
    pub argument_input: TextInput,

    host: Box<dyn BindingHost + Send>,
    focus: Field,
    session: Option<Session>,
}

/// Creates an editor dialog committing through the given host. The dialog
/// starts hidden; call [`Model::open_edit`] or [`Model::open_create`] to
/// show it.
pub fn new(host: Box<dyn BindingHost + Send>) -> Model {
    let mut key_input = textinput::new();
    key_input.prompt = String::new();
    key_input.set_placeholder("press a key combination");
    key_input.set_width(32);

    let mut name_input = textinput::new();
    name_input.prompt = String::new();
    name_input.set_placeholder("name");
    name_input.set_width(32);

    let action_select = Select::new(vec![
        (ActionKind::Url.label().to_string(), ActionKind::Url),
        (ActionKind::Exec.label().to_string(), ActionKind::Exec),
    ]);

    let mut argument_input = textinput::new();
    argument_input.prompt = String::new();
    argument_input.set_placeholder("URL or command line");
    argument_input.set_width(32);

    Model {
        key_map: EditorKeyMap::default(),
        styles: default_styles(),
        key_input,
        name_input,
        action_select,
        argument_input,
        host,
        focus: Field::Key,
        session: None,
    }
}

impl Model {
    /// Whether the dialog is currently shown.
    pub fn visible(&self) -> bool {
        self.session.is_some()
    }

    /// The list position of the record being edited. `None` while the
    /// dialog is hidden or while creating a new record.
    pub fn editing_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.index)
    }

    /// Opens the dialog on the record at `index`.
    ///
    /// The record is copied out of `bindings` into a working draft; the set
    /// itself is not retained. An out-of-range index panics the same way
    /// any slice indexing does; passing one is a caller bug.
    pub fn open_edit(&mut self, index: usize, bindings: &BindingSet) -> Option<Cmd> {
        let draft = bindings[index].clone();
        debug!(index, name = %draft.name, "editing key binding");
        self.begin(Session {
            index: Some(index),
            draft,
        })
    }

    /// Opens the dialog on a fresh blank record (empty key and fields, URL
    /// action). The record reaches the host only on a confirmed change.
    pub fn open_create(&mut self) -> Option<Cmd> {
        debug!("creating key binding");
        self.begin(Session {
            index: None,
            draft: KeyBinding::default(),
        })
    }

    // Projects the draft into the widgets and shows the dialog.
    fn begin(&mut self, session: Session) -> Option<Cmd> {
        self.key_input.set_value(&session.draft.key);
        self.name_input.set_value(&session.draft.name);
        self.action_select.select_value(session.draft.action);
        self.argument_input.set_value(&session.draft.argument);
        self.session = Some(session);
        self.focus_field(Field::Key)
    }

    /// Sets the visible width of the three text fields.
    pub fn set_width(&mut self, width: usize) {
        self.key_input.set_width(width);
        self.name_input.set_width(width);
        self.argument_input.set_width(width);
    }

    /// Processes one message. Hidden dialogs ignore everything.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if self.session.is_none() {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            // The key field sees combinations before anything else does: a
            // press with a capture modifier becomes the field's new value
            // and goes no further, not even to the dialog's own bindings.
            if self.focus == Field::Key && key_msg.modifiers.intersects(CAPTURE_MODIFIERS) {
                let combo = format_key_press(key_msg.key, key_msg.modifiers);
                trace!(combo = %combo, "captured key combination");
                self.key_input.set_value(&combo);
                return None;
            }

            if self.key_map.confirm.matches(key_msg) {
                self.confirm();
                return None;
            }
            if self.key_map.cancel.matches(key_msg) {
                self.cancel();
                return None;
            }
            if self.key_map.next_field.matches(key_msg) {
                return self.cycle_focus(1);
            }
            if self.key_map.prev_field.matches(key_msg) {
                return self.cycle_focus(-1);
            }
        }

        match self.focus {
            Field::Key => self.key_input.update(msg),
            Field::Name => self.name_input.update(msg),
            Field::Action => self.action_select.update(msg),
            Field::Argument => self.argument_input.update(msg),
        }
    }

    // Commit: fold the widget values back into the draft and notify the
    // host when something actually changed. The dialog always closes.
    fn confirm(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        let action = self.action_select.value();
        let changed = session.draft.update(
            &self.key_input.value(),
            action,
            &self.name_input.value(),
            &self.argument_input.value(),
        );
        debug!(changed, index = ?session.index, "key binding confirmed");
        if changed {
            match session.index {
                Some(i) => self.host.updated(i, &session.draft),
                None => self.host.created(session.draft),
            }
        }
    }

    // Discard: close without touching the draft or the host.
    fn cancel(&mut self) {
        debug!("key binding edit cancelled");
        self.session = None;
    }

    fn cycle_focus(&mut self, step: isize) -> Option<Cmd> {
        let here = FIELD_ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        let len = FIELD_ORDER.len() as isize;
        let next = (here as isize + step).rem_euclid(len) as usize;
        self.focus_field(FIELD_ORDER[next])
    }

    fn focus_field(&mut self, field: Field) -> Option<Cmd> {
        self.key_input.blur();
        self.name_input.blur();
        Component::blur(&mut self.action_select);
        self.argument_input.blur();

        self.focus = field;
        match field {
            Field::Key => self.key_input.focus(),
            Field::Name => self.name_input.focus(),
            Field::Action => Component::focus(&mut self.action_select),
            Field::Argument => self.argument_input.focus(),
        }
    }

    pub(super) fn is_create(&self) -> bool {
        matches!(self.session, Some(Session { index: None, .. }))
    }
}
