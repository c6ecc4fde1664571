//! Modal dialog for editing one key-binding record.
//!
//! The dialog edits a [`crate::binding::KeyBinding`] (a key combination
//! mapped to opening a URL or executing a command) through four widgets: a
//! key field that captures pressed combinations, name and argument fields,
//! and an action selector. It is opened either on an existing record
//! ([`Model::open_edit`]) or on a blank one ([`Model::open_create`]), and
//! commits results through the [`crate::binding::BindingHost`] injected at
//! construction. A confirmation that changed nothing notifies nobody;
//! cancel never notifies.
//!
//! The dialog is an embedded component: the surrounding model forwards
//! messages to [`Model::update`] while [`Model::visible`] is true and
//! splices [`Model::view`] into its own output.

mod keymap;
mod model;
mod view;


pub use keymap::EditorKeyMap;
pub use model::{new, Model};
pub use view::{default_styles, Styles};
