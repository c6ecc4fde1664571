//! Key-binding records and the seam to their owning controller.
//!
//! A [`KeyBinding`] maps a key combination to an action: opening a URL or
//! executing a command. Records live in an ordered [`BindingSet`] owned by
//! the embedding application; the editor dialog works on an owned copy and
//! commits results through the [`BindingHost`] trait, so no widget ever
//! holds a reference into the host's list.

use std::fmt;

/// What a binding does when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    /// Open the argument as a URL.
    #[default]
    Url,
    /// Execute the argument as a command line.
    Exec,
}

impl ActionKind {
    /// Short human-readable label, used by selector widgets.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Url => "URL",
            ActionKind::Exec => "command",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single key-binding record.
///
/// The `key` field holds the canonical textual key combination (see
/// [`crate::key::format_key_press`]); an empty string means the combination
/// is unset. `argument` is a URL or a command line depending on `action`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBinding {
    /// Canonical key combination, empty when unset.
    pub key: String,
    /// What triggering the binding does.
    pub action: ActionKind,
    /// User-facing label.
    pub name: String,
    /// URL or command line, depending on `action`.
    pub argument: String,
}

impl KeyBinding {
    /// Creates a record from its four fields.
    pub fn new(
        key: impl Into<String>,
        action: ActionKind,
        name: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            action,
            name: name.into(),
            argument: argument.into(),
        }
    }

    /// Replaces all four fields at once and reports whether anything
    /// actually changed.
    ///
    /// "Changed" means field-by-field value inequality against the prior
    /// state, so a caller can distinguish a no-op confirmation from a real
    /// edit:
    ///
    /// ```rust
    /// use keybind_editor::binding::{ActionKind, KeyBinding};
    ///
    /// let mut b = KeyBinding::new("ctrl+k", ActionKind::Exec, "Launch", "/bin/foo");
    /// assert!(!b.update("ctrl+k", ActionKind::Exec, "Launch", "/bin/foo"));
    /// assert!(b.update("ctrl+k", ActionKind::Exec, "Launch2", "/bin/foo"));
    /// assert_eq!(b.name, "Launch2");
    /// ```
    pub fn update(
        &mut self,
        key: &str,
        action: ActionKind,
        name: &str,
        argument: &str,
    ) -> bool {
        let changed = self.key != key
            || self.action != action
            || self.name != name
            || self.argument != argument;
        if changed {
            self.key = key.to_string();
            self.action = action;
            self.name = name.to_string();
            self.argument = argument.to_string();
        }
        changed
    }
}

/// An ordered list of binding records.
///
/// Position is meaningful: the editor identifies the record it is editing by
/// index, and [`BindingHost::updated`] reports the same index back. Indexing
/// with `[]` panics on out-of-range positions like any slice access; use
/// [`BindingSet::get`] for a checked lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
    entries: Vec<KeyBinding>,
}

impl BindingSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checked positional lookup.
    pub fn get(&self, index: usize) -> Option<&KeyBinding> {
        self.entries.get(index)
    }

    /// Appends a record.
    pub fn push(&mut self, binding: KeyBinding) {
        self.entries.push(binding);
    }

    /// Overwrites the record at `index`. Panics when out of range.
    pub fn replace(&mut self, index: usize, binding: KeyBinding) {
        self.entries[index] = binding;
    }

    /// Iterates the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyBinding> {
        self.entries.iter()
    }
}

impl std::ops::Index<usize> for BindingSet {
    type Output = KeyBinding;

    fn index(&self, index: usize) -> &KeyBinding {
        &self.entries[index]
    }
}

impl From<Vec<KeyBinding>> for BindingSet {
    fn from(entries: Vec<KeyBinding>) -> Self {
        Self { entries }
    }
}

impl FromIterator<KeyBinding> for BindingSet {
    fn from_iter<I: IntoIterator<Item = KeyBinding>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BindingSet {
    type Item = &'a KeyBinding;
    type IntoIter = std::slice::Iter<'a, KeyBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The capability the editor commits results through.
///
/// Implemented by whatever owns the canonical [`BindingSet`], typically the
/// preferences screen embedding the dialog. The editor calls exactly one of
/// these per confirmed edit, and neither when a confirmation changed
/// nothing.
pub trait BindingHost {
    /// An existing record changed. `binding` is the full replacement value
    /// for the record at `index`; the host is expected to store it there.
    fn updated(&mut self, index: usize, binding: &KeyBinding);

    /// A record was created. The host takes ownership and is expected to
    /// append it to its list.
    fn created(&mut self, binding: KeyBinding);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_blank_url() {
        let b = KeyBinding::default();
        assert_eq!(b.key, "");
        assert_eq!(b.action, ActionKind::Url);
        assert_eq!(b.name, "");
        assert_eq!(b.argument, "");
    }

    #[test]
    fn test_update_reports_no_change() {
        let mut b = KeyBinding::new("alt+u", ActionKind::Url, "Open", "http://example.com");
        assert!(!b.update("alt+u", ActionKind::Url, "Open", "http://example.com"));
    }

    #[test]
    fn test_update_detects_each_field() {
        let base = KeyBinding::new("alt+u", ActionKind::Url, "Open", "http://example.com");

        let mut b = base.clone();
        assert!(b.update("alt+i", ActionKind::Url, "Open", "http://example.com"));
        assert_eq!(b.key, "alt+i");

        let mut b = base.clone();
        assert!(b.update("alt+u", ActionKind::Exec, "Open", "http://example.com"));
        assert_eq!(b.action, ActionKind::Exec);

        let mut b = base.clone();
        assert!(b.update("alt+u", ActionKind::Url, "Open2", "http://example.com"));
        assert_eq!(b.name, "Open2");

        let mut b = base;
        assert!(b.update("alt+u", ActionKind::Url, "Open", "http://example.org"));
        assert_eq!(b.argument, "http://example.org");
    }

    #[test]
    fn test_set_indexing_and_replace() {
        let mut set: BindingSet = vec![
            KeyBinding::new("ctrl+a", ActionKind::Url, "A", "http://a"),
            KeyBinding::new("ctrl+b", ActionKind::Exec, "B", "/bin/b"),
        ]
        .into();

        assert_eq!(set.len(), 2);
        assert_eq!(set[1].name, "B");
        assert!(set.get(2).is_none());

        set.replace(0, KeyBinding::new("ctrl+c", ActionKind::Exec, "C", "/bin/c"));
        assert_eq!(set[0].name, "C");
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let set = BindingSet::new();
        let _ = &set[0];
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(ActionKind::Url.to_string(), "URL");
        assert_eq!(ActionKind::Exec.to_string(), "command");
    }
}
