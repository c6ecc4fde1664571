//! Rendering for the editor dialog.

use super::model::Model;
use crate::key::KeyMap as _;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Styles for the dialog's chrome. Field and selector styles live on the
/// widgets themselves.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Dialog title.
    pub title: Style,
    /// Field labels in the left column.
    pub label: Style,
    /// Key part of a help entry.
    pub help_key: Style,
    /// Description part of a help entry.
    pub help_desc: Style,
}

/// The default dialog styles.
pub fn default_styles() -> Styles {
    Styles {
        title: Style::new().bold(true),
        label: Style::new().foreground(Color::from("245")),
        help_key: Style::new().bold(true),
        help_desc: Style::new().faint(true),
    }
}

const LABELS: [&str; 4] = ["key", "name", "action", "argument"];

impl Model {
    /// Renders the dialog, or an empty string while hidden.
    pub fn view(&self) -> String {
        if !self.visible() {
            return String::new();
        }

        let title = if self.is_create() {
            "New key binding"
        } else {
            "Edit key binding"
        };

        let column = LABELS.iter().map(|l| l.width()).max().unwrap_or(0);
        let rows = [
            self.key_input.view(),
            self.name_input.view(),
            self.action_select.view(),
            self.argument_input.view(),
        ];

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.styles.title.render(title));
        lines.push(String::new());
        for (label, row) in LABELS.iter().zip(rows) {
            let pad = " ".repeat(column - label.width());
            lines.push(format!(
                "{}{}  {}",
                pad,
                self.styles.label.render(label),
                row
            ));
        }
        lines.push(String::new());
        lines.push(self.help_view());
        lines.join("\n")
    }

    fn help_view(&self) -> String {
        self.key_map
            .short_help()
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| {
                format!(
                    "{} {}",
                    self.styles.help_key.render(&b.help().key),
                    self.styles.help_desc.render(&b.help().desc)
                )
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}
