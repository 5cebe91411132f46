//! Field-level changes between two versions of a bill

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Bill;

/// Longer notes are cut to this many characters in the log
const NOTES_PREVIEW_CHARS: usize = 40;

/// A single edited field, with both values rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Bill field name as stored, e.g. `due_date`
    pub field: String,
    /// Value before the edit
    pub from: String,
    /// Value after the edit
    pub to: String,
}

impl FieldChange {
    fn new(field: &str, from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Self {
            field: field.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.from, self.to)
    }
}

/// The user-editable fields that differ between `before` and `after`
///
/// Timestamps and identity are never reported.
pub fn bill_changes(before: &Bill, after: &Bill) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(FieldChange::new("name", &before.name, &after.name));
    }
    if before.amount != after.amount {
        changes.push(FieldChange::new("amount", before.amount, after.amount));
    }
    if before.due_date != after.due_date {
        changes.push(FieldChange::new("due_date", before.due_date, after.due_date));
    }
    if before.category != after.category {
        changes.push(FieldChange::new("category", before.category, after.category));
    }
    if before.frequency != after.frequency {
        changes.push(FieldChange::new(
            "frequency",
            before.frequency.as_str(),
            after.frequency.as_str(),
        ));
    }
    if before.notes != after.notes {
        changes.push(FieldChange::new(
            "notes",
            notes_preview(before.notes.as_deref()),
            notes_preview(after.notes.as_deref()),
        ));
    }

    changes
}

fn notes_preview(notes: Option<&str>) -> String {
    match notes {
        None => "(none)".to_string(),
        Some(text) if text.chars().count() > NOTES_PREVIEW_CHARS => {
            let cut: String = text.chars().take(NOTES_PREVIEW_CHARS).collect();
            format!("\"{}...\"", cut)
        }
        Some(text) => format!("\"{}\"", text),
    }
}
