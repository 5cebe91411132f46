//! Audit records
//!
//! A record names the action, the bill or account it touched, and for bill
//! edits the individual fields that changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::changes::{bill_changes, FieldChange};
use crate::models::{Bill, BillId, User, UserId};

/// What happened to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// The subject was added
    Created,
    /// At least one field was edited
    Updated,
    /// The subject was removed
    Deleted,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "CREATE",
            Self::Updated => "UPDATE",
            Self::Deleted => "DELETE",
        })
    }
}

/// The bill or account a record is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum AuditSubject {
    /// A bill, by ID
    Bill(BillId),
    /// A user account, by ID
    User(UserId),
}

impl fmt::Display for AuditSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bill(id) => write!(f, "Bill {}", id),
            Self::User(id) => write!(f, "User {}", id),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the action happened
    pub timestamp: DateTime<Utc>,

    /// Create, update or delete
    pub action: AuditAction,

    /// What was acted on
    pub subject: AuditSubject,

    /// Bill name or account email at the time of the action
    pub label: String,

    /// Edited fields, in bill field order; empty for creates and deletes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<FieldChange>,
}

impl AuditRecord {
    fn new(action: AuditAction, subject: AuditSubject, label: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            subject,
            label: label.to_string(),
            changes: Vec::new(),
        }
    }

    pub fn bill_created(bill: &Bill) -> Self {
        Self::new(AuditAction::Created, AuditSubject::Bill(bill.id), &bill.name)
    }

    /// Labelled with the bill's new name
    pub fn bill_updated(before: &Bill, after: &Bill) -> Self {
        Self {
            changes: bill_changes(before, after),
            ..Self::new(AuditAction::Updated, AuditSubject::Bill(after.id), &after.name)
        }
    }

    pub fn bill_deleted(bill: &Bill) -> Self {
        Self::new(AuditAction::Deleted, AuditSubject::Bill(bill.id), &bill.name)
    }

    /// Only the ID and email are kept; credentials never reach the log
    pub fn user_created(user: &User) -> Self {
        Self::new(AuditAction::Created, AuditSubject::User(user.id), &user.email)
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.subject,
            self.label
        )?;

        if !self.changes.is_empty() {
            let changes: Vec<String> = self.changes.iter().map(|c| c.to_string()).collect();
            write!(f, "\n  Changes: {}", changes.join(", "))?;
        }
        Ok(())
    }
}
