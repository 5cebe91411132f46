//! Audit trail for billtrack
//!
//! Every bill create, edit and delete, and every new account, is appended to
//! `audit.log` as one JSON record per line. Bill edits carry the list of
//! fields that changed.

mod changes;
mod logger;
mod record;

pub use changes::{bill_changes, FieldChange};
pub use logger::AuditLog;
pub use record::{AuditAction, AuditRecord, AuditSubject};
