//! Audit log CLI command

use crate::error::BillResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> BillResult<()> {
    let records = storage.audit().recent(limit)?;

    if records.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record);
    }
    Ok(())
}
