//! YAML Export functionality

use std::io::Write;

use chrono::Utc;

use crate::engine::AnnotatedBill;
use crate::error::{BillError, BillResult};

/// Write bills as YAML, preceded by a comment header
pub fn export_bills_yaml<W: Write>(bills: &[AnnotatedBill<'_>], writer: &mut W) -> BillResult<()> {
    let header = format!(
        "# billtrack bill export\n# Generated: {}\n# Bills: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        bills.len()
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BillError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, bills).map_err(|e| BillError::Export(e.to_string()))?;

    Ok(())
}
