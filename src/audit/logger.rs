//! The on-disk audit log
//!
//! Records are appended as JSON lines and flushed before `append` returns.
//! The file is never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BillError, BillResult};

use super::record::AuditRecord;

/// Append-only JSONL file of [`AuditRecord`]s
pub struct AuditLog {
    /// Location of `audit.log`; created on first append
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one record at the end of the log
    pub fn append(&self, record: &AuditRecord) -> BillResult<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| BillError::Json(format!("Failed to encode audit record: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BillError::Io(format!("Failed to open audit log: {}", e)))?;
        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| BillError::Io(format!("Failed to write audit log: {}", e)))?;

        debug!(action = %record.action, subject = %record.subject, "audit record appended");
        Ok(())
    }

    /// Every record, oldest first. A missing log reads as empty.
    ///
    /// Blank lines are skipped; a malformed line is an error naming its
    /// 1-based line number.
    pub fn read_all(&self) -> BillResult<Vec<AuditRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| BillError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let number = index + 1;
            let line = line
                .map_err(|e| BillError::Io(format!("Audit log line {}: {}", number, e)))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|e| BillError::Json(format!("Audit log line {}: {}", number, e)))?;
            records.push(record);
        }
        Ok(records)
    }

    /// The last `limit` records, oldest first
    pub fn recent(&self, limit: usize) -> BillResult<Vec<AuditRecord>> {
        let mut records = self.read_all()?;
        let skip = records.len().saturating_sub(limit);
        Ok(records.split_off(skip))
    }
}
