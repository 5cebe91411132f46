//! Storage layer for billtrack
//!
//! JSON file storage with atomic writes, plus the audit trail every mutation
//! goes through.

pub mod bills;
pub mod file_io;
pub mod session;
pub mod users;

pub use bills::{BillRepository, BillStore};
pub use file_io::{read_json, write_json_atomic};
pub use session::{Session, SessionStore};
pub use users::UserRepository;

use crate::audit::{AuditLog, AuditRecord};
use crate::config::paths::BillPaths;
use crate::error::BillResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BillPaths,
    pub bills: BillRepository,
    pub users: UserRepository,
    pub session: SessionStore,
    audit: AuditLog,
}

impl Storage {
    pub fn new(paths: BillPaths) -> BillResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            bills: BillRepository::new(paths.bills_file()),
            users: UserRepository::new(paths.users_file()),
            session: SessionStore::new(paths.session_file()),
            audit: AuditLog::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BillPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> BillResult<()> {
        self.bills.load()?;
        self.users.load()?;
        Ok(())
    }

    /// Append a record to the audit log
    pub fn record(&self, record: &AuditRecord) -> BillResult<()> {
        self.audit.append(record)
    }
}
