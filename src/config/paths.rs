//! Path management for billtrack
//!
//! ## Path Resolution Order
//!
//! 1. `BILLTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/billtrack` on Linux, `~/Library/Application Support/billtrack`
//!    on macOS, `%APPDATA%\billtrack\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BillError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BILLTRACK_DATA_DIR";

/// Manages all paths used by billtrack
#[derive(Debug, Clone)]
pub struct BillPaths {
    /// Base directory for all billtrack data
    base_dir: PathBuf,
}

impl BillPaths {
    /// Create a new BillPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, BillError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BillPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the active session file
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to bills.json
    pub fn bills_file(&self) -> PathBuf {
        self.data_dir().join("bills.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BillError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BillError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BillError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BillError> {
    ProjectDirs::from("", "", "billtrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BillError::Config("Could not determine a home directory".into()))
}
