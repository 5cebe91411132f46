//! Persisted sign-in session
//!
//! The CLI is stateless between invocations, so the signed-in user is kept in
//! `session.json` next to the settings file.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BillError, BillResult};
use crate::models::UserId;

use super::file_io::write_json_atomic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            signed_in_at: Utc::now(),
        }
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The current session, if someone is signed in
    pub fn load(&self) -> BillResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| BillError::Storage(format!("Failed to read session: {}", e)))?;
        let session = serde_json::from_str(&contents)
            .map_err(|e| BillError::Storage(format!("Failed to parse session: {}", e)))?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> BillResult<()> {
        write_json_atomic(&self.path, session)
    }

    /// Remove the session; returns whether one existed
    pub fn clear(&self) -> BillResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .map_err(|e| BillError::Storage(format!("Failed to remove session: {}", e)))?;
        Ok(true)
    }
}
