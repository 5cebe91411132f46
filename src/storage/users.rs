//! User repository for JSON storage
//!
//! Manages loading and saving accounts to users.json, indexed by email.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BillError, BillResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
    /// Index: normalized email -> user_id
    by_email: RwLock<HashMap<String, UserId>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_email: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> BillResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_email = self
            .by_email
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_email.clear();

        for user in file_data.users {
            by_email.insert(User::normalize_email(&user.email), user.id);
            data.insert(user.id, user);
        }

        Ok(())
    }

    pub fn save(&self) -> BillResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));

        write_json_atomic(&self.path, &UserData { users })
    }

    pub fn get(&self, id: UserId) -> BillResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Look up a user by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> BillResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_email = self
            .by_email
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_email
            .get(&User::normalize_email(email))
            .and_then(|id| data.get(id))
            .cloned())
    }

    pub fn upsert(&self, user: User) -> BillResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_email = self
            .by_email
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&user.id) {
            by_email.remove(&User::normalize_email(&old.email));
        }
        by_email.insert(User::normalize_email(&user.email), user.id);
        data.insert(user.id, user);
        Ok(())
    }

    pub fn count(&self) -> BillResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
