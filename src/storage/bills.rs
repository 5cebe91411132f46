//! Bill repository for JSON storage
//!
//! Holds every user's bills in `bills.json` and implements [`BillStore`], the
//! row-store boundary the rest of the application talks to.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BillError, BillResult};
use crate::models::{Bill, BillDraft, BillId, BillPatch, UserId};

use super::file_io::{read_json, write_json_atomic};

/// CRUD over bill rows, scoped by user on listing and creation
pub trait BillStore {
    /// All bills belonging to `user_id`, ordered by due date then name
    fn list(&self, user_id: UserId) -> BillResult<Vec<Bill>>;

    /// Persist a new bill and return it with its assigned ID
    fn create(&self, user_id: UserId, draft: BillDraft) -> BillResult<Bill>;

    /// Apply a partial update to an existing bill
    fn update(&self, id: BillId, patch: BillPatch) -> BillResult<Bill>;

    /// Remove a bill
    fn delete(&self, id: BillId) -> BillResult<()>;
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BillData {
    bills: Vec<Bill>,
}

/// Repository for bill persistence
pub struct BillRepository {
    path: PathBuf,
    data: RwLock<HashMap<BillId, Bill>>,
}

impl BillRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load bills from disk, replacing anything in memory
    pub fn load(&self) -> BillResult<()> {
        let file_data: BillData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for bill in file_data.bills {
            data.insert(bill.id, bill);
        }

        Ok(())
    }

    /// Save bills to disk
    pub fn save(&self) -> BillResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut bills: Vec<_> = data.values().cloned().collect();
        sort_bills(&mut bills);

        write_json_atomic(&self.path, &BillData { bills })
    }

    pub fn get(&self, id: BillId) -> BillResult<Option<Bill>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Insert or replace a bill in memory (call `save` to persist)
    pub fn upsert(&self, bill: Bill) -> BillResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(bill.id, bill);
        Ok(())
    }

    /// Remove a bill from memory, returning it if present
    pub fn remove(&self, id: BillId) -> BillResult<Option<Bill>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    /// Number of bills belonging to `user_id`
    pub fn count_for_user(&self, user_id: UserId) -> BillResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().filter(|b| b.user_id == user_id).count())
    }
}

impl BillStore for BillRepository {
    fn list(&self, user_id: UserId) -> BillResult<Vec<Bill>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut bills: Vec<_> = data
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        sort_bills(&mut bills);
        Ok(bills)
    }

    fn create(&self, user_id: UserId, draft: BillDraft) -> BillResult<Bill> {
        let bill = Bill::from_draft(user_id, draft);
        self.upsert(bill.clone())?;
        self.save()?;
        Ok(bill)
    }

    fn update(&self, id: BillId, patch: BillPatch) -> BillResult<Bill> {
        let mut bill = self
            .get(id)?
            .ok_or_else(|| BillError::bill_not_found(id.to_string()))?;

        bill.apply(patch);
        self.upsert(bill.clone())?;
        self.save()?;
        Ok(bill)
    }

    fn delete(&self, id: BillId) -> BillResult<()> {
        self.remove(id)?
            .ok_or_else(|| BillError::bill_not_found(id.to_string()))?;
        self.save()
    }
}

fn sort_bills(bills: &mut [Bill]) {
    bills.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillCategory, Frequency, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BillRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BillRepository::new(temp_dir.path().join("bills.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn draft(name: &str, day: u32) -> BillDraft {
        BillDraft::new(
            name,
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            BillCategory::Utilities,
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.list(UserId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_create_and_list_scoped_by_user() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = UserId::new();
        let bob = UserId::new();

        repo.create(alice, draft("Water", 20)).unwrap();
        repo.create(alice, draft("Rent", 1)).unwrap();
        repo.create(bob, draft("Phone", 5)).unwrap();

        let alice_bills = repo.list(alice).unwrap();
        let names: Vec<_> = alice_bills.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Rent", "Water"]);
        assert_eq!(repo.list(bob).unwrap().len(), 1);
        assert_eq!(repo.count_for_user(alice).unwrap(), 2);
    }

    #[test]
    fn test_update_applies_patch() {
        let (_temp_dir, repo) = create_test_repo();
        let bill = repo.create(UserId::new(), draft("Water", 20)).unwrap();

        let updated = repo
            .update(
                bill.id,
                BillPatch {
                    frequency: Some(Frequency::Quarterly),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, bill.id);
        assert_eq!(updated.frequency, Frequency::Quarterly);
        assert_eq!(repo.get(bill.id).unwrap().unwrap().frequency, Frequency::Quarterly);
    }

    #[test]
    fn test_update_and_delete_missing() {
        let (_temp_dir, repo) = create_test_repo();
        let missing = BillId::new();

        assert!(repo.update(missing, BillPatch::default()).unwrap_err().is_not_found());
        assert!(repo.delete(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let user = UserId::new();
        let bill = repo.create(user, draft("Water", 20)).unwrap();

        repo.delete(bill.id).unwrap();

        assert!(repo.get(bill.id).unwrap().is_none());
        assert!(repo.list(user).unwrap().is_empty());
    }

    #[test]
    fn test_persists_across_instances() {
        let (temp_dir, repo) = create_test_repo();
        let user = UserId::new();
        let bill = repo.create(user, draft("Internet", 22)).unwrap();

        let reopened = BillRepository::new(temp_dir.path().join("bills.json"));
        reopened.load().unwrap();

        let loaded = reopened.get(bill.id).unwrap().unwrap();
        assert_eq!(loaded, bill);
    }
}
