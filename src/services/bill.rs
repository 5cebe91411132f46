//! Bill service
//!
//! Business logic for bill management: validation, ownership checks, lookup
//! by ID or name, and the audit trail around every mutation.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::audit::AuditRecord;
use crate::engine::{self, Summary};
use crate::error::{BillError, BillResult};
use crate::models::{Bill, BillDraft, BillPatch, User};
use crate::storage::{BillStore, Storage};

/// Service for bill management
pub struct BillService<'a> {
    storage: &'a Storage,
}

impl<'a> BillService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a bill owned by `user`
    pub fn create(&self, user: &User, draft: BillDraft) -> BillResult<Bill> {
        draft
            .validate()
            .map_err(|e| BillError::Validation(e.to_string()))?;

        let bill = self.storage.bills.create(user.id, draft)?;

        self.storage.record(&AuditRecord::bill_created(&bill))?;

        info!(bill_id = %bill.id, name = %bill.name, "bill created");
        Ok(bill)
    }

    /// All of `user`'s bills, ordered by due date
    pub fn list(&self, user: &User) -> BillResult<Vec<Bill>> {
        self.storage.bills.list(user.id)
    }

    /// Find one of `user`'s bills by ID (full or short form) or by name
    ///
    /// Short IDs and names must each pick out a single bill; names are
    /// matched case-insensitively. Bills that belong to someone else are
    /// reported as not found.
    pub fn find(&self, user: &User, identifier: &str) -> BillResult<Bill> {
        let bills = self.list(user)?;

        let mut by_id = bills.iter().filter(|b| b.id.matches(identifier));
        match (by_id.next(), by_id.next()) {
            (Some(bill), None) => return Ok(bill.clone()),
            (Some(_), Some(_)) => {
                return Err(BillError::Validation(format!(
                    "More than one bill matches ID '{}'; use the full ID instead",
                    identifier.trim()
                )))
            }
            (None, _) => {}
        }

        let mut by_name = bills.into_iter().filter(|b| b.matches_name(identifier));
        match (by_name.next(), by_name.next()) {
            (Some(bill), None) => Ok(bill),
            (Some(_), Some(_)) => Err(BillError::Validation(format!(
                "More than one bill is named '{}'; use its ID instead",
                identifier.trim()
            ))),
            (None, _) => Err(BillError::bill_not_found(identifier.trim())),
        }
    }

    /// Apply a partial update to one of `user`'s bills
    pub fn update(&self, user: &User, identifier: &str, patch: BillPatch) -> BillResult<Bill> {
        if patch.is_empty() {
            return Err(BillError::Validation("Nothing to update".into()));
        }
        patch
            .validate()
            .map_err(|e| BillError::Validation(e.to_string()))?;

        let before = self.find(user, identifier)?;
        let after = self.storage.bills.update(before.id, patch)?;

        self.storage
            .record(&AuditRecord::bill_updated(&before, &after))?;

        info!(bill_id = %after.id, "bill updated");
        Ok(after)
    }

    /// Delete one of `user`'s bills, returning what was removed
    pub fn delete(&self, user: &User, identifier: &str) -> BillResult<Bill> {
        let bill = self.find(user, identifier)?;
        self.storage.bills.delete(bill.id)?;

        self.storage.record(&AuditRecord::bill_deleted(&bill))?;

        info!(bill_id = %bill.id, name = %bill.name, "bill deleted");
        Ok(bill)
    }

    pub fn count(&self, user: &User) -> BillResult<usize> {
        self.storage.bills.count_for_user(user.id)
    }
}

/// Summarize an already-loaded list of bills as of `now`
///
/// Thin wrapper so callers holding a `Vec<Bill>` get a borrowed summary
/// without reaching into the engine directly.
pub fn summarize_bills(bills: &[Bill], now: NaiveDateTime) -> Summary<'_> {
    let summary = engine::summarize(bills, now);
    debug!(
        total = summary.total_count,
        overdue = summary.by_status.overdue.len(),
        due_soon = summary.by_status.due_soon.len(),
        "summarized bills"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditAction, AuditSubject};
    use crate::config::paths::BillPaths;
    use crate::models::{BillCategory, BillId, BillStatus, Frequency, Money};
    use chrono::NaiveDate;
    use uuid::Uuid;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn user(email: &str) -> User {
        User::new(email, "Test", "User", "hash".into())
    }

    fn draft(name: &str, cents: i64, day: u32) -> BillDraft {
        BillDraft::new(
            name,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            BillCategory::Utilities,
        )
    }

    #[test]
    fn test_create_bill() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");

        let bill = service.create(&owner, draft("Electricity", 8550, 15)).unwrap();

        assert_eq!(bill.user_id, owner.id);
        assert_eq!(bill.frequency, Frequency::Monthly);
        assert_eq!(service.list(&owner).unwrap().len(), 1);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::Created);
        assert_eq!(audit[0].subject, AuditSubject::Bill(bill.id));
        assert_eq!(audit[0].label, "Electricity");
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");

        let err = service.create(&owner, draft("", 100, 1)).unwrap_err();
        assert!(err.is_validation());

        let err = service.create(&owner, draft("Free", 0, 1)).unwrap_err();
        assert!(err.is_validation());

        assert!(service.list(&owner).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id_and_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");
        let bill = service.create(&owner, draft("Internet", 6000, 20)).unwrap();

        assert_eq!(service.find(&owner, &bill.id.to_string()).unwrap().id, bill.id);
        assert_eq!(
            service.find(&owner, &bill.id.as_uuid().to_string()).unwrap().id,
            bill.id
        );
        assert_eq!(service.find(&owner, "internet").unwrap().id, bill.id);
        assert!(service.find(&owner, "Gas").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_ambiguous_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");
        service.create(&owner, draft("Loan", 10000, 1)).unwrap();
        service.create(&owner, draft("loan", 20000, 2)).unwrap();

        assert!(service.find(&owner, "LOAN").unwrap_err().is_validation());
    }

    #[test]
    fn test_find_ambiguous_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");

        for (uuid, name) in [
            ("0badcafe-0000-4000-8000-000000000001", "Water"),
            ("0badcafe-0000-4000-8000-000000000002", "Sewer"),
        ] {
            let mut bill = Bill::from_draft(owner.id, draft(name, 2500, 12));
            bill.id = BillId::from(Uuid::parse_str(uuid).unwrap());
            storage.bills.upsert(bill).unwrap();
        }
        storage.bills.save().unwrap();

        assert!(service
            .find(&owner, "bil-0badcafe")
            .unwrap_err()
            .is_validation());
        assert_eq!(
            service
                .find(&owner, "0badcafe-0000-4000-8000-000000000002")
                .unwrap()
                .name,
            "Sewer"
        );
    }

    #[test]
    fn test_other_users_bills_are_invisible() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let alice = user("alice@example.com");
        let bob = user("bob@example.com");
        let bill = service.create(&alice, draft("Rent", 150000, 1)).unwrap();

        assert!(service.list(&bob).unwrap().is_empty());
        assert!(service
            .find(&bob, &bill.id.to_string())
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(&bob, "Rent").unwrap_err().is_not_found());
        assert_eq!(service.count(&alice).unwrap(), 1);
    }

    #[test]
    fn test_update_records_field_changes() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");
        service.create(&owner, draft("Phone", 4500, 10)).unwrap();

        let updated = service
            .update(
                &owner,
                "phone",
                BillPatch {
                    amount: Some(Money::from_cents(5000)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount.cents(), 5000);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit[1].action, AuditAction::Updated);
        assert_eq!(audit[1].changes.len(), 1);
        assert_eq!(audit[1].changes[0].field, "amount");
        assert_eq!(audit[1].changes[0].from, "$45.00");
        assert_eq!(audit[1].changes[0].to, "$50.00");
    }

    #[test]
    fn test_empty_update_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");
        service.create(&owner, draft("Phone", 4500, 10)).unwrap();

        assert!(service
            .update(&owner, "Phone", BillPatch::default())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_delete_bill() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");
        service.create(&owner, draft("Gym", 3000, 5)).unwrap();

        let removed = service.delete(&owner, "gym").unwrap();
        assert_eq!(removed.name, "Gym");
        assert!(service.list(&owner).unwrap().is_empty());
        assert_eq!(
            storage.audit().read_all().unwrap()[1].action,
            AuditAction::Deleted
        );
    }

    #[test]
    fn test_summarize_bills() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        let owner = user("a@example.com");
        service.create(&owner, draft("Late", 1000, 1)).unwrap();
        service.create(&owner, draft("Soon", 2000, 11)).unwrap();
        service.create(&owner, draft("Later", 3000, 25)).unwrap();

        let bills = service.list(&owner).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let summary = summarize_bills(&bills, now);

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.by_status.count(BillStatus::Overdue), 1);
        assert_eq!(summary.by_status.count(BillStatus::DueSoon), 1);
        assert_eq!(summary.by_status.count(BillStatus::Upcoming), 1);
        assert_eq!(summary.total_monthly_equivalent.to_money().cents(), 6000);
    }
}
