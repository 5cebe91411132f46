//! Bill model
//!
//! A bill is a recurring payment obligation owned by one user. Its urgency
//! status is not a field: it is derived on every read from the due date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BillCategory;
use super::frequency::Frequency;
use super::ids::{BillId, UserId};
use super::money::Money;
use super::status::BillStatus;
use crate::engine;

const MAX_NAME_LEN: usize = 100;

/// Largest accepted amount per billing period: one billion in cents
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// A stored bill record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier, assigned at creation
    pub id: BillId,

    /// Owning user
    pub user_id: UserId,

    /// Display label
    pub name: String,

    /// Amount per billing period
    pub amount: Money,

    /// Next due date
    pub due_date: NaiveDate,

    pub category: BillCategory,

    #[serde(default)]
    pub frequency: Frequency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Bill {
    /// Build a new bill for `user_id` from a validated draft
    pub fn from_draft(user_id: UserId, draft: BillDraft) -> Self {
        let now = Utc::now();
        Self {
            id: BillId::new(),
            user_id,
            name: draft.name.trim().to_string(),
            amount: draft.amount,
            due_date: draft.due_date,
            category: draft.category,
            frequency: draft.frequency.unwrap_or_default(),
            notes: clean_notes(draft.notes),
            created_at: now,
            updated_at: now,
        }
    }

    /// Urgency relative to `now`
    pub fn status(&self, now: NaiveDateTime) -> BillStatus {
        engine::classify_status(self.due_date, now)
    }

    /// Apply a partial update. Identity and ownership never change.
    pub fn apply(&mut self, patch: BillPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(notes) = patch.notes {
            self.notes = clean_notes(notes);
        }
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), BillValidationError> {
        validate_name(&self.name)?;
        validate_amount(self.amount)
    }

    /// Case-insensitive name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, due {})", self.name, self.amount, self.due_date)
    }
}

/// The fields a user supplies to create a bill
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub category: BillCategory,
    /// Defaults to monthly when absent
    pub frequency: Option<Frequency>,
    pub notes: Option<String>,
}

impl BillDraft {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        category: BillCategory,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            due_date,
            category,
            frequency: None,
            notes: None,
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<(), BillValidationError> {
        validate_name(&self.name)?;
        validate_amount(self.amount)?;
        validate_frequency(self.frequency.as_ref())
    }
}

/// A partial update; `None` leaves the field untouched
///
/// `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillPatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<BillCategory>,
    pub frequency: Option<Frequency>,
    pub notes: Option<Option<String>>,
}

impl BillPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), BillValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        validate_frequency(self.frequency.as_ref())
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

fn validate_name(name: &str) -> Result<(), BillValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BillValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(BillValidationError::NameTooLong(name.chars().count()));
    }
    Ok(())
}

fn validate_amount(amount: Money) -> Result<(), BillValidationError> {
    if !amount.is_positive() {
        return Err(BillValidationError::NonPositiveAmount(amount));
    }
    if amount.cents() > MAX_AMOUNT_CENTS {
        return Err(BillValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

fn validate_frequency(frequency: Option<&Frequency>) -> Result<(), BillValidationError> {
    match frequency {
        Some(Frequency::Unrecognized(raw)) => {
            Err(BillValidationError::UnknownFrequency(raw.clone()))
        }
        _ => Ok(()),
    }
}

/// Validation errors for bills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    UnknownFrequency(String),
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Bill name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount too large ({}, max {})",
                amount,
                Money::from_cents(MAX_AMOUNT_CENTS)
            ),
            Self::UnknownFrequency(raw) => write!(f, "Unknown frequency '{}'", raw),
        }
    }
}

impl std::error::Error for BillValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> BillDraft {
        BillDraft::new(
            "  Netflix ",
            Money::from_cents(1599),
            date(2025, 3, 10),
            BillCategory::Entertainment,
        )
    }

    #[test]
    fn test_from_draft_defaults() {
        let user = UserId::new();
        let bill = Bill::from_draft(user, draft().with_notes("   "));

        assert_eq!(bill.user_id, user);
        assert_eq!(bill.name, "Netflix");
        assert_eq!(bill.frequency, Frequency::Monthly);
        assert_eq!(bill.notes, None);
        assert_eq!(bill.created_at, bill.updated_at);
    }

    #[test]
    fn test_status_is_derived_from_due_date() {
        let bill = Bill::from_draft(UserId::new(), draft());
        let before = date(2025, 3, 1).and_hms_opt(9, 0, 0).unwrap();
        let after = date(2025, 3, 11).and_hms_opt(9, 0, 0).unwrap();

        assert_eq!(bill.status(before), BillStatus::Upcoming);
        assert_eq!(bill.status(after), BillStatus::Overdue);
    }

    #[test]
    fn test_apply_patch_keeps_identity() {
        let mut bill = Bill::from_draft(UserId::new(), draft().with_notes("family plan"));
        let id = bill.id;
        let owner = bill.user_id;

        bill.apply(BillPatch {
            amount: Some(Money::from_cents(1799)),
            frequency: Some(Frequency::Yearly),
            notes: Some(None),
            ..Default::default()
        });

        assert_eq!(bill.id, id);
        assert_eq!(bill.user_id, owner);
        assert_eq!(bill.name, "Netflix");
        assert_eq!(bill.amount.cents(), 1799);
        assert_eq!(bill.frequency, Frequency::Yearly);
        assert_eq!(bill.notes, None);
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().validate().is_ok());

        let mut empty = draft();
        empty.name = "   ".into();
        assert_eq!(empty.validate(), Err(BillValidationError::EmptyName));

        let mut free = draft();
        free.amount = Money::zero();
        assert!(matches!(
            free.validate(),
            Err(BillValidationError::NonPositiveAmount(_))
        ));

        let odd = draft().with_frequency(Frequency::Unrecognized("daily".into()));
        assert_eq!(
            odd.validate(),
            Err(BillValidationError::UnknownFrequency("daily".into()))
        );
    }

    #[test]
    fn test_amount_upper_bound() {
        let mut at_limit = draft();
        at_limit.amount = Money::from_cents(MAX_AMOUNT_CENTS);
        assert!(at_limit.validate().is_ok());

        let mut over = draft();
        over.amount = Money::parse("50000000000000000").unwrap();
        assert_eq!(
            over.validate(),
            Err(BillValidationError::AmountTooLarge(over.amount))
        );

        let patch = BillPatch {
            amount: Some(Money::from_cents(MAX_AMOUNT_CENTS + 1)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_patch_validation() {
        assert!(BillPatch::default().is_empty());
        assert!(BillPatch::default().validate().is_ok());

        let negative = BillPatch {
            amount: Some(Money::from_cents(-100)),
            ..Default::default()
        };
        assert!(!negative.is_empty());
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_serde_never_writes_status() {
        let bill = Bill::from_draft(UserId::new(), draft());
        let json = serde_json::to_value(&bill).unwrap();
        assert!(json.get("status").is_none());
        assert_eq!(json["frequency"], "monthly");
        assert_eq!(json["due_date"], "2025-03-10");
    }

    #[test]
    fn test_missing_frequency_loads_as_monthly() {
        let bill = Bill::from_draft(UserId::new(), draft());
        let mut json = serde_json::to_value(&bill).unwrap();
        json.as_object_mut().unwrap().remove("frequency");
        let loaded: Bill = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.frequency, Frequency::Monthly);
    }
}
