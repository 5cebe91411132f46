//! Bill status engine
//!
//! Pure functions over in-memory bills:
//!
//! - [`classify_status`]: urgency of a due date relative to a reference time
//! - [`normalize_to_monthly`]: a periodic amount expressed per month
//! - [`summarize`]: counts, status buckets and the monthly total for a set of bills
//!
//! Nothing here reads the clock or touches storage. Callers pass `now`
//! explicitly, so the same inputs always give the same answer.

mod classify;
mod normalize;
mod summary;

pub use classify::{classify_status, classify_status_on, days_until_due, start_of_day, DUE_SOON_DAYS};
pub use normalize::{normalize_to_monthly, MonthlyAmount, WEEKS_PER_MONTH};
pub use summary::{summarize, StatusBuckets, Summary};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{Bill, BillStatus};

/// A bill together with the values derived from it at a given time
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedBill<'a> {
    #[serde(flatten)]
    pub bill: &'a Bill,
    pub status: BillStatus,
    pub days_until_due: i64,
    #[serde(serialize_with = "serialize_monthly")]
    pub monthly_equivalent: MonthlyAmount,
}

/// Attach status, days-until-due and monthly equivalent to `bill`
pub fn annotate(bill: &Bill, now: NaiveDateTime) -> AnnotatedBill<'_> {
    AnnotatedBill {
        bill,
        status: classify_status(bill.due_date, now),
        days_until_due: days_until_due(bill.due_date, now),
        monthly_equivalent: normalize_to_monthly(bill.amount, &bill.frequency),
    }
}

fn serialize_monthly<S: serde::Serializer>(
    amount: &MonthlyAmount,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(amount.units())
}
