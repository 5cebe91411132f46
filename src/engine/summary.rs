//! Aggregation of bill collections by status

use chrono::NaiveDateTime;

use super::classify::classify_status;
use super::normalize::{normalize_to_monthly, MonthlyAmount};
use crate::models::{Bill, BillStatus};

/// Bills partitioned by status; each input bill lands in exactly one bucket
#[derive(Debug, Clone, Default)]
pub struct StatusBuckets<'a> {
    pub overdue: Vec<&'a Bill>,
    pub due_soon: Vec<&'a Bill>,
    pub upcoming: Vec<&'a Bill>,
}

impl<'a> StatusBuckets<'a> {
    pub fn get(&self, status: BillStatus) -> &[&'a Bill] {
        match status {
            BillStatus::Overdue => &self.overdue,
            BillStatus::DueSoon => &self.due_soon,
            BillStatus::Upcoming => &self.upcoming,
        }
    }

    pub fn count(&self, status: BillStatus) -> usize {
        self.get(status).len()
    }

    fn push(&mut self, status: BillStatus, bill: &'a Bill) {
        match status {
            BillStatus::Overdue => self.overdue.push(bill),
            BillStatus::DueSoon => self.due_soon.push(bill),
            BillStatus::Upcoming => self.upcoming.push(bill),
        }
    }
}

/// Counts and totals over a set of bills
#[derive(Debug, Clone, Default)]
pub struct Summary<'a> {
    pub total_count: usize,
    pub by_status: StatusBuckets<'a>,
    pub total_monthly_equivalent: MonthlyAmount,
}

/// Partition `bills` by status at `now` and total their monthly equivalents
///
/// Input order is preserved within each bucket.
pub fn summarize<'a, I>(bills: I, now: NaiveDateTime) -> Summary<'a>
where
    I: IntoIterator<Item = &'a Bill>,
{
    let mut summary = Summary::default();
    for bill in bills {
        summary.total_count += 1;
        summary.total_monthly_equivalent += normalize_to_monthly(bill.amount, &bill.frequency);
        summary
            .by_status
            .push(classify_status(bill.due_date, now), bill);
    }
    summary
}
