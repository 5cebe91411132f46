//! Calendar Report
//!
//! Bills due within one calendar month, grouped by day, with month totals and
//! a short list of the next bills due overall.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::display::short_due_label;
use crate::engine::{classify_status, days_until_due};
use crate::error::{BillError, BillResult};
use crate::models::{Bill, BillStatus, Money, User};
use crate::services::BillService;
use crate::storage::Storage;

/// Number of bills shown in the upcoming list
pub const UPCOMING_LIMIT: usize = 6;

#[derive(Debug, Clone)]
pub struct CalendarEntry {
    pub bill: Bill,
    pub status: BillStatus,
}

/// All bills due on one day of the month
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub bills: Vec<CalendarEntry>,
}

#[derive(Debug, Clone)]
pub struct UpcomingEntry {
    pub bill: Bill,
    pub days_until_due: i64,
}

/// Calendar Report
#[derive(Debug, Clone)]
pub struct CalendarReport {
    /// First day of the month shown
    pub month: NaiveDate,
    /// Days that have at least one bill, in date order
    pub days: Vec<CalendarDay>,
    pub total: Money,
    pub count: usize,
    /// Mean amount per bill due this month; zero when there are none
    pub average: Money,
    /// The earliest-due bills across all months
    pub upcoming: Vec<UpcomingEntry>,
}

/// Parse a `YYYY-MM` month into its first day
pub fn parse_month(s: &str) -> BillResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map_err(|_| {
        BillError::Validation(format!("Invalid month '{}'. Expected YYYY-MM", s.trim()))
    })
}

impl CalendarReport {
    /// Generate the calendar for `month` (any day within it) as of `now`
    pub fn generate(
        storage: &Storage,
        user: &User,
        month: NaiveDate,
        now: NaiveDateTime,
    ) -> BillResult<Self> {
        let bills = BillService::new(storage).list(user)?;
        Ok(Self::from_bills(&bills, month, now))
    }

    pub fn from_bills(bills: &[Bill], month: NaiveDate, now: NaiveDateTime) -> Self {
        let first = month.with_day(1).unwrap_or(month);

        let mut in_month: Vec<&Bill> = bills
            .iter()
            .filter(|b| b.due_date.year() == first.year() && b.due_date.month() == first.month())
            .collect();
        in_month.sort_by_key(|b| b.due_date);

        let mut days: Vec<CalendarDay> = Vec::new();
        for bill in &in_month {
            let entry = CalendarEntry {
                bill: (*bill).clone(),
                status: classify_status(bill.due_date, now),
            };
            match days.last_mut() {
                Some(day) if day.date == bill.due_date => day.bills.push(entry),
                _ => days.push(CalendarDay {
                    date: bill.due_date,
                    bills: vec![entry],
                }),
            }
        }

        let total: Money = in_month.iter().map(|b| b.amount).sum();
        let count = in_month.len();
        let average = if count == 0 {
            Money::zero()
        } else {
            Money::from_cents((total.cents() as f64 / count as f64).round() as i64)
        };

        let mut by_due: Vec<&Bill> = bills.iter().collect();
        by_due.sort_by_key(|b| b.due_date);
        let upcoming = by_due
            .into_iter()
            .take(UPCOMING_LIMIT)
            .map(|b| UpcomingEntry {
                bill: b.clone(),
                days_until_due: days_until_due(b.due_date, now),
            })
            .collect();

        Self {
            month: first,
            days,
            total,
            count,
            average,
            upcoming,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!("Bill Calendar - {}\n", self.month.format("%B %Y")));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.days.is_empty() {
            output.push_str("No bills due this month.\n");
        }

        for day in &self.days {
            output.push_str(&format!("\n{}\n", settings.format_date(day.date)));
            for entry in &day.bills {
                output.push_str(&format!(
                    "  {:<28} {:>12}  {}\n",
                    entry.bill.name,
                    settings.format_money(entry.bill.amount),
                    entry.status.label()
                ));
            }
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Due:        {}\n", settings.format_money(self.total)));
        output.push_str(&format!("Number of Bills:  {}\n", self.count));
        output.push_str(&format!("Average per Bill: {}\n", settings.format_money(self.average)));

        output.push_str("\nUpcoming\n");
        if self.upcoming.is_empty() {
            output.push_str("  (none)\n");
        }
        for entry in &self.upcoming {
            output.push_str(&format!(
                "  {:<28} {:>12}  {}\n",
                entry.bill.name,
                settings.format_money(entry.bill.amount),
                short_due_label(entry.days_until_due)
            ));
        }

        output
    }
}
