//! Dashboard Report
//!
//! Bills grouped by urgency with counts and the normalized monthly total.

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::display::due_label;
use crate::engine::{days_until_due, normalize_to_monthly, summarize, MonthlyAmount};
use crate::error::BillResult;
use crate::models::{Bill, BillStatus, User};
use crate::services::BillService;
use crate::storage::Storage;

/// One bill as listed on the dashboard
#[derive(Debug, Clone)]
pub struct DashboardEntry {
    pub bill: Bill,
    pub days_until_due: i64,
    pub monthly_equivalent: MonthlyAmount,
}

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Reference time the statuses were computed against
    pub as_of: NaiveDateTime,
    pub total_count: usize,
    pub overdue: Vec<DashboardEntry>,
    pub due_soon: Vec<DashboardEntry>,
    pub upcoming: Vec<DashboardEntry>,
    pub monthly_total: MonthlyAmount,
}

impl DashboardReport {
    /// Generate the dashboard for `user` as of `now`
    pub fn generate(storage: &Storage, user: &User, now: NaiveDateTime) -> BillResult<Self> {
        let bills = BillService::new(storage).list(user)?;
        Ok(Self::from_bills(&bills, now))
    }

    pub fn from_bills(bills: &[Bill], now: NaiveDateTime) -> Self {
        let summary = summarize(bills, now);
        let entries = |status: BillStatus| -> Vec<DashboardEntry> {
            summary
                .by_status
                .get(status)
                .iter()
                .map(|bill| DashboardEntry {
                    bill: (*bill).clone(),
                    days_until_due: days_until_due(bill.due_date, now),
                    monthly_equivalent: normalize_to_monthly(bill.amount, &bill.frequency),
                })
                .collect()
        };

        Self {
            as_of: now,
            total_count: summary.total_count,
            overdue: entries(BillStatus::Overdue),
            due_soon: entries(BillStatus::DueSoon),
            upcoming: entries(BillStatus::Upcoming),
            monthly_total: summary.total_monthly_equivalent,
        }
    }

    pub fn section(&self, status: BillStatus) -> &[DashboardEntry] {
        match status {
            BillStatus::Overdue => &self.overdue,
            BillStatus::DueSoon => &self.due_soon,
            BillStatus::Upcoming => &self.upcoming,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard - {}\n",
            settings.format_date(self.as_of.date())
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total Bills: {}   Overdue: {}   Due Soon: {}   Upcoming: {}\n",
            self.total_count,
            self.overdue.len(),
            self.due_soon.len(),
            self.upcoming.len()
        ));
        output.push_str(&format!(
            "Monthly Total: {}\n",
            settings.format_money(self.monthly_total.to_money())
        ));

        for status in BillStatus::BY_URGENCY {
            let entries = self.section(status);
            output.push_str(&format!("\n{} ({})\n", status.label().to_uppercase(), entries.len()));
            output.push_str(&"-".repeat(72));
            output.push('\n');

            if entries.is_empty() {
                output.push_str("  (none)\n");
                continue;
            }

            for entry in entries {
                output.push_str(&format!(
                    "  {:<24} {:>12}  {:<14} {:<14} {}\n",
                    entry.bill.name,
                    settings.format_money(entry.bill.amount),
                    entry.bill.category.label(),
                    settings.format_date(entry.bill.due_date),
                    due_label(entry.days_until_due)
                ));
            }
        }

        output
    }
}
