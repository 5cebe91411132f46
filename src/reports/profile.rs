//! Profile Report

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::{NotificationChannel, NotificationPreferences, Settings};
use crate::engine::{summarize, MonthlyAmount};
use crate::error::BillResult;
use crate::models::{Bill, Money, User};
use crate::services::BillService;
use crate::storage::Storage;

/// Account details with bill statistics
#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub name: String,
    pub email: String,
    pub joined: DateTime<Utc>,
    pub active_bills: usize,
    pub monthly_total: MonthlyAmount,
    /// Mean per-period amount across all bills; zero when there are none
    pub average_amount: Money,
    pub notifications: NotificationPreferences,
}

impl ProfileReport {
    pub fn generate(
        storage: &Storage,
        user: &User,
        settings: &Settings,
        now: NaiveDateTime,
    ) -> BillResult<Self> {
        let bills = BillService::new(storage).list(user)?;
        Ok(Self::from_bills(user, &bills, settings, now))
    }

    pub fn from_bills(user: &User, bills: &[Bill], settings: &Settings, now: NaiveDateTime) -> Self {
        let summary = summarize(bills, now);
        let total: Money = bills.iter().map(|b| b.amount).sum();
        let average_amount = if bills.is_empty() {
            Money::zero()
        } else {
            Money::from_cents((total.cents() as f64 / bills.len() as f64).round() as i64)
        };

        Self {
            name: user.display_name(),
            email: user.email.clone(),
            joined: user.created_at,
            active_bills: summary.total_count,
            monthly_total: summary.total_monthly_equivalent,
            average_amount,
            notifications: settings.notifications.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let on_off = |enabled: bool| if enabled { "on" } else { "off" };
        let mut output = String::new();

        output.push_str(&format!("Profile: {}\n", self.name));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("  Email:          {}\n", self.email));
        output.push_str(&format!(
            "  Member since:   {}\n",
            settings.format_date(self.joined.date_naive())
        ));
        output.push_str(&format!("  Active bills:   {}\n", self.active_bills));
        output.push_str(&format!(
            "  Monthly total:  {}\n",
            settings.format_money(self.monthly_total.to_money())
        ));
        output.push_str(&format!(
            "  Average bill:   {}\n",
            settings.format_money(self.average_amount)
        ));

        output.push_str("\nNotifications\n");
        for channel in NotificationChannel::ALL {
            output.push_str(&format!(
                "  {:<16}{}\n",
                format!("{}:", channel),
                on_off(self.notifications.get(channel))
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillCategory, BillDraft, Frequency};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_profile_statistics() {
        let user = User::new("sam@example.com", "Sam", "Lee", "hash".into());
        let due = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let bills = vec![
            Bill::from_draft(
                user.id,
                BillDraft::new("Streaming", Money::from_cents(1500), due, BillCategory::Entertainment),
            ),
            Bill::from_draft(
                user.id,
                BillDraft::new("Domain", Money::from_cents(2400), due, BillCategory::Other)
                    .with_frequency(Frequency::Yearly),
            ),
        ];

        let report = ProfileReport::from_bills(&user, &bills, &Settings::default(), now());

        assert_eq!(report.name, "Sam Lee");
        assert_eq!(report.active_bills, 2);
        assert_eq!(report.monthly_total.to_money().cents(), 1700);
        assert_eq!(report.average_amount.cents(), 1950);
    }

    #[test]
    fn test_profile_without_bills() {
        let user = User::new("sam@example.com", "", "", "hash".into());
        let mut settings = Settings::default();
        settings.notifications.set(NotificationChannel::Sms, true);

        let report = ProfileReport::from_bills(&user, &[], &settings, now());
        assert_eq!(report.average_amount, Money::zero());

        let text = report.format_terminal(&settings);
        assert!(text.contains("Profile: sam@example.com"));
        assert!(text.contains("Active bills:   0"));
        assert!(text.contains("Average bill:   $0.00"));
        assert!(text.contains("sms:"));
    }
}
