//! User settings for billtrack
//!
//! Display preferences and reminder channel preferences. Reminders are only
//! recorded as preferences; nothing is delivered.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::BillPaths;
use crate::error::BillError;

/// A reminder channel the user can opt in or out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
    WeeklySummary,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 4] = [
        NotificationChannel::Email,
        NotificationChannel::Sms,
        NotificationChannel::Push,
        NotificationChannel::WeeklySummary,
    ];
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
            Self::Push => write!(f, "push"),
            Self::WeeklySummary => write!(f, "weekly-summary"),
        }
    }
}

impl FromStr for NotificationChannel {
    type Err = BillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "push" => Ok(Self::Push),
            "weekly" | "weekly-summary" | "weekly_summary" => Ok(Self::WeeklySummary),
            other => Err(BillError::Validation(format!(
                "Unknown notification channel '{}' (expected email, sms, push or weekly-summary)",
                other
            ))),
        }
    }
}

/// Reminder preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    #[serde(default = "default_true")]
    pub email: bool,
    #[serde(default)]
    pub sms: bool,
    #[serde(default = "default_true")]
    pub push: bool,
    #[serde(default = "default_true")]
    pub weekly_summary: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
            weekly_summary: true,
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::Push => self.push,
            NotificationChannel::WeeklySummary => self.weekly_summary,
        }
    }

    pub fn set(&mut self, channel: NotificationChannel, enabled: bool) {
        match channel {
            NotificationChannel::Email => self.email = enabled,
            NotificationChannel::Sms => self.sms = enabled,
            NotificationChannel::Push => self.push = enabled,
            NotificationChannel::WeeklySummary => self.weekly_summary = enabled,
        }
    }
}

/// User settings for billtrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Reminder channel preferences
    #[serde(default)]
    pub notifications: NotificationPreferences,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            notifications: NotificationPreferences::default(),
        }
    }
}

impl Settings {
    /// Format a date with the configured pattern, falling back to the
    /// default when the pattern is not valid strftime
    pub fn format_date(&self, date: NaiveDate) -> String {
        let pattern = if StrftimeItems::new(&self.date_format).any(|i| matches!(i, Item::Error)) {
            DEFAULT_DATE_FORMAT
        } else {
            self.date_format.as_str()
        };
        date.format(pattern).to_string()
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BillPaths) -> Result<Self, BillError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BillError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BillError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BillPaths) -> Result<(), BillError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BillError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BillError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.notifications.email);
        assert!(!settings.notifications.sms);
        assert!(settings.notifications.push);
        assert!(settings.notifications.weekly_summary);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.notifications.set(NotificationChannel::Sms, true);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.notifications.sms);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.date_format, "%b %d, %Y");
        assert_eq!(settings.notifications, NotificationPreferences::default());
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(
            "Weekly".parse::<NotificationChannel>().unwrap(),
            NotificationChannel::WeeklySummary
        );
        assert_eq!("sms".parse::<NotificationChannel>().unwrap(), NotificationChannel::Sms);
        assert!("pager".parse::<NotificationChannel>().is_err());
    }

    #[test]
    fn test_format_date_falls_back_on_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let mut settings = Settings::default();
        assert_eq!(settings.format_date(date), "Mar 07, 2025");

        settings.date_format = "%Y-%m-%d".into();
        assert_eq!(settings.format_date(date), "2025-03-07");

        settings.date_format = "%Q".into();
        assert_eq!(settings.format_date(date), "Mar 07, 2025");
    }

    #[test]
    fn test_format_money_uses_symbol() {
        let mut settings = Settings::default();
        settings.currency_symbol = "£".into();
        assert_eq!(settings.format_money(crate::models::Money::from_cents(12345)), "£123.45");
    }
}
