//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{paths::BillPaths, NotificationChannel, Settings};
use crate::error::{BillError, BillResult};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set the currency symbol used when printing amounts
    SetCurrency {
        symbol: String,
    },
    /// Turn a reminder channel on or off (email, sms, push, weekly-summary)
    Notify {
        channel: String,
        /// "on" or "off"
        state: String,
    },
}

/// Show configuration, or apply a change when a subcommand is given
pub fn handle_config_command(
    paths: &BillPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> BillResult<()> {
    match cmd {
        None => {
            println!("billtrack configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Bills file:      {}", paths.bills_file().display());
            println!("Users file:      {}", paths.users_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
            println!("Notifications:");
            for channel in NotificationChannel::ALL {
                println!(
                    "  {:<16}{}",
                    format!("{}:", channel),
                    if settings.notifications.get(channel) { "on" } else { "off" }
                );
            }
        }

        Some(ConfigCommands::SetCurrency { symbol }) => {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(BillError::Validation("Currency symbol cannot be empty".into()));
            }
            settings.currency_symbol = symbol.to_string();
            settings.save(paths)?;
            println!("Currency symbol set to {}", settings.currency_symbol);
        }

        Some(ConfigCommands::Notify { channel, state }) => {
            let channel: NotificationChannel = channel.parse()?;
            let enabled = parse_switch(&state)?;
            settings.notifications.set(channel, enabled);
            settings.save(paths)?;
            println!(
                "{} notifications {}",
                channel,
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }

    Ok(())
}

fn parse_switch(s: &str) -> BillResult<bool> {
    match s.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(BillError::Validation(format!(
            "Expected 'on' or 'off', got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch("ON").unwrap());
        assert!(!parse_switch("off").unwrap());
        assert!(parse_switch("maybe").is_err());
    }

    #[test]
    fn test_notify_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(
            &paths,
            &mut settings,
            Some(ConfigCommands::Notify {
                channel: "sms".into(),
                state: "on".into(),
            }),
        )
        .unwrap();

        assert!(Settings::load_or_create(&paths).unwrap().notifications.sms);
    }

    #[test]
    fn test_empty_currency_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let err = handle_config_command(
            &paths,
            &mut settings,
            Some(ConfigCommands::SetCurrency { symbol: "  ".into() }),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
