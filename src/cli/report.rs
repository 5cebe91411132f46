//! Report CLI commands: dashboard, calendar and profile

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::error::BillResult;
use crate::reports::{parse_month, CalendarReport, DashboardReport, ProfileReport};
use crate::services::AuthService;
use crate::storage::Storage;

pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    now: NaiveDateTime,
) -> BillResult<()> {
    let user = AuthService::new(storage).require_user()?;
    let report = DashboardReport::generate(storage, &user, now)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// `month` is `YYYY-MM`; the current month when omitted
pub fn handle_calendar_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
    now: NaiveDateTime,
) -> BillResult<()> {
    let user = AuthService::new(storage).require_user()?;
    let month = match month {
        Some(m) => parse_month(m)?,
        None => now.date(),
    };
    let report = CalendarReport::generate(storage, &user, month, now)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}

pub fn handle_profile_command(
    storage: &Storage,
    settings: &Settings,
    now: NaiveDateTime,
) -> BillResult<()> {
    let user = AuthService::new(storage).require_user()?;
    let report = ProfileReport::generate(storage, &user, settings, now)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}
