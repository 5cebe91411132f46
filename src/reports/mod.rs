//! Reports module for billtrack
//!
//! Dashboard, calendar and profile views, each built from the status engine
//! over the signed-in user's bills.

pub mod calendar;
pub mod dashboard;
pub mod profile;

pub use calendar::{parse_month, CalendarDay, CalendarEntry, CalendarReport, UpcomingEntry};
pub use dashboard::{DashboardEntry, DashboardReport};
pub use profile::ProfileReport;
