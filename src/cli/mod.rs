//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod auth;
pub mod bill;
pub mod config;
pub mod export;
pub mod report;

pub use audit::handle_audit_command;
pub use auth::{handle_auth_command, AuthCommands};
pub use bill::{handle_bill_command, BillCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::handle_export_command;
pub use report::{handle_calendar_command, handle_dashboard_command, handle_profile_command};
