//! Configuration module for billtrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BillPaths;
pub use settings::{NotificationChannel, NotificationPreferences, Settings};
