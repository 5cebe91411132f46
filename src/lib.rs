//! billtrack - Terminal-based personal bill tracker
//!
//! Keeps a list of recurring bills per user and tells you, at any moment,
//! which are overdue, which are due soon and what they cost per month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `engine`: Pure status classification, monthly normalization and summaries
//! - `models`: Bills, users and their value types
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (bills, accounts and sessions)
//! - `reports`: Dashboard, calendar and profile views
//! - `export`: JSON, YAML and CSV export
//! - `audit`: Audit logging system
//! - `crypto`: Password hashing
//! - `config`: Configuration and path management
//! - `display`, `cli`: Terminal output and command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use billtrack::engine::summarize;
//!
//! let now = chrono::Local::now().naive_local();
//! let summary = summarize(&bills, now);
//! println!("{} overdue", summary.by_status.overdue.len());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BillError, BillResult};
