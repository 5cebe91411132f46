//! Service layer for billtrack
//!
//! Business logic on top of the storage layer: validation, ownership and
//! the audit trail.

pub mod auth;
pub mod bill;

pub use auth::{AuthService, SignUp};
pub use bill::{summarize_bills, BillService};
