//! Core data models for billtrack
//!
//! Bills, users, and the value types they are built from.

pub mod bill;
pub mod category;
pub mod frequency;
pub mod ids;
pub mod money;
pub mod status;
pub mod user;

pub use bill::{Bill, BillDraft, BillPatch, BillValidationError};
pub use category::BillCategory;
pub use frequency::Frequency;
pub use ids::{BillId, UserId};
pub use money::{Money, MoneyParseError};
pub use status::BillStatus;
pub use user::{User, UserValidationError};
