//! Derived bill status
//!
//! A status is never stored; see [`crate::engine::classify_status`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BillError;

/// Urgency of a bill relative to a reference time
///
/// Variants are ordered by increasing urgency, so `Upcoming < DueSoon < Overdue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillStatus {
    Upcoming,
    DueSoon,
    Overdue,
}

impl BillStatus {
    /// Dashboard order: most urgent first
    pub const BY_URGENCY: [BillStatus; 3] =
        [BillStatus::Overdue, BillStatus::DueSoon, BillStatus::Upcoming];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::DueSoon => "due-soon",
            Self::Overdue => "overdue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::DueSoon => "Due Soon",
            Self::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillStatus {
    type Err = BillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "due-soon" | "duesoon" | "soon" => Ok(Self::DueSoon),
            "overdue" => Ok(Self::Overdue),
            other => Err(BillError::Validation(format!(
                "Unknown status '{}' (expected overdue, due-soon or upcoming)",
                other
            ))),
        }
    }
}
