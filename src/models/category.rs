//! Bill categories
//!
//! Purely informational labels; nothing in the status engine depends on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BillError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillCategory {
    Utilities,
    Entertainment,
    Insurance,
    Healthcare,
    Transportation,
    Subscriptions,
    Banking,
    Education,
    Housing,
    Other,
}

impl BillCategory {
    pub const ALL: [BillCategory; 10] = [
        BillCategory::Utilities,
        BillCategory::Entertainment,
        BillCategory::Insurance,
        BillCategory::Healthcare,
        BillCategory::Transportation,
        BillCategory::Subscriptions,
        BillCategory::Banking,
        BillCategory::Education,
        BillCategory::Housing,
        BillCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Insurance => "Insurance",
            Self::Healthcare => "Healthcare",
            Self::Transportation => "Transportation",
            Self::Subscriptions => "Subscriptions",
            Self::Banking => "Banking",
            Self::Education => "Education",
            Self::Housing => "Housing",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillCategory {
    type Err = BillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|c| c.label()).collect();
                BillError::Validation(format!(
                    "Unknown category '{}' (expected one of: {})",
                    wanted,
                    names.join(", ")
                ))
            })
    }
}
