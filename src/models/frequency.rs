//! Billing frequency
//!
//! Stored as a lowercase string. Anything that isn't one of the four known
//! cadences is kept verbatim in [`Frequency::Unrecognized`] so a record
//! written by another client still loads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BillError;

/// How often a bill recurs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    /// A stored value outside the known set; treated as monthly
    Unrecognized(String),
}

impl Frequency {
    /// Conversion used when reading stored records
    ///
    /// Only the exact lowercase tokens are recognized. Any other spelling,
    /// including `"Monthly"` or `"annual"`, is kept as `Unrecognized` and
    /// counts at face value.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "yearly" => Self::Yearly,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsing for user input: case-insensitive, unknown values are a
/// validation error
impl FromStr for Frequency {
    type Err = BillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_stored(&s.trim().to_lowercase()) {
            Self::Unrecognized(_) => Err(BillError::Validation(format!(
                "Unknown frequency '{}' (expected weekly, monthly, quarterly or yearly)",
                s.trim()
            ))),
            known => Ok(known),
        }
    }
}

impl From<String> for Frequency {
    fn from(raw: String) -> Self {
        Self::from_stored(&raw)
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.as_str().to_string()
    }
}
