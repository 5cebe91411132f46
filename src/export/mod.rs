//! Export module for billtrack
//!
//! Writes the signed-in user's bills, with status and monthly equivalent as
//! of the export time, in one of three formats:
//! - JSON (default): array of bills
//! - YAML: the same data with a comment header
//! - CSV: one row per bill for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_bills_csv;
pub use json::export_bills_json;
pub use yaml::export_bills_yaml;

use std::io::Write;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::engine::annotate;
use crate::error::BillResult;
use crate::models::User;
use crate::services::BillService;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Default file name when writing to disk
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Json => "bills-data.json",
            Self::Yaml => "bills-data.yaml",
            Self::Csv => "bills-data.csv",
        }
    }
}

/// Export all of `user`'s bills in `format`; returns how many were written
pub fn export_bills<W: Write>(
    storage: &Storage,
    user: &User,
    format: ExportFormat,
    now: NaiveDateTime,
    writer: &mut W,
) -> BillResult<usize> {
    let bills = BillService::new(storage).list(user)?;
    let annotated: Vec<_> = bills.iter().map(|b| annotate(b, now)).collect();

    match format {
        ExportFormat::Json => export_bills_json(&annotated, writer)?,
        ExportFormat::Yaml => export_bills_yaml(&annotated, writer)?,
        ExportFormat::Csv => export_bills_csv(&annotated, writer)?,
    }

    debug!(count = annotated.len(), ?format, "exported bills");
    Ok(annotated.len())
}
