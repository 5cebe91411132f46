//! JSON Export functionality
//!
//! Writes the user's bills, each with its derived status, as a pretty-printed
//! JSON array.

use std::io::Write;

use crate::engine::AnnotatedBill;
use crate::error::{BillError, BillResult};

pub fn export_bills_json<W: Write>(bills: &[AnnotatedBill<'_>], writer: &mut W) -> BillResult<()> {
    serde_json::to_writer_pretty(&mut *writer, bills)
        .map_err(|e| BillError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BillError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::annotate;
    use crate::models::{Bill, BillCategory, BillDraft, Money, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_export_json_array() {
        let bill = Bill::from_draft(
            UserId::new(),
            BillDraft::new(
                "Mortgage",
                Money::from_cents(210000),
                NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                BillCategory::Housing,
            ),
        );
        let now = NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let mut output = Vec::new();
        export_bills_json(&[annotate(&bill, now)], &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Mortgage");
        assert_eq!(rows[0]["status"], "upcoming");
        assert_eq!(rows[0]["days_until_due"], 31);
    }

    #[test]
    fn test_export_empty() {
        let mut output = Vec::new();
        export_bills_json(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "[]");
    }
}
