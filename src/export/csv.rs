//! CSV Export functionality
//!
//! One row per bill with amounts in currency units, suitable for spreadsheets.

use std::io::Write;

use crate::engine::AnnotatedBill;
use crate::error::{BillError, BillResult};

const HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "Amount",
    "Frequency",
    "Category",
    "Due Date",
    "Status",
    "Days Until Due",
    "Monthly Equivalent",
    "Notes",
];

pub fn export_bills_csv<W: Write>(bills: &[AnnotatedBill<'_>], writer: &mut W) -> BillResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| BillError::Export(e.to_string());

    csv_writer.write_record(HEADERS).map_err(export_err)?;

    for annotated in bills {
        let bill = annotated.bill;
        csv_writer
            .write_record([
                bill.id.as_uuid().to_string(),
                bill.name.clone(),
                format!("{:.2}", bill.amount.as_units()),
                bill.frequency.as_str().to_string(),
                bill.category.label().to_string(),
                bill.due_date.to_string(),
                annotated.status.as_str().to_string(),
                annotated.days_until_due.to_string(),
                format!("{:.2}", annotated.monthly_equivalent.units()),
                bill.notes.clone().unwrap_or_default(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BillError::Export(e.to_string()))?;
    Ok(())
}
