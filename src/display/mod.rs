//! Display formatting for terminal output

pub mod bill;

pub use bill::{due_label, format_bill_details, format_bill_list, short_due_label};
