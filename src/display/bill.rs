//! Bill display formatting
//!
//! Tables and detail views for bills as they stand at a given moment.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::engine::AnnotatedBill;

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "When")]
    when: String,
}

/// Days-until-due as a sentence fragment: "2 days overdue", "Due today",
/// "Due tomorrow", "Due in 5 days"
pub fn due_label(days: i64) -> String {
    match days {
        d if d < -1 => format!("{} days overdue", -d),
        -1 => "1 day overdue".to_string(),
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        d => format!("Due in {} days", d),
    }
}

/// Compact form for narrow columns: "2d overdue", "Today", "Tomorrow", "5d"
pub fn short_due_label(days: i64) -> String {
    match days {
        d if d < 0 => format!("{}d overdue", -d),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("{}d", d),
    }
}

/// Format annotated bills as a table
pub fn format_bill_list(bills: &[AnnotatedBill<'_>], settings: &Settings) -> String {
    if bills.is_empty() {
        return "No bills found.".to_string();
    }

    let rows = bills.iter().map(|a| BillRow {
        id: a.bill.id.to_string(),
        name: a.bill.name.clone(),
        amount: settings.format_money(a.bill.amount),
        frequency: a.bill.frequency.label().to_string(),
        category: a.bill.category.label().to_string(),
        due: settings.format_date(a.bill.due_date),
        status: a.status.label().to_string(),
        when: due_label(a.days_until_due),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single bill's details
pub fn format_bill_details(annotated: &AnnotatedBill<'_>, settings: &Settings) -> String {
    let bill = annotated.bill;
    let mut output = String::new();

    output.push_str(&format!("Bill: {}\n", bill.name));
    output.push_str(&format!("  ID:             {}\n", bill.id));
    output.push_str(&format!("  Amount:         {}\n", settings.format_money(bill.amount)));
    output.push_str(&format!("  Frequency:      {}\n", bill.frequency.label()));
    output.push_str(&format!(
        "  Monthly:        {}\n",
        settings.format_money(annotated.monthly_equivalent.to_money())
    ));
    output.push_str(&format!("  Category:       {}\n", bill.category.label()));
    output.push_str(&format!(
        "  Due:            {} ({})\n",
        settings.format_date(bill.due_date),
        due_label(annotated.days_until_due)
    ));
    output.push_str(&format!("  Status:         {}\n", annotated.status.label()));

    if let Some(notes) = &bill.notes {
        output.push_str(&format!("  Notes:          {}\n", notes));
    }

    output.push_str(&format!(
        "  Created:        {}\n",
        bill.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
