//! Bill CLI commands
//!
//! Implements CLI commands for bill management.

use chrono::{NaiveDate, NaiveDateTime};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_bill_details, format_bill_list};
use crate::engine::annotate;
use crate::error::{BillError, BillResult};
use crate::models::{BillCategory, BillDraft, BillPatch, BillStatus, Frequency, Money};
use crate::services::{AuthService, BillService};
use crate::storage::Storage;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a new bill
    Add {
        /// Bill name
        name: String,
        /// Amount per billing period (e.g., "85.50")
        amount: String,
        /// Next due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Category (utilities, entertainment, healthcare, ...)
        #[arg(short, long)]
        category: String,
        /// Billing frequency (weekly, monthly, quarterly, yearly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List bills
    List {
        /// Only bills with this status (overdue, due-soon, upcoming)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show bill details
    Show {
        /// Bill name or ID
        bill: String,
    },
    /// Edit a bill
    Edit {
        /// Bill name or ID
        bill: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(short, long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        /// Remove the bill's notes
        #[arg(long)]
        clear_notes: bool,
    },
    /// Delete a bill
    Delete {
        /// Bill name or ID
        bill: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a bill command
pub fn handle_bill_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BillCommands,
    now: NaiveDateTime,
) -> BillResult<()> {
    let user = AuthService::new(storage).require_user()?;
    let service = BillService::new(storage);

    match cmd {
        BillCommands::Add {
            name,
            amount,
            due,
            category,
            frequency,
            notes,
        } => {
            let mut draft = BillDraft::new(
                name,
                parse_amount(&amount)?,
                parse_date(&due)?,
                category.parse::<BillCategory>()?,
            )
            .with_frequency(frequency.parse::<Frequency>()?);
            if let Some(notes) = notes {
                draft = draft.with_notes(notes);
            }

            let bill = service.create(&user, draft)?;
            let annotated = annotate(&bill, now);

            println!("Added bill: {}", bill.name);
            println!("  Amount: {} ({})", settings.format_money(bill.amount), bill.frequency.label());
            println!("  Due:    {}", settings.format_date(bill.due_date));
            println!("  Status: {}", annotated.status.label());
            println!("  ID:     {}", bill.id);
        }

        BillCommands::List { status } => {
            let status = status.map(|s| s.parse::<BillStatus>()).transpose()?;
            let bills = service.list(&user)?;
            let annotated: Vec<_> = bills
                .iter()
                .map(|b| annotate(b, now))
                .filter(|a| status.map_or(true, |s| a.status == s))
                .collect();

            println!("{}", format_bill_list(&annotated, settings));
        }

        BillCommands::Show { bill } => {
            let found = service.find(&user, &bill)?;
            print!("{}", format_bill_details(&annotate(&found, now), settings));
        }

        BillCommands::Edit {
            bill,
            name,
            amount,
            due,
            category,
            frequency,
            notes,
            clear_notes,
        } => {
            let patch = BillPatch {
                name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                due_date: due.as_deref().map(parse_date).transpose()?,
                category: category.map(|c| c.parse::<BillCategory>()).transpose()?,
                frequency: frequency.map(|f| f.parse::<Frequency>()).transpose()?,
                notes: if clear_notes { Some(None) } else { notes.map(Some) },
            };

            if patch.is_empty() {
                println!("No changes specified. Use --name, --amount, --due, --category, --frequency or --notes.");
                return Ok(());
            }

            let updated = service.update(&user, &bill, patch)?;
            println!("Updated bill: {}", updated.name);
        }

        BillCommands::Delete { bill, force } => {
            let found = service.find(&user, &bill)?;

            if !force {
                println!(
                    "About to delete '{}' ({}, due {}).",
                    found.name,
                    settings.format_money(found.amount),
                    settings.format_date(found.due_date)
                );
                println!("To proceed, run again with --force:");
                println!("  billtrack bill delete {} --force", found.id);
                return Ok(());
            }

            let removed = service.delete(&user, &found.id.to_string())?;
            println!("Deleted bill: {}", removed.name);
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> BillResult<Money> {
    Money::parse(s).map_err(|e| {
        BillError::Validation(format!(
            "Invalid amount '{}'. Use a format like '85.50' or '85'. Error: {}",
            s, e
        ))
    })
}

fn parse_date(s: &str) -> BillResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        BillError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s.trim()))
    })
}
