use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use billtrack::cli::{
    handle_audit_command, handle_auth_command, handle_bill_command, handle_calendar_command,
    handle_config_command, handle_dashboard_command, handle_export_command, handle_profile_command,
    AuthCommands, BillCommands, ConfigCommands,
};
use billtrack::config::{paths::BillPaths, settings::Settings};
use billtrack::export::ExportFormat;
use billtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "billtrack",
    version,
    about = "Terminal-based personal bill tracker",
    long_about = "billtrack keeps track of your recurring bills and shows which are \
                  overdue, which are due soon, and what they add up to per month."
)]
struct Cli {
    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up, sign in and out
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Bill management commands
    #[command(subcommand)]
    Bill(BillCommands),

    /// Bills grouped by urgency with the monthly total
    #[command(alias = "dash")]
    Dashboard,

    /// Bills due in a month, day by day
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Account details and bill statistics
    Profile,

    /// Export bills with their current status
    Export {
        /// Output file, or "-" for stdout (default: bills-data.<format>)
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Show configuration and paths, or change a setting
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Show recent audit log entries
    Audit {
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BillPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    debug!(base_dir = %paths.base_dir().display(), "storage loaded");

    let now = chrono::Local::now().naive_local();

    match cli.command {
        Some(Commands::Auth(cmd)) => handle_auth_command(&storage, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill_command(&storage, &settings, cmd, now)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings, now)?,
        Some(Commands::Calendar { month }) => {
            handle_calendar_command(&storage, &settings, month.as_deref(), now)?
        }
        Some(Commands::Profile) => handle_profile_command(&storage, &settings, now)?,
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, output, format, now)?
        }
        Some(Commands::Config { action }) => handle_config_command(&paths, &mut settings, action)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        None => {
            println!("billtrack - Terminal-based bill tracker");
            println!();
            println!("Run 'billtrack --help' for usage information.");
            println!("Run 'billtrack auth signup --email you@example.com' to get started.");
        }
    }

    Ok(())
}
