//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::error::{BillError, BillResult};
use crate::export::{export_bills, ExportFormat};
use crate::services::AuthService;
use crate::storage::Storage;

/// Export the signed-in user's bills to `output`, or stdout when it is `-`
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    format: ExportFormat,
    now: NaiveDateTime,
) -> BillResult<()> {
    let user = AuthService::new(storage).require_user()?;

    let path = output.unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        export_bills(storage, &user, format, now, &mut handle)?;
        return Ok(());
    }

    let file = File::create(&path)
        .map_err(|e| BillError::Export(format!("Cannot create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    let count = export_bills(storage, &user, format, now, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BillError::Export(format!("Cannot write {}: {}", path.display(), e)))?;

    println!("Exported {} bill(s) to {}", count, path.display());
    Ok(())
}
