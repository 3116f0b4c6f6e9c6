use std::path::Path;
use std::process::Command;

use anyhow::Result;
use log::{info, warn};

use crate::cli::commands::export::ExportArgs;
use crate::config::Config;
use crate::export::CustomerExporter;
use crate::store::ContactStore;

use super::customer::build_query;

/// Export the (filtered) customer list to an Excel workbook.
///
/// An empty selection still exports: the workbook shape is fixed, so the
/// result is a summary of zeroes and three placeholder sheets.
pub async fn export_command(args: ExportArgs) -> Result<()> {
    info!("Exporting customers");

    let config = Config::load()?;
    config.require_session()?;

    let query = build_query(&args.filters)?;
    let store = ContactStore::load_default()?;
    let customers = store.select(&query);
    info!("Exporting {} customers", customers.len());

    let path = CustomerExporter::export_to_file(&customers, Path::new(&args.output))?;
    println!("Exported {} customers to {}", customers.len(), path.display());

    if args.open {
        try_open_file(&path.to_string_lossy());
    }

    Ok(())
}

/// Try to open the Excel file with an appropriate application
fn try_open_file(file_path: &str) {
    let result = if cfg!(target_os = "windows") {
        // Windows: use cmd /c start to open with default Excel application
        Command::new("cmd")
            .args(["/c", "start", "", file_path])
            .spawn()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(file_path).spawn()
    } else {
        // Linux: try LibreOffice Calc first, then fall back to xdg-open
        Command::new("libreoffice")
            .args(["--calc", file_path])
            .spawn()
            .or_else(|_| Command::new("xdg-open").arg(file_path).spawn())
    };

    if let Err(e) = result {
        warn!("Could not open exported file: {}", e);
        println!("Could not open file automatically: {}", e);
    }
}
