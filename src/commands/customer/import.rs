use std::fs;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::contacts::model::CustomerRecord;
use crate::store::ContactStore;

/// Append records from a JSON array file to the store.
///
/// Import is deliberately lenient: unknown categories or statuses are
/// stored as they came (they just never reach a category sheet or get a
/// highlight), and missing ids are assigned.
pub async fn import_command(file: String) -> Result<()> {
    info!("Importing customers from: {}", file);

    let config = Config::load()?;
    config.require_session()?;

    let content =
        fs::read_to_string(&file).with_context(|| format!("Failed to read import file: {}", file))?;
    let records: Vec<CustomerRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {}", file))?;

    if records.is_empty() {
        println!("Import file contains no customers.");
        return Ok(());
    }

    let mut store = ContactStore::load_default()?;
    let count = store.import(records)?;

    println!("Imported {} customers.", count);
    Ok(())
}
