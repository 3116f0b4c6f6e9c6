use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::store::ContactStore;
use crate::ui::prompts::confirm;

/// Remove a customer, with a confirmation prompt unless forced.
pub async fn remove_command(id: String, force: bool) -> Result<()> {
    info!("Removing customer: {}", id);

    let config = Config::load()?;
    config.require_session()?;

    let mut store = ContactStore::load_default()?;
    let id = store.resolve_id(&id)?;
    let name = store
        .get(&id)
        .map(|record| record.name.clone())
        .unwrap_or_default();

    if !force {
        let message = format!("Remove customer '{}' ({})?", name, id);
        if !confirm(&message, false)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let removed = store.remove(&id)?;
    println!("Removed customer: {} ({})", removed.name, removed.id);
    Ok(())
}
