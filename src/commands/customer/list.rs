use anyhow::Result;
use log::info;

use crate::cli::commands::customer::FilterArgs;
use crate::config::Config;
use crate::store::ContactStore;
use crate::ui::table::print_customer_table;

use super::build_query;

/// List customers matching the given filters, newest first.
pub async fn list_command(filters: FilterArgs) -> Result<()> {
    info!("Listing customers");

    let config = Config::load()?;
    config.require_session()?;

    let query = build_query(&filters)?;
    let store = ContactStore::load_default()?;
    let customers = store.select(&query);

    if customers.is_empty() {
        println!("No customers found matching your filters.");
        return Ok(());
    }

    print_customer_table(&customers);
    Ok(())
}
