use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::contacts::dates::{format_date_time, format_short_date};
use crate::store::ContactStore;

/// Print one customer in full, grouped the way the web detail page was.
pub async fn show_command(id: String) -> Result<()> {
    info!("Showing customer: {}", id);

    let config = Config::load()?;
    config.require_session()?;

    let store = ContactStore::load_default()?;
    let id = store.resolve_id(&id)?;
    let customer = store
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("Customer '{}' not found", id))?;

    println!("Customer {}", customer.id);
    println!("{}", "=".repeat(45));

    println!("\nBasic Information");
    println!("  Name:         {}", customer.name);
    println!("  Category:     {}", customer.customer_category);
    println!("  Type:         {}", customer.sub_type);
    println!("  Phone:        {}", customer.phone);
    println!("  Email:        {}", customer.email);
    println!("  District:     {}", customer.district);
    println!("  Address:      {}", customer.address);
    println!("  Pincode:      {}", customer.pincode);

    println!("\nOrder Information");
    println!("  Order Source: {}", customer.order_source);
    println!("  Order Count:  {}", customer.order_count);
    println!("  Status:       {}", customer.status);
    println!(
        "  Last Enquired: {}",
        format_short_date(&customer.last_enquired).unwrap_or_else(|| "N/A".to_string())
    );

    println!("\nSystem Information");
    println!(
        "  Created At:   {}",
        format_date_time(&customer.created_at).unwrap_or_else(|| "N/A".to_string())
    );
    println!(
        "  Updated At:   {}",
        format_date_time(&customer.updated_at).unwrap_or_else(|| "N/A".to_string())
    );

    Ok(())
}
