use anyhow::Result;
use log::info;

use crate::cli::commands::customer::FieldArgs;
use crate::config::Config;
use crate::store::ContactStore;

/// Update a customer. Only the given flags change; the merged record is
/// re-validated before it replaces the stored one.
pub async fn update_command(id: String, fields: FieldArgs) -> Result<()> {
    info!("Updating customer: {}", id);

    let config = Config::load()?;
    config.require_session()?;

    let mut store = ContactStore::load_default()?;
    let id = store.resolve_id(&id)?;
    let mut record = store
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("Customer '{}' not found", id))?
        .clone();

    if let Some(name) = fields.name {
        record.name = name;
    }
    if let Some(category) = fields.category {
        record.customer_category = category;
    }
    if let Some(sub_type) = fields.sub_type {
        record.sub_type = sub_type;
    }
    if let Some(phone) = fields.phone {
        record.phone = phone;
    }
    if let Some(email) = fields.email {
        record.email = email;
    }
    if let Some(district) = fields.district {
        record.district = district;
    }
    if let Some(address) = fields.address {
        record.address = address;
    }
    if let Some(pincode) = fields.pincode {
        record.pincode = pincode;
    }
    if let Some(order_source) = fields.order_source {
        record.order_source = order_source;
    }
    if let Some(last_enquired) = fields.last_enquired {
        record.last_enquired = last_enquired;
    }
    if let Some(order_count) = fields.order_count {
        record.order_count = order_count;
    }
    if let Some(status) = fields.status {
        record.status = status;
    }

    crate::contacts::model::validate_record(&record)?;
    store.update(&id, record)?;

    println!("Updated customer: {}", id);
    Ok(())
}
