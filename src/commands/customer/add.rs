use anyhow::Result;
use log::info;

use crate::cli::commands::customer::FieldArgs;
use crate::config::Config;
use crate::contacts::model::{Category, CustomerRecord, sub_types_for, validate_record};
use crate::store::ContactStore;
use crate::ui::prompts::{select_option, text_input};

/// Add a customer. Required fields not given as flags are prompted for;
/// the record is validated with the web form's rules before it is stored.
pub async fn add_command(fields: FieldArgs) -> Result<()> {
    info!("Adding customer");

    let config = Config::load()?;
    config.require_session()?;

    let category_raw = match fields.category {
        Some(category) => category,
        None => select_option("Category", &Category::ALL.map(|c| c.as_str()))?,
    };
    let sub_type = match fields.sub_type {
        Some(sub_type) => sub_type,
        None => match category_raw.parse::<Category>() {
            // Prompting can offer the valid options; a bad --category flag
            // falls through to validation for the error message.
            Ok(category) => select_option("Type", &sub_types_for(category))?,
            Err(_) => String::new(),
        },
    };
    let name = match fields.name {
        Some(name) => name,
        None => text_input("Name", None)?,
    };

    let record = CustomerRecord {
        name,
        customer_category: category_raw,
        sub_type,
        phone: fields.phone.unwrap_or_default(),
        email: fields.email.unwrap_or_default(),
        district: fields.district.unwrap_or_default(),
        address: fields.address.unwrap_or_default(),
        pincode: fields.pincode.unwrap_or_default(),
        order_source: fields.order_source.unwrap_or_default(),
        last_enquired: fields.last_enquired.unwrap_or_default(),
        order_count: fields.order_count.unwrap_or(0),
        status: fields.status.unwrap_or_default(),
        ..Default::default()
    };
    validate_record(&record)?;

    let mut store = ContactStore::load_default()?;
    let id = store.insert(record)?;

    println!("Added customer: {}", id);
    Ok(())
}
