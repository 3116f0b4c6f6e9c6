pub mod add;
pub mod import;
pub mod list;
pub mod remove;
pub mod show;
pub mod update;

pub use add::add_command;
pub use import::import_command;
pub use list::list_command;
pub use remove::remove_command;
pub use show::show_command;
pub use update::update_command;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::cli::commands::customer::FilterArgs;
use crate::store::CustomerQuery;

/// Turn list/export filter flags into a store query. Date flags must be
/// `YYYY-MM-DD`; the category flag must name one of the three categories.
pub fn build_query(filters: &FilterArgs) -> Result<CustomerQuery> {
    let category = filters
        .category
        .as_deref()
        .map(str::parse)
        .transpose()?;
    let date_from = filters
        .date_from
        .as_deref()
        .map(parse_date_flag)
        .transpose()
        .context("Invalid --date-from")?;
    let date_to = filters
        .date_to
        .as_deref()
        .map(parse_date_flag)
        .transpose()
        .context("Invalid --date-to")?;

    Ok(CustomerQuery {
        category,
        sub_types: filters.sub_types.clone(),
        district: filters.district.clone(),
        order_source: filters.order_source.clone(),
        status: filters.status.clone(),
        date_from,
        date_to,
        min_orders: filters.min_orders,
        max_orders: filters.max_orders,
        search: filters.search.clone(),
    })
}

fn parse_date_flag(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Expected YYYY-MM-DD, got '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::model::Category;

    #[test]
    fn test_build_query_maps_all_flags() {
        let filters = FilterArgs {
            category: Some("B2B".to_string()),
            sub_types: vec!["Regular Buyers".to_string()],
            date_from: Some("2024-01-01".to_string()),
            min_orders: Some(2),
            search: Some("asha".to_string()),
            ..Default::default()
        };
        let query = build_query(&filters).unwrap();
        assert_eq!(query.category, Some(Category::B2B));
        assert_eq!(query.sub_types, vec!["Regular Buyers".to_string()]);
        assert_eq!(query.date_from, Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert_eq!(query.min_orders, Some(2));
        assert_eq!(query.search, Some("asha".to_string()));
    }

    #[test]
    fn test_build_query_rejects_bad_category() {
        let filters = FilterArgs {
            category: Some("b2b".to_string()),
            ..Default::default()
        };
        assert!(build_query(&filters).is_err());
    }

    #[test]
    fn test_build_query_rejects_bad_date() {
        let filters = FilterArgs {
            date_from: Some("01/02/2024".to_string()),
            ..Default::default()
        };
        assert!(build_query(&filters).is_err());
    }
}
