//! In-memory filtering for the customers table.
//!
//! The web front end pushed these predicates into its remote query
//! builder; the local store evaluates the same set against every record.
//! All options are optional and AND-combined.

use chrono::NaiveDate;

use crate::contacts::dates::parse_date_value;
use crate::contacts::model::{Category, CustomerRecord};

#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    pub category: Option<Category>,
    /// OR within the list: a record passes with any of these sub-types.
    pub sub_types: Vec<String>,
    pub district: Option<String>,
    pub order_source: Option<String>,
    pub status: Option<String>,
    /// Inclusive bounds on `last_enquired`. Records without a parseable
    /// date never match a bounded query.
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_orders: Option<u32>,
    pub max_orders: Option<u32>,
    /// Case-insensitive substring over name, email, phone, district and
    /// order source.
    pub search: Option<String>,
}

impl CustomerQuery {
    pub fn matches(&self, record: &CustomerRecord) -> bool {
        if let Some(category) = self.category {
            if record.category() != Some(category) {
                return false;
            }
        }
        if !self.sub_types.is_empty() && !self.sub_types.iter().any(|t| *t == record.sub_type) {
            return false;
        }
        if let Some(district) = &self.district {
            if record.district != *district {
                return false;
            }
        }
        if let Some(order_source) = &self.order_source {
            if record.order_source != *order_source {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if record.status != *status {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            match parse_date_value(&record.last_enquired) {
                Some(dt) if dt.date() >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.date_to {
            match parse_date_value(&record.last_enquired) {
                Some(dt) if dt.date() <= to => {}
                _ => return false,
            }
        }
        if let Some(min) = self.min_orders {
            if record.order_count < min {
                return false;
            }
        }
        if let Some(max) = self.max_orders {
            if record.order_count > max {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let fields = [
                    &record.name,
                    &record.email,
                    &record.phone,
                    &record.district,
                    &record.order_source,
                ];
                if !fields.iter().any(|f| f.to_lowercase().contains(&needle)) {
                    return false;
                }
            }
        }
        true
    }
}

/// Newest first, the web list's default order. Records without a
/// parseable `created_at` sort last; ties keep their stored order.
pub fn sort_newest_first(records: &mut [CustomerRecord]) {
    records.sort_by(|a, b| {
        let a_created = parse_date_value(&a.created_at);
        let b_created = parse_date_value(&b.created_at);
        b_created.cmp(&a_created)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> CustomerRecord {
        CustomerRecord {
            name: name.to_string(),
            customer_category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = CustomerQuery::default();
        assert!(query.matches(&record("Asha", "B2C")));
        assert!(query.matches(&record("", "not-a-category")));
    }

    #[test]
    fn test_category_filter_uses_exact_category() {
        let query = CustomerQuery {
            category: Some(Category::B2C),
            ..Default::default()
        };
        assert!(query.matches(&record("a", "B2C")));
        assert!(!query.matches(&record("b", "B2B")));
        assert!(!query.matches(&record("c", "b2c")));
    }

    #[test]
    fn test_sub_types_are_or_combined() {
        let query = CustomerQuery {
            sub_types: vec!["Inquiry".to_string(), "Confirmed".to_string()],
            ..Default::default()
        };
        let mut r = record("a", "B2C");
        r.sub_type = "Confirmed".to_string();
        assert!(query.matches(&r));
        r.sub_type = "Dead Lead".to_string();
        assert!(!query.matches(&r));
    }

    #[test]
    fn test_order_count_bounds_are_inclusive() {
        let query = CustomerQuery {
            min_orders: Some(2),
            max_orders: Some(5),
            ..Default::default()
        };
        let mut r = record("a", "B2C");
        for (count, expected) in [(1, false), (2, true), (5, true), (6, false)] {
            r.order_count = count;
            assert_eq!(query.matches(&r), expected, "order_count {count}");
        }
    }

    #[test]
    fn test_date_bounds_exclude_missing_dates() {
        let query = CustomerQuery {
            date_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            ..Default::default()
        };
        let mut r = record("a", "B2C");
        assert!(!query.matches(&r));

        r.last_enquired = "2024-06-01".to_string();
        assert!(query.matches(&r));

        r.last_enquired = "2023-12-31".to_string();
        assert!(!query.matches(&r));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut r = record("Asha Traders", "B2C");
        r.email = "contact@asha.example".to_string();
        r.district = "Pune".to_string();

        for needle in ["asha", "ASHA", "pune", "contact@"] {
            let query = CustomerQuery {
                search: Some(needle.to_string()),
                ..Default::default()
            };
            assert!(query.matches(&r), "search '{needle}'");
        }

        let query = CustomerQuery {
            search: Some("mumbai".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&r));
    }

    #[test]
    fn test_sort_newest_first_puts_undated_last() {
        let mut records = vec![
            CustomerRecord {
                name: "old".to_string(),
                created_at: "2023-01-01T00:00:00Z".to_string(),
                ..Default::default()
            },
            CustomerRecord {
                name: "undated".to_string(),
                ..Default::default()
            },
            CustomerRecord {
                name: "new".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                ..Default::default()
            },
        ];
        sort_newest_first(&mut records);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["new", "old", "undated"]);
    }
}
