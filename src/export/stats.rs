//! Partitioning and aggregate math behind the export workbook.

use crate::contacts::model::{Category, CustomerRecord};

/// The three fixed buckets in sheet order, holding references into the
/// export's input snapshot. Records with an unrecognized category land in
/// no bucket but still count toward the grand total.
#[derive(Debug, Default)]
pub struct CategoryBuckets<'a> {
    b2c: Vec<&'a CustomerRecord>,
    b2b: Vec<&'a CustomerRecord>,
    bulk: Vec<&'a CustomerRecord>,
}

impl<'a> CategoryBuckets<'a> {
    /// Single pass over the input, preserving its order inside each bucket.
    pub fn partition(records: &'a [CustomerRecord]) -> Self {
        let mut buckets = Self::default();
        for record in records {
            match record.category() {
                Some(Category::B2C) => buckets.b2c.push(record),
                Some(Category::B2B) => buckets.b2b.push(record),
                Some(Category::Bulk) => buckets.bulk.push(record),
                None => {}
            }
        }
        buckets
    }

    pub fn bucket(&self, category: Category) -> &[&'a CustomerRecord] {
        match category {
            Category::B2C => &self.b2c,
            Category::B2B => &self.b2b,
            Category::Bulk => &self.bulk,
        }
    }
}

/// Aggregates for one bucket, or for the whole input when computing the
/// grand total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotals {
    pub total_customers: usize,
    pub total_orders: u64,
    /// Mean orders per customer, rounded to two decimals. Zero for an
    /// empty bucket, never NaN.
    pub average_orders: f64,
}

impl CategoryTotals {
    pub fn for_bucket(bucket: &[&CustomerRecord]) -> Self {
        let total_orders = bucket.iter().map(|r| u64::from(r.order_count)).sum();
        Self::from_counts(bucket.len(), total_orders)
    }

    /// Totals over the full input list, unrecognized categories included.
    pub fn grand_total(records: &[CustomerRecord]) -> Self {
        let total_orders = records.iter().map(|r| u64::from(r.order_count)).sum();
        Self::from_counts(records.len(), total_orders)
    }

    fn from_counts(total_customers: usize, total_orders: u64) -> Self {
        let average_orders = if total_customers == 0 {
            0.0
        } else {
            let average = total_orders as f64 / total_customers as f64;
            (average * 100.0).round() / 100.0
        };
        Self {
            total_customers,
            total_orders,
            average_orders,
        }
    }
}
