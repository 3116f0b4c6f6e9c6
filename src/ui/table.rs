//! Terminal table rendering for customer listings

use colored::*;

use crate::contacts::model::{Category, CustomerRecord};

/// Fixed-width listing in the web contact list's column order. IDs are
/// shortened to their first eight characters; any unique prefix works for
/// `customer show` and friends.
pub fn print_customer_table(customers: &[CustomerRecord]) {
    println!(
        "{:<8}  {:<24}  {:<6}  {:<18}  {:<14}  {:<14}  {:>6}  {:<8}",
        "ID", "Name", "Cat.", "Type", "Phone", "District", "Orders", "Status"
    );
    println!("{}", "-".repeat(112));

    for customer in customers {
        let id: String = customer.id.chars().take(8).collect();
        println!(
            "{:<8}  {:<24}  {}  {:<18}  {:<14}  {:<14}  {:>6}  {}",
            id,
            clip(&customer.name, 24),
            category_badge(&customer.customer_category),
            clip(&customer.sub_type, 18),
            clip(&customer.phone, 14),
            clip(&customer.district, 14),
            customer.order_count,
            status_badge(&customer.status),
        );
    }

    println!("\nTotal customers: {}", customers.len());
}

// Fields are padded before coloring so the ANSI codes don't break the
// column alignment.

fn category_badge(raw: &str) -> ColoredString {
    let padded = format!("{:<6}", clip(raw, 6));
    match Category::parse_exact(raw) {
        Some(Category::B2C) => padded.blue(),
        Some(Category::B2B) => padded.magenta(),
        Some(Category::Bulk) => padded.yellow(),
        None => padded.normal(),
    }
}

fn status_badge(status: &str) -> ColoredString {
    let padded = format!("{:<8}", clip(status, 8));
    match status {
        "Active" | "Hot" => padded.green(),
        "Inactive" | "Cold" => padded.red(),
        _ => padded.normal(),
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}
