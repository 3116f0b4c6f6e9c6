//! Summary sheet: aggregate table plus the visual statistics block

use anyhow::Result;
use chrono::{DateTime, Local};
use rust_xlsxwriter::*;

use super::super::formatting::*;
use super::super::stats::{CategoryBuckets, CategoryTotals};
use crate::contacts::model::{Category, CustomerRecord};

const SUMMARY_HEADERS: [&str; 4] = [
    "Category",
    "Total Customers",
    "Total Orders",
    "Average Orders per Customer",
];

const COLUMN_WIDTHS: [f64; 4] = [15.0, 18.0, 15.0, 26.0];

// Excel's stock data-bar palette: blue for counts, green for orders.
const CUSTOMER_BAR_COLOR: u32 = 0x638EC6;
const ORDER_BAR_COLOR: u32 = 0x63C384;

/// Create the Summary sheet. The aggregate table is always present; the
/// visual statistics block is skipped entirely for an empty export.
pub fn create_summary_sheet(
    workbook: &mut Workbook,
    records: &[CustomerRecord],
    buckets: &CategoryBuckets,
    exported_at: DateTime<Local>,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary")?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    // Title and export timestamp, merged across the table width
    sheet.merge_range(0, 0, 0, 3, "Customer Export Summary", &create_title_format())?;
    sheet.merge_range(
        1,
        0,
        1,
        3,
        &format!("Generated: {}", exported_at.format("%Y-%m-%d %H:%M:%S")),
        &Format::new(),
    )?;

    let header_format = create_summary_header_format();
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(3, col as u16, *header, &header_format)?;
    }

    let mut row = 4u32;
    let mut per_category = Vec::new();
    for category in Category::ALL {
        let totals = CategoryTotals::for_bucket(buckets.bucket(category));
        let label_format = create_category_label_format(category);
        let value_format = create_row_format(category);
        let average_format = create_row_format(category).set_num_format("0.00");

        sheet.write_string_with_format(row, 0, category.as_str(), &label_format)?;
        sheet.write_number_with_format(row, 1, totals.total_customers as f64, &value_format)?;
        sheet.write_number_with_format(row, 2, totals.total_orders as f64, &value_format)?;
        sheet.write_number_with_format(row, 3, totals.average_orders, &average_format)?;

        per_category.push((category, totals));
        row += 1;
    }

    // Grand total over the full input, so it also counts records that
    // belong to no category sheet.
    let grand = CategoryTotals::grand_total(records);
    let total_format = create_total_format();
    let total_average_format = create_total_format().set_num_format("0.00");
    sheet.write_string_with_format(row, 0, "TOTAL", &total_format)?;
    sheet.write_number_with_format(row, 1, grand.total_customers as f64, &total_format)?;
    sheet.write_number_with_format(row, 2, grand.total_orders as f64, &total_format)?;
    sheet.write_number_with_format(row, 3, grand.average_orders, &total_average_format)?;

    if records.is_empty() {
        return Ok(());
    }

    write_visual_statistics(sheet, &per_category, &grand)?;

    Ok(())
}

/// Two small tables under the aggregates, each with a data bar over its
/// numeric column.
fn write_visual_statistics(
    sheet: &mut Worksheet,
    per_category: &[(Category, CategoryTotals)],
    grand: &CategoryTotals,
) -> Result<()> {
    sheet.merge_range(9, 0, 9, 3, "Visual Statistics", &create_section_format())?;

    let header_format = create_summary_header_format();

    // Customer distribution
    let customer_headers = ["Category", "Customers", "% of Total"];
    for (col, header) in customer_headers.iter().enumerate() {
        sheet.write_string_with_format(11, col as u16, *header, &header_format)?;
    }
    let percent_format = create_percent_format();
    let mut row = 12u32;
    for (category, totals) in per_category {
        let share = if grand.total_customers == 0 {
            0.0
        } else {
            totals.total_customers as f64 / grand.total_customers as f64
        };
        sheet.write_string(row, 0, category.as_str())?;
        sheet.write_number(row, 1, totals.total_customers as f64)?;
        sheet.write_number_with_format(row, 2, share, &percent_format)?;
        row += 1;
    }

    // Order distribution
    let order_headers = ["Category", "Total Orders", "Average Orders"];
    for (col, header) in order_headers.iter().enumerate() {
        sheet.write_string_with_format(16, col as u16, *header, &header_format)?;
    }
    let average_format = create_average_format();
    let mut row = 17u32;
    for (category, totals) in per_category {
        sheet.write_string(row, 0, category.as_str())?;
        sheet.write_number(row, 1, totals.total_orders as f64)?;
        sheet.write_number_with_format(row, 2, totals.average_orders, &average_format)?;
        row += 1;
    }

    let customer_counts: Vec<f64> = per_category
        .iter()
        .map(|(_, totals)| totals.total_customers as f64)
        .collect();
    let order_totals: Vec<f64> = per_category
        .iter()
        .map(|(_, totals)| totals.total_orders as f64)
        .collect();

    sheet.add_conditional_format(12, 1, 14, 1, &data_bar(CUSTOMER_BAR_COLOR, &customer_counts))?;
    sheet.add_conditional_format(17, 1, 19, 1, &data_bar(ORDER_BAR_COLOR, &order_totals))?;

    Ok(())
}

/// Solid-fill bar scaled between the extremes actually present in the
/// column, so the largest category always shows a full bar.
fn data_bar(color: u32, values: &[f64]) -> ConditionalFormatDataBar {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    ConditionalFormatDataBar::new()
        .set_solid_fill(true)
        .set_fill_color(Color::RGB(color))
        .set_minimum(ConditionalFormatType::Number, min)
        .set_maximum(ConditionalFormatType::Number, max)
}
