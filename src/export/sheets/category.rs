//! Per-category customer sheets

use anyhow::Result;
use rust_xlsxwriter::*;

use super::super::formatting::*;
use crate::contacts::dates::{format_date_time, format_short_date};
use crate::contacts::model::{Category, CustomerRecord};

/// Fixed column layout shared by the three category sheets.
pub const CATEGORY_HEADERS: [&str; 12] = [
    "S.No",
    "Name",
    "Phone",
    "Email",
    "Category",
    "Type",
    "District",
    "Order Source",
    "Last Enquired",
    "Order Count",
    "Status",
    "Created At",
];

const COLUMN_WIDTHS: [f64; 12] = [
    8.0, 28.0, 16.0, 32.0, 12.0, 20.0, 16.0, 18.0, 18.0, 12.0, 12.0, 22.0,
];

/// Create one category's sheet. Always produced, with a placeholder row
/// when the bucket is empty, so the workbook shape never depends on the
/// data.
pub fn create_category_sheet(
    workbook: &mut Workbook,
    category: Category,
    bucket: &[&CustomerRecord],
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(category.as_str())?;

    let header_format = create_category_header_format(category);
    for (col, header) in CATEGORY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    let tinted_format = create_row_format(category);
    let plain_format = Format::new();

    let mut row = 1u32;
    if bucket.is_empty() {
        sheet.write_string_with_format(row, 1, "No customers found", &create_placeholder_format())?;
        sheet.write_string(row, 4, category.as_str())?;
        row += 1;
    } else {
        for (index, customer) in bucket.iter().enumerate() {
            // First data row tinted, then every other one
            let row_format = if index % 2 == 0 {
                &tinted_format
            } else {
                &plain_format
            };

            let last_enquired =
                format_short_date(&customer.last_enquired).unwrap_or_else(|| "N/A".to_string());
            let created_at =
                format_date_time(&customer.created_at).unwrap_or_else(|| "N/A".to_string());
            let status_override = status_format(&customer.status);
            let status_cell_format = status_override.as_ref().unwrap_or(row_format);

            sheet.write_number_with_format(row, 0, (index + 1) as f64, row_format)?;
            sheet.write_string_with_format(row, 1, &customer.name, row_format)?;
            sheet.write_string_with_format(row, 2, &customer.phone, row_format)?;
            sheet.write_string_with_format(row, 3, &customer.email, row_format)?;
            sheet.write_string_with_format(row, 4, &customer.customer_category, row_format)?;
            sheet.write_string_with_format(row, 5, &customer.sub_type, row_format)?;
            sheet.write_string_with_format(row, 6, &customer.district, row_format)?;
            sheet.write_string_with_format(row, 7, &customer.order_source, row_format)?;
            sheet.write_string_with_format(row, 8, &last_enquired, row_format)?;
            sheet.write_number_with_format(row, 9, f64::from(customer.order_count), row_format)?;
            sheet.write_string_with_format(row, 10, &customer.status, status_cell_format)?;
            sheet.write_string_with_format(row, 11, &created_at, row_format)?;

            row += 1;
        }
    }

    // Header stays visible and filterable on every sheet, placeholder
    // included
    sheet.set_freeze_panes(1, 0)?;
    sheet.autofilter(0, 0, row - 1, (CATEGORY_HEADERS.len() - 1) as u16)?;

    Ok(())
}
