//! Formatting helpers for the customer export

use rust_xlsxwriter::*;

use crate::contacts::model::Category;

/// Fill and text colors backing one category's sheet and summary row.
#[derive(Debug, Clone, Copy)]
pub struct CategoryStyle {
    pub header_background: Color,
    pub header_text: Color,
    pub row_background: Color,
}

/// Fixed per-category palette, lifted from the web UI's category badges.
pub fn category_style(category: Category) -> CategoryStyle {
    match category {
        Category::B2C => CategoryStyle {
            header_background: Color::RGB(0x1976D2), // Blue
            header_text: Color::White,
            row_background: Color::RGB(0xE3F2FD),
        },
        Category::B2B => CategoryStyle {
            header_background: Color::RGB(0x7B1FA2), // Purple
            header_text: Color::White,
            row_background: Color::RGB(0xF3E5F5),
        },
        Category::Bulk => CategoryStyle {
            header_background: Color::RGB(0xE65100), // Orange
            header_text: Color::White,
            row_background: Color::RGB(0xFFF3E0),
        },
    }
}

pub fn create_title_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(16)
}

pub fn create_section_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(12)
}

/// Neutral header for the summary tables.
pub fn create_summary_header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
}

/// Category sheet header: accent background, white text.
pub fn create_category_header_format(category: Category) -> Format {
    let style = category_style(category);
    Format::new()
        .set_bold()
        .set_background_color(style.header_background)
        .set_font_color(style.header_text)
}

/// Light category tint used on alternating data rows.
pub fn create_row_format(category: Category) -> Format {
    Format::new().set_background_color(category_style(category).row_background)
}

/// Category name cell on the summary rows: accent text on the row tint.
pub fn create_category_label_format(category: Category) -> Format {
    let style = category_style(category);
    Format::new()
        .set_bold()
        .set_background_color(style.row_background)
        .set_font_color(style.header_background)
}

pub fn create_total_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF2F2F2))
}

pub fn create_placeholder_format() -> Format {
    Format::new().set_italic()
}

pub fn create_average_format() -> Format {
    Format::new().set_num_format("0.00")
}

pub fn create_percent_format() -> Format {
    Format::new().set_num_format("0.0%")
}

/// Status cell override. Exact matches only; anything else inherits the
/// row's format.
pub fn status_format(status: &str) -> Option<Format> {
    match status {
        "Active" | "Hot" => Some(
            Format::new()
                .set_background_color(Color::RGB(0xC8E6C9)) // Light Green
                .set_font_color(Color::RGB(0x2E7D32)),
        ),
        "Inactive" | "Cold" => Some(
            Format::new()
                .set_background_color(Color::RGB(0xFFCDD2)) // Light Red
                .set_font_color(Color::RGB(0xC62828)),
        ),
        _ => None,
    }
}
