//! Sheet generators for the customer export workbook

pub mod category;
pub mod summary;

pub use category::create_category_sheet;
pub use summary::create_summary_sheet;
