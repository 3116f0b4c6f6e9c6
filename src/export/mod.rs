//! Excel export of the customers table.
//!
//! Builds a four-sheet workbook (Summary plus one sheet per category, in
//! a fixed order) from a snapshot of customer records. The workbook is
//! serialized fully in memory and written atomically, so a failed export
//! never leaves a partial file behind.

mod formatting;
mod stats;
pub mod sheets;

pub use stats::{CategoryBuckets, CategoryTotals};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;

use crate::contacts::model::{Category, CustomerRecord};
use sheets::{create_category_sheet, create_summary_sheet};

/// Builds and saves customer export workbooks.
pub struct CustomerExporter;

impl CustomerExporter {
    /// Serialize a workbook for the given snapshot. The same records and
    /// timestamp always produce the same sheet content.
    pub fn build_workbook(
        customers: &[CustomerRecord],
        exported_at: DateTime<Local>,
    ) -> Result<Vec<u8>> {
        let buckets = CategoryBuckets::partition(customers);

        let mut workbook = Workbook::new();
        create_summary_sheet(&mut workbook, customers, &buckets, exported_at)?;
        for category in Category::ALL {
            create_category_sheet(&mut workbook, category, buckets.bucket(category))?;
        }

        workbook
            .save_to_buffer()
            .context("Failed to serialize workbook")
    }

    /// `customers_export_<timestamp>.xlsx`, second precision.
    pub fn export_filename(exported_at: DateTime<Local>) -> String {
        format!(
            "customers_export_{}.xlsx",
            exported_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// Build the workbook and write it under `dir`, returning the final
    /// path. The buffer lands in a temp file first and is renamed into
    /// place.
    pub fn export_to_file(customers: &[CustomerRecord], dir: &Path) -> Result<PathBuf> {
        let exported_at = Local::now();
        let buffer = Self::build_workbook(customers, exported_at)?;

        let path = dir.join(Self::export_filename(exported_at));
        let tmp_path = path.with_extension("xlsx.tmp");
        if let Err(e) = fs::write(&tmp_path, &buffer) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("Failed to write Excel file: {:?}", tmp_path));
        }
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("Failed to move Excel file into place: {:?}", path));
        }

        log::info!("Excel file exported to: {}", path.display());
        Ok(path)
    }
}
