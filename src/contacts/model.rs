use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The three customer categories. The set is fixed; everything downstream
/// (partitioning, sheet order, styling) is keyed off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    B2C,
    B2B,
    Bulk,
}

impl Category {
    /// Canonical order, used for sheet layout and summary rows.
    pub const ALL: [Category; 3] = [Category::B2C, Category::B2B, Category::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::B2C => "B2C",
            Category::B2B => "B2B",
            Category::Bulk => "BULK",
        }
    }

    /// Exact-match lookup. No trimming or case folding: a record with
    /// `"b2c"` or `"B2C "` does not belong to any category.
    pub fn parse_exact(value: &str) -> Option<Category> {
        match value {
            "B2C" => Some(Category::B2C),
            "B2B" => Some(Category::B2B),
            "BULK" => Some(Category::Bulk),
            _ => None,
        }
    }

    /// Sub-types specific to this category, not counting [`UNIVERSAL_SUB_TYPE`].
    pub fn sub_types(&self) -> &'static [&'static str] {
        match self {
            Category::B2C => &["Confirmed", "COD Pending", "Inquiry"],
            Category::B2B => &["Regular Buyers", "Leads / Potential"],
            Category::Bulk => &["One-time Order"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::parse_exact(s)
            .ok_or_else(|| anyhow!("Unknown category: '{}' (expected B2C, B2B or BULK)", s))
    }
}

/// Sub-type accepted in any category.
pub const UNIVERSAL_SUB_TYPE: &str = "Dead Lead";

pub const STATUS_OPTIONS: [&str; 4] = ["Active", "Inactive", "Hot", "Cold"];

pub const ORDER_SOURCES: [&str; 11] = [
    "Direct",
    "Instagram",
    "Facebook",
    "WhatsApp",
    "Website",
    "Google Ads",
    "Referral",
    "Walk-in",
    "Phone Call",
    "Email",
    "Other",
];

/// All sub-types valid for a category, universal one last.
pub fn sub_types_for(category: Category) -> Vec<&'static str> {
    let mut types = category.sub_types().to_vec();
    types.push(UNIVERSAL_SUB_TYPE);
    types
}

/// One row of the customers table.
///
/// Everything except `order_count` is stored as free text. Imported data
/// keeps whatever it carried, including category or status values outside
/// the closed sets, so readers treat these fields as raw strings and only
/// the typed accessors interpret them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub customer_category: String,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Older exports of the same data set call this column `area`.
    #[serde(default, alias = "area")]
    pub district: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub order_source: String,
    /// ISO date of the most recent enquiry; `last_order_date` in older data.
    #[serde(default, alias = "last_order_date")]
    pub last_enquired: String,
    #[serde(default, deserialize_with = "lenient_order_count")]
    pub order_count: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl CustomerRecord {
    /// The fixed category this record belongs to, if its raw value is one
    /// of the three recognized strings.
    pub fn category(&self) -> Option<Category> {
        Category::parse_exact(&self.customer_category)
    }
}

/// Accept whatever the stored data carries for `order_count`: a number, a
/// numeric string, or garbage, which counts as zero.
fn lenient_order_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().map(|n| n as u32).unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Field-level validation applied to `customer add` and `customer update`
/// input. Imported records are deliberately not re-validated.
pub fn validate_record(record: &CustomerRecord) -> Result<()> {
    let category = record
        .category()
        .ok_or_else(|| anyhow!("Category is required (B2C, B2B or BULK)"))?;

    if record.sub_type.trim().is_empty() {
        bail!("Type is required");
    }
    if !sub_types_for(category).contains(&record.sub_type.as_str()) {
        bail!(
            "'{}' is not a valid type for {} (expected one of: {})",
            record.sub_type,
            category,
            sub_types_for(category).join(", ")
        );
    }
    if record.name.trim().is_empty() {
        bail!("Name is required");
    }
    if !record.email.is_empty() && !EMAIL_RE.is_match(&record.email) {
        bail!("Invalid email format: '{}'", record.email);
    }
    if !record.status.is_empty() && !STATUS_OPTIONS.contains(&record.status.as_str()) {
        bail!(
            "Invalid status: '{}' (expected one of: {})",
            record.status,
            STATUS_OPTIONS.join(", ")
        );
    }

    Ok(())
}
