//! Local customers table.
//!
//! A single JSON file next to the config, standing in for the web app's
//! remote table. The whole table is loaded into memory, filtered there,
//! and written back on every mutation; the data set is a few thousand
//! records at most.

pub mod query;

pub use query::CustomerQuery;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::contacts::model::CustomerRecord;

#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    records: Vec<CustomerRecord>,
}

impl ContactStore {
    /// Default table location, next to `config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("customers.json"))
    }

    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    pub fn load(path: PathBuf) -> Result<Self> {
        debug!("Loading customers from: {:?}", path);

        if !path.exists() {
            debug!("Customer store doesn't exist yet, starting empty");
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read customer store: {:?}", path))?;
        let records: Vec<CustomerRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse customer store: {:?}", path))?;

        debug!("Loaded {} customers", records.len());
        Ok(Self { path, records })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create store directory: {:?}", parent))?;
            }
        }

        let content = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize customer store")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write customer store: {:?}", self.path))?;

        debug!("Customer store saved ({} records)", self.records.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all(&self) -> &[CustomerRecord] {
        &self.records
    }

    /// Filtered snapshot, newest first.
    pub fn select(&self, query: &CustomerQuery) -> Vec<CustomerRecord> {
        let mut selected: Vec<CustomerRecord> = self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        query::sort_newest_first(&mut selected);
        selected
    }

    pub fn get(&self, id: &str) -> Option<&CustomerRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Resolve a full id or a unique prefix of one.
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        if self.records.iter().any(|record| record.id == prefix) {
            return Ok(prefix.to_string());
        }
        let matches: Vec<&CustomerRecord> = self
            .records
            .iter()
            .filter(|record| record.id.starts_with(prefix))
            .collect();
        match matches.len() {
            0 => bail!("Customer '{}' not found", prefix),
            1 => Ok(matches[0].id.clone()),
            n => bail!("Customer id '{}' is ambiguous ({} matches)", prefix, n),
        }
    }

    /// Assign an id and timestamps, then persist. Returns the new id.
    pub fn insert(&mut self, mut record: CustomerRecord) -> Result<String> {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }
        let now = Utc::now().to_rfc3339();
        record.created_at = now.clone();
        record.updated_at = now;

        let id = record.id.clone();
        info!("Inserting customer {} ({})", id, record.name);
        self.records.push(record);
        self.save()?;
        Ok(id)
    }

    /// Replace a record, keeping its id and creation timestamp.
    pub fn update(&mut self, id: &str, record: CustomerRecord) -> Result<()> {
        let existing = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| anyhow::anyhow!("Customer '{}' not found", id))?;

        let created_at = existing.created_at.clone();
        *existing = record;
        existing.id = id.to_string();
        existing.created_at = created_at;
        existing.updated_at = Utc::now().to_rfc3339();

        info!("Updated customer {}", id);
        self.save()
    }

    pub fn remove(&mut self, id: &str) -> Result<CustomerRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| anyhow::anyhow!("Customer '{}' not found", id))?;

        let removed = self.records.remove(index);
        info!("Removed customer {} ({})", removed.id, removed.name);
        self.save()?;
        Ok(removed)
    }

    /// Bulk append for `customer import`. Missing ids are assigned;
    /// timestamps are kept as the file carried them.
    pub fn import(&mut self, mut records: Vec<CustomerRecord>) -> Result<usize> {
        let count = records.len();
        for record in &mut records {
            if record.id.is_empty() {
                record.id = Uuid::new_v4().to_string();
            }
        }
        self.records.extend(records);
        self.save()?;
        info!("Imported {} customers", count);
        Ok(count)
    }
}
