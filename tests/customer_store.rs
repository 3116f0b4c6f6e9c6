//! Integration tests for the JSON contact store, run against temp files.

use std::fs;
use std::path::PathBuf;

use popcone_cli::contacts::model::CustomerRecord;
use popcone_cli::store::{ContactStore, CustomerQuery};

struct TempStore {
    dir: PathBuf,
}

impl TempStore {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("popcone-store-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join("customers.json")
    }

    fn open(&self) -> ContactStore {
        ContactStore::load(self.path()).unwrap()
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn record(name: &str, category: &str) -> CustomerRecord {
    CustomerRecord {
        name: name.to_string(),
        customer_category: category.to_string(),
        sub_type: "Confirmed".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_missing_file_loads_empty_store() {
    let temp = TempStore::new();
    let store = temp.open();
    assert!(store.is_empty());
    // Loading never creates the file
    assert!(!temp.path().exists());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let temp = TempStore::new();
    fs::write(temp.path(), "not json").unwrap();
    let err = ContactStore::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_insert_assigns_id_and_timestamps_and_persists() {
    let temp = TempStore::new();
    let mut store = temp.open();

    let id = store.insert(record("Asha Traders", "B2C")).unwrap();
    assert!(!id.is_empty());

    let reloaded = temp.open();
    assert_eq!(reloaded.len(), 1);
    let stored = reloaded.get(&id).unwrap();
    assert_eq!(stored.name, "Asha Traders");
    assert!(!stored.created_at.is_empty());
    assert_eq!(stored.created_at, stored.updated_at);
}

#[test]
fn test_update_replaces_fields_but_keeps_identity() {
    let temp = TempStore::new();
    let mut store = temp.open();
    let id = store.insert(record("Before", "B2C")).unwrap();
    let created_at = store.get(&id).unwrap().created_at.clone();

    let mut changed = record("After", "B2B");
    changed.sub_type = "Regular Buyers".to_string();
    store.update(&id, changed).unwrap();

    let stored = temp.open();
    let updated = stored.get(&id).unwrap();
    assert_eq!(updated.name, "After");
    assert_eq!(updated.customer_category, "B2B");
    assert_eq!(updated.id, id);
    assert_eq!(updated.created_at, created_at);
}

#[test]
fn test_update_unknown_id_fails() {
    let temp = TempStore::new();
    let mut store = temp.open();
    assert!(store.update("nope", record("x", "B2C")).is_err());
}

#[test]
fn test_remove_deletes_and_persists() {
    let temp = TempStore::new();
    let mut store = temp.open();
    let id = store.insert(record("Gone", "BULK")).unwrap();
    let kept = store.insert(record("Kept", "B2C")).unwrap();

    let removed = store.remove(&id).unwrap();
    assert_eq!(removed.name, "Gone");

    let reloaded = temp.open();
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.get(&id).is_none());
    assert!(reloaded.get(&kept).is_some());
}

#[test]
fn test_resolve_id_accepts_unique_prefix() {
    let temp = TempStore::new();
    let mut store = temp.open();
    let id = store.insert(record("Asha", "B2C")).unwrap();

    assert_eq!(store.resolve_id(&id).unwrap(), id);
    assert_eq!(store.resolve_id(&id[..8]).unwrap(), id);
    assert!(store.resolve_id("zzzz").is_err());
}

#[test]
fn test_resolve_id_rejects_ambiguous_prefix() {
    let temp = TempStore::new();
    let mut store = temp.open();
    store.insert(record("a", "B2C")).unwrap();
    store.insert(record("b", "B2C")).unwrap();

    // Every uuid shares the empty prefix
    let err = store.resolve_id("").unwrap_err();
    assert!(err.to_string().contains("ambiguous"));
}

#[test]
fn test_import_is_lenient_and_assigns_missing_ids() {
    let temp = TempStore::new();
    let mut store = temp.open();

    // Unknown category, numeric-string order count, no id: all accepted
    let records: Vec<CustomerRecord> = serde_json::from_str(
        r#"[
            {"name": "Legacy", "customer_category": "retail", "order_count": "12"},
            {"id": "keep-me", "name": "Kept id", "customer_category": "B2C"}
        ]"#,
    )
    .unwrap();

    assert_eq!(store.import(records).unwrap(), 2);

    let reloaded = temp.open();
    assert_eq!(reloaded.len(), 2);
    let legacy = reloaded.all().iter().find(|r| r.name == "Legacy").unwrap();
    assert!(!legacy.id.is_empty());
    assert_eq!(legacy.order_count, 12);
    assert_eq!(legacy.customer_category, "retail");
    assert!(reloaded.get("keep-me").is_some());
}

#[test]
fn test_select_filters_and_sorts_newest_first() {
    let temp = TempStore::new();
    let mut store = temp.open();

    let mut old = record("Old B2C", "B2C");
    old.created_at = "2023-01-01T00:00:00Z".to_string();
    let mut new = record("New B2C", "B2C");
    new.created_at = "2024-01-01T00:00:00Z".to_string();
    let other = record("B2B", "B2B");

    // import keeps the timestamps as given, unlike insert
    store.import(vec![old, new, other]).unwrap();

    let query = CustomerQuery {
        category: Some("B2C".parse().unwrap()),
        ..Default::default()
    };
    let selected = store.select(&query);
    let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["New B2C", "Old B2C"]);
}
