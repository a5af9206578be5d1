//! File-backed collection durability tests
//!
//! - documents survive a close and re-open
//! - the file on disk is always a complete, checksum-valid envelope
//! - corruption is detected at open and never ignored

use serde_json::json;
use stockroom::inventory;
use stockroom::product::NewProduct;
use stockroom::store::{Collection, FileCollection, Filter, StoreError};
use tempfile::TempDir;

fn open(dir: &TempDir) -> FileCollection {
    FileCollection::open(dir.path(), "ProductsDB", "Products").unwrap()
}

fn add(coll: &mut FileCollection, name: &str, price: f64, qty: u64, discount: Option<i64>) {
    inventory::add(
        coll,
        NewProduct {
            name: name.to_string(),
            base_price: price,
            quantity: qty,
            discount_percentage: discount,
        },
    )
    .unwrap();
}

#[test]
fn test_documents_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut coll = open(&dir);
        add(&mut coll, "Widget", 100.0, 10, Some(20));
        add(&mut coll, "Bolt", 1.5, 500, None);
    }

    let coll = open(&dir);
    assert_eq!(coll.len(), 2);

    let widget = coll
        .find_one(&Filter::eq("name", json!("Widget")))
        .unwrap()
        .unwrap();
    assert!((widget["price"].as_f64().unwrap() - 80.0).abs() < 1e-9);
    assert_eq!(widget["discount_percentage"], json!(20));

    let bolt = coll
        .find_one(&Filter::eq("name", json!("Bolt")))
        .unwrap()
        .unwrap();
    assert!(bolt.get("discount_percentage").is_none());
}

#[test]
fn test_open_missing_collection_is_empty() {
    let dir = TempDir::new().unwrap();
    let coll = open(&dir);
    assert!(coll.is_empty());
}

#[test]
fn test_delete_persists_across_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut coll = open(&dir);
        add(&mut coll, "Widget", 100.0, 10, None);
        inventory::remove(&mut coll, "Widget").unwrap();
    }

    let coll = open(&dir);
    assert!(coll.is_empty());
}

#[test]
fn test_file_is_valid_envelope_after_every_mutation() {
    let dir = TempDir::new().unwrap();
    let mut coll = open(&dir);
    let path = coll.path().to_path_buf();

    add(&mut coll, "Widget", 100.0, 10, None);
    let after_insert: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(after_insert["documents"].as_array().unwrap().len(), 1);
    assert!(after_insert["checksum"].is_u64());

    inventory::remove(&mut coll, "Widget").unwrap();
    let after_delete: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert!(after_delete["documents"].as_array().unwrap().is_empty());

    // The temp file used for the atomic rewrite is not left behind.
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_corrupt_file_fails_loudly_at_open() {
    let dir = TempDir::new().unwrap();
    let path = {
        let mut coll = open(&dir);
        add(&mut coll, "Widget", 100.0, 10, None);
        coll.path().to_path_buf()
    };

    // Flip a byte inside the documents payload.
    let mut bytes = std::fs::read(&path).unwrap();
    let pos = bytes.len() - 5;
    bytes[pos] ^= 0x01;
    std::fs::write(&path, bytes).unwrap();

    let err = FileCollection::open(dir.path(), "ProductsDB", "Products").unwrap_err();
    match err {
        StoreError::Corrupt(_) => {}
        other => panic!("expected corruption error, got: {}", other),
    }
}

#[test]
fn test_checksum_mismatch_detected() {
    let dir = TempDir::new().unwrap();
    let path = {
        let mut coll = open(&dir);
        add(&mut coll, "Widget", 100.0, 10, None);
        coll.path().to_path_buf()
    };

    // Rewrite the envelope with a tampered document but the old checksum.
    let mut envelope: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    envelope["documents"][0]["price"] = json!(0.01);
    std::fs::write(&path, serde_json::to_vec(&envelope).unwrap()).unwrap();

    let err = FileCollection::open(dir.path(), "ProductsDB", "Products").unwrap_err();
    assert_eq!(err.code(), "STOCK_STORE_CORRUPT");
    assert!(err.to_string().to_lowercase().contains("checksum"));
}

#[test]
fn test_update_persists_partial_fields() {
    let dir = TempDir::new().unwrap();

    {
        let mut coll = open(&dir);
        add(&mut coll, "Widget", 100.0, 10, None);
        let matched = coll
            .update_one(&Filter::eq("name", json!("Widget")), json!({"quantity": 3}))
            .unwrap();
        assert!(matched);
    }

    let coll = open(&dir);
    let doc = coll
        .find_one(&Filter::eq("name", json!("Widget")))
        .unwrap()
        .unwrap();
    assert_eq!(doc["quantity"], json!(3));
    // Fields not listed in the update are untouched.
    assert!((doc["price"].as_f64().unwrap() - 100.0).abs() < 1e-9);
}
