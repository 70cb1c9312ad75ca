//! Tests for the demo database in both connection modes.

use tempfile::NamedTempFile;

use coursework_db::{ConnectionMode, Database, compare_modes};

/// Creates a temporary database file and initializes it. The returned file
/// handle must stay in scope to keep the file alive.
fn setup_test_db() -> (NamedTempFile, String) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut db = Database::open(&db_path, ConnectionMode::Shared).expect("Failed to open");
    db.initialize().expect("Initialization failed");
    (db_file, db_path)
}

#[test]
fn test_seeded_user_found() {
    let (_db, path) = setup_test_db();
    let mut db = Database::open(&path, ConnectionMode::Shared).expect("Failed to open");

    let user = db.find_user(1).expect("Query failed").expect("Alice is seeded");
    assert_eq!(*user.id(), 1);
    assert_eq!(user.name(), "Alice");
}

#[test]
fn test_missing_user_is_none() {
    let (_db, path) = setup_test_db();
    let mut db = Database::open(&path, ConnectionMode::PerCall).expect("Failed to open");
    assert!(db.find_user(99).expect("Query failed").is_none());
}

#[test]
fn test_orders_for_user_in_id_order() {
    let (_db, path) = setup_test_db();
    let mut db = Database::open(&path, ConnectionMode::Shared).expect("Failed to open");

    let products: Vec<String> = db
        .orders_for_user(1)
        .expect("Query failed")
        .iter()
        .map(|o| o.product().clone())
        .collect();
    assert_eq!(products, vec!["Laptop".to_string(), "Mouse".to_string()]);

    let bob = db.orders_for_user(2).expect("Query failed");
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].product(), "Keyboard");
}

#[test]
fn test_initialize_is_idempotent() {
    let (_db, path) = setup_test_db();
    let mut db = Database::open(&path, ConnectionMode::PerCall).expect("Failed to open");
    db.initialize().expect("Second initialization failed");
    db.initialize().expect("Third initialization failed");
    assert_eq!(db.orders_for_user(1).expect("Query failed").len(), 2);
}

#[test]
fn test_shared_mode_connects_once() {
    let (_db, path) = setup_test_db();
    let mut db = Database::open(&path, ConnectionMode::Shared).expect("Failed to open");
    db.find_user(1).expect("Query failed");
    db.orders_for_user(1).expect("Query failed");
    db.find_user(2).expect("Query failed");
    assert_eq!(db.connections_opened(), 1);
}

#[test]
fn test_per_call_mode_connects_each_query() {
    let (_db, path) = setup_test_db();
    let mut db = Database::open(&path, ConnectionMode::PerCall).expect("Failed to open");
    assert_eq!(db.connections_opened(), 0);
    db.find_user(1).expect("Query failed");
    db.orders_for_user(1).expect("Query failed");
    assert_eq!(db.connections_opened(), 2);
}

#[test]
fn test_compare_modes_returns_identical_rows() {
    let (_db, path) = setup_test_db();
    let comparison = compare_modes(&path, 1).expect("Comparison failed");

    assert_eq!(comparison.shared().user(), comparison.per_call().user());
    assert_eq!(comparison.shared().orders(), comparison.per_call().orders());
    assert_eq!(*comparison.shared().connections_opened(), 1);
    assert_eq!(*comparison.per_call().connections_opened(), 2);
    assert_eq!(*comparison.shared().mode(), ConnectionMode::Shared);
}

#[test]
fn test_query_before_initialize_fails() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = db_file.path().to_str().expect("Invalid path").to_string();
    let mut db = Database::open(&path, ConnectionMode::Shared).expect("Failed to open");

    let err = db.find_user(1).expect_err("users table does not exist yet");
    assert!(err.message.contains("Diesel error"));
}
