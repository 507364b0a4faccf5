//! `KeyValueStore` implementations behind the trait object.

use std::sync::Arc;

use tiqr_gssp::storage::{FileStore, KeyValueStore, MemoryStore};

fn exercise(store: Arc<dyn KeyValueStore>) {
    assert!(!store.has("auth:session-key").unwrap());
    store.set("auth:session-key", "pending").unwrap();
    assert_eq!(store.get("auth:session-key").unwrap().as_deref(), Some("pending"));
    store.set("auth:session-key", "confirmed").unwrap();
    assert_eq!(store.get("auth:session-key").unwrap().as_deref(), Some("confirmed"));
    store.remove("auth:session-key").unwrap();
    assert!(!store.has("auth:session-key").unwrap());
    store.set("a", "1").unwrap();
    store.clear().unwrap();
    assert!(!store.has("a").unwrap());
}

#[test]
fn memory_store() {
    exercise(Arc::new(MemoryStore::new()));
}

#[test]
fn file_store() {
    let dir = tempfile::tempdir().unwrap();
    exercise(Arc::new(FileStore::new(dir.path().join("state.json"))));
}
