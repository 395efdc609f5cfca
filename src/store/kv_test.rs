use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("users"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_replaces_value() {
    let store = MemoryStore::new();
    store.set_item("k", "first").unwrap();
    store.set_item("k", "second").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("second"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_absent_key_is_ok() {
    let store = MemoryStore::new();
    store.remove_item("nothing").unwrap();
    store.set_item("k", "v").unwrap();
    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k"), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let a = MemoryStore::new();
    let b = a.clone();
    a.set_item("shared", "1").unwrap();
    assert_eq!(b.get_item("shared").as_deref(), Some("1"));
}

#[test]
fn memory_store_quota_rejects_oversized_write() {
    let store = MemoryStore::with_quota(8);
    store.set_item("ab", "cdef").unwrap();
    assert_eq!(store.used_bytes(), 6);

    let err = store.set_item("xy", "zzz").unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { ref key } if key == "xy"));
    assert_eq!(store.get_item("xy"), None);
}

#[test]
fn memory_store_quota_counts_replaced_value_once() {
    let store = MemoryStore::with_quota(8);
    store.set_item("ab", "cdef").unwrap();
    store.set_item("ab", "123456").unwrap();
    assert_eq!(store.get_item("ab").as_deref(), Some("123456"));
}

#[test]
fn boxed_store_delegates() {
    let inner = MemoryStore::new();
    let boxed: Box<dyn KeyValueStore> = Box::new(inner.clone());
    boxed.set_item("k", "v").unwrap();
    assert_eq!(inner.get_item("k").as_deref(), Some("v"));
    boxed.remove_item("k").unwrap();
    assert_eq!(boxed.get_item("k"), None);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_json_then_load_json() {
    let store = MemoryStore::new();
    save_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
    assert_eq!(store.get_item("numbers").as_deref(), Some("[1,2,3]"));
    let back: Option<Vec<i32>> = load_json(&store, "numbers");
    assert_eq!(back, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_absent_is_none() {
    let store = MemoryStore::new();
    let value: Option<Vec<i32>> = load_json(&store, "missing");
    assert_eq!(value, None);
}

#[test]
fn load_json_corrupted_is_none() {
    let store = MemoryStore::new();
    store.set_item("numbers", "[1, 2,").unwrap();
    let value: Option<Vec<i32>> = load_json(&store, "numbers");
    assert_eq!(value, None);
}

#[test]
fn save_json_surfaces_quota_error() {
    let store = MemoryStore::with_quota(4);
    let err = save_json(&store, "numbers", &vec![1, 2, 3]).unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
}

#[test]
fn open_default_is_usable_without_browser() {
    let store = open_default();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
}
