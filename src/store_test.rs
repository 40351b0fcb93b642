use super::*;

#[test]
fn empty_store_returns_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), Ok(None));
}

#[test]
fn set_then_get_returns_value() {
    let mut store = MemoryStore::new();
    store.set("k", "light").unwrap();
    assert_eq!(store.get("k"), Ok(Some("light".to_owned())));
    assert_eq!(store.value("k"), Some("light"));
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = MemoryStore::with_value("k", "light");
    store.set("k", "dark").unwrap();
    assert_eq!(store.value("k"), Some("dark"));
}

#[test]
fn unavailable_store_fails_both_ways() {
    let mut store = MemoryStore::unavailable();
    assert_eq!(store.get("k"), Err(StoreError::Unavailable));
    assert_eq!(store.set("k", "dark"), Err(StoreError::Unavailable));
    assert_eq!(store.value("k"), None);
}
