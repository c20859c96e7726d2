use super::*;
use crate::util::memory_store::MemoryStore;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("theme"), None);
    store.set_item("theme", "dark");
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
    assert_eq!(store.writes(), 1);
}

#[test]
fn memory_store_seeded_item_is_not_a_write() {
    let store = MemoryStore::with_item("theme", "light");
    assert_eq!(store.get_item("theme").as_deref(), Some("light"));
    assert_eq!(store.writes(), 0);
}

#[test]
fn memory_store_counts_repeated_identical_writes() {
    let store = MemoryStore::new();
    store.set_item("theme", "dark");
    store.set_item("theme", "dark");
    assert_eq!(store.writes(), 2);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_in_non_hydrate_tests() {
    let store = LocalStorage;
    store.set_item("theme", "dark");
    assert_eq!(store.get_item("theme"), None);
}
