//! In-memory [`PreferenceStore`] shared by the util tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::storage::PreferenceStore;

/// Counts writes so tests can observe persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, without counting it as a write.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}
