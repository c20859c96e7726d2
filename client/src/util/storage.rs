//! Key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller only needs `get_item`/`set_item`. Putting that
//! behind a trait keeps browser `localStorage` glue in one place and lets the
//! controller run against an in-memory store in tests
//! (`util/memory_store_test.rs`).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal string key/value store with Web Storage semantics.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Reads `None` and ignores writes outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write rejected for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}
