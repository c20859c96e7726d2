//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic so the behavior can be exercised without a browser.

pub mod storage;
pub mod theme;

#[cfg(test)]
#[path = "memory_store_test.rs"]
pub(crate) mod memory_store;
