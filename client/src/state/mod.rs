//! Client-side UI state modules.
//!
//! DESIGN
//! ======
//! State types are plain data with explicit transitions so components stay
//! thin and the transitions can be tested without a browser.

pub mod contact;
