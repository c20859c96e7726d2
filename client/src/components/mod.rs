//! Page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component receives its data and configuration as props from `App`;
//! none of them look up page structure on their own.

pub mod contact_form;
pub mod project_list;
pub mod theme_toggle;
