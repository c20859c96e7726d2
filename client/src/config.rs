//! Build-time site configuration.
//!
//! Values come from `option_env!` so the server-rendered HTML and the WASM
//! bundle are built from the same settings and hydrate consistently.
//!
//! - `PORTFOLIO_OWNER_NAME`: name shown in the header and footer.
//! - `PORTFOLIO_CONTACT_ACTION`: form collector URL. Set it to an empty
//!   string to drop the contact section from the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_OWNER_NAME: &str = "Your Name";
pub const DEFAULT_CONTACT_ACTION: &str = "https://formspree.io/f/your-form-id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner_name: String,
    /// Contact form action URL; `None` means the page has no contact form.
    pub contact_action: Option<String>,
}

impl SiteConfig {
    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("PORTFOLIO_OWNER_NAME"), option_env!("PORTFOLIO_CONTACT_ACTION"))
    }

    /// Apply defaults to raw settings. A blank contact action disables the form.
    pub fn resolve(owner_name: Option<&str>, contact_action: Option<&str>) -> Self {
        let owner_name = owner_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_OWNER_NAME)
            .to_owned();
        let contact_action = match contact_action.map(str::trim) {
            None => Some(DEFAULT_CONTACT_ACTION.to_owned()),
            Some("") => None,
            Some(url) => Some(url.to_owned()),
        };
        Self { owner_name, contact_action }
    }

    pub fn page_title(&self) -> String {
        format!("{} | Portfolio", self.owner_name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
