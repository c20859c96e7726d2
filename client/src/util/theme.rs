//! Light/dark theme preference.
//!
//! Reads the saved preference from a [`PreferenceStore`] and reflects it as a
//! `data-theme` attribute on the `<html>` element. Every toggle writes the new
//! value back, even when it did not change. Attribute writes require a
//! browser environment and no-op during SSR; before hydration the saved
//! value is applied by [`boot_script`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use super::storage::PreferenceStore;

/// Storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Attribute set on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The two page themes. Absence of a saved preference means [`Theme::Light`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Map the toggle control's checked state: checked means dark.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the saved preference, if any.
pub fn read_preference(store: &impl PreferenceStore) -> Option<Theme> {
    let raw = store.get_item(STORAGE_KEY)?;
    let theme = Theme::parse(&raw);
    #[cfg(feature = "hydrate")]
    {
        if theme.is_none() {
            log::debug!("ignoring unrecognised saved theme {raw:?}");
        }
    }
    theme
}

/// Resolve the initial theme on page load.
///
/// A saved preference is applied to the document root and returned. Without
/// one the page stays on the default light theme and nothing is written.
pub fn restore(store: &impl PreferenceStore) -> Theme {
    match read_preference(store) {
        Some(theme) => {
            apply(theme);
            theme
        }
        None => Theme::default(),
    }
}

/// Handle a toggle interaction: apply the theme implied by `checked` and
/// persist it unconditionally.
pub fn toggle(checked: bool, store: &impl PreferenceStore) -> Theme {
    let next = Theme::from_checked(checked);
    apply(next);
    store.set_item(STORAGE_KEY, next.as_str());
    next
}

/// Inline script for the document `<head>`.
///
/// Applies a saved theme to `<html>` before the body paints, so a dark
/// preference never flashes the light page while the WASM bundle loads.
/// Unrecognised values are left alone, matching [`read_preference`].
pub fn boot_script() -> String {
    format!(
        r#"try{{var t=localStorage.getItem("{STORAGE_KEY}");if(t==="light"||t==="dark"){{document.documentElement.setAttribute("{THEME_ATTRIBUTE}",t);}}}}catch(e){{}}"#
    )
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if el.set_attribute(THEME_ATTRIBUTE, theme.as_str()).is_err() {
                log::warn!("failed to set {THEME_ATTRIBUTE}={theme}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
