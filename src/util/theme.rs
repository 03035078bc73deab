//! Theme preference initialization and application.
//!
//! Reads the preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Requires a browser environment;
//! outside `csr` reads return the default and writes no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage;
use crate::state::theme::Theme;

const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the stored theme, defaulting to light.
pub fn read_preference(key: &str) -> Theme {
    Theme::from_stored(storage::get_item(key).as_deref())
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (THEME_ATTRIBUTE, theme);
    }
}

/// Write the theme to `localStorage`.
pub fn persist(key: &str, theme: Theme) {
    storage::set_item(key, theme.as_str());
}
