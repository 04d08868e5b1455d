//! Applies the active theme to the document.
//!
//! Sets a `data-theme` attribute on the `<html>` element so stylesheets can
//! key off it. Requires a browser environment; elsewhere it is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Attribute value for a dark/light flag.
#[must_use]
pub fn theme_attribute(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_attribute(dark));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}
