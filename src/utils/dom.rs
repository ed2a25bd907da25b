//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades to
//! `None`/no-op when the API is missing, so callers never branch on the
//! environment themselves.

use web_sys::{Element, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Current vertical scroll offset in pixels (0 when unavailable).
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Evaluate a media query once.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Set an attribute on the `<html>` element.
///
/// Returns `true` if the attribute was written.
pub fn set_root_attribute(name: &str, value: &str) -> bool {
    document_element().is_some_and(|el| el.set_attribute(name, value).is_ok())
}
