//! Theme preference wiring for the browser.
//!
//! - [`LocalStorageThemeStore`] - persists the preference in localStorage
//! - [`ThemeContext`] - reactive mirror of a [`ThemeStore`], provided at the root

use std::sync::Arc;

use acme_core::theme::{self, Theme, ThemeStore};
use acme_core::ThemeError;
use leptos::prelude::*;

use crate::config::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::utils::dom;

/// Shared handle to whatever store backs the preference.
pub type SharedThemeStore = Arc<dyn ThemeStore + Send + Sync>;

// ============================================================================
// LocalStorageThemeStore
// ============================================================================

/// [`ThemeStore`] backed by `localStorage[THEME_STORAGE_KEY]`.
///
/// With nothing stored, falls back to the `prefers-color-scheme` media query,
/// then to light.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn current(&self) -> Theme {
        let stored = dom::local_storage()
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|v| v.parse::<Theme>().ok());

        stored.unwrap_or_else(|| {
            if dom::media_matches(DARK_SCHEME_QUERY) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
    }

    fn set_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        let storage = dom::local_storage().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(|_| ThemeError::SaveFailed)
    }
}

// ============================================================================
// ThemeContext
// ============================================================================

/// Reactive theme state backed by an injected [`ThemeStore`].
///
/// Access from any component with `use_context::<ThemeContext>()`.
/// The signal is seeded from the store once, at construction; afterwards all
/// changes go through [`ThemeContext::toggle`], which writes to both.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Currently displayed theme.
    pub theme: RwSignal<Theme>,
    store: StoredValue<SharedThemeStore>,
}

impl ThemeContext {
    /// Creates the context and keeps `<html data-theme>` in sync with it.
    pub fn new(store: SharedThemeStore) -> Self {
        let theme = RwSignal::new(store.current());

        Effect::new(move || {
            dom::set_root_attribute(THEME_ATTRIBUTE, theme.get().as_str());
        });

        Self {
            theme,
            store: StoredValue::new(store),
        }
    }

    /// Flip between light and dark.
    ///
    /// The next value is derived from the displayed theme, so it changes on
    /// every call even if the store fails to persist it.
    pub fn toggle(&self) {
        let shown = self.theme.get_untracked();
        let (next, result) = self
            .store
            .with_value(|s| theme::toggle(shown, s.as_ref()));
        self.theme.set(next);

        match result {
            Ok(()) => web_sys::console::debug_1(&format!("theme: {next}").into()),
            Err(e) => web_sys::console::warn_1(&format!("theme: {e}").into()),
        }
    }
}

/// Fetch the theme context provided at the root.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided at root")
}
