//! Theme preference and its storage seam.
//!
//! The preference is owned outside the navigation bar. Components only see a
//! [`ThemeStore`], so tests can substitute [`MemoryThemeStore`] for the
//! browser-backed store.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use thiserror::Error;

use crate::error::ThemeError;

/// Two-valued colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase identifier used for storage and the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
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

/// Returned when a stored value is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Process-wide theme preference collaborator.
///
/// Persistence and broadcasting are the implementor's business; callers only
/// read the current value and request a new one.
pub trait ThemeStore {
    /// The preference as currently stored.
    fn current(&self) -> Theme;

    /// Replace the stored preference.
    fn set_theme(&self, theme: Theme) -> Result<(), ThemeError>;
}

/// Flip the displayed theme `shown` and ask `store` to persist the result.
///
/// The next value derives from what is on screen, never from the store, so
/// a store that rejects writes cannot pin the theme.
pub fn toggle(shown: Theme, store: &dyn ThemeStore) -> (Theme, Result<(), ThemeError>) {
    let next = shown.toggled();
    (next, store.set_theme(next))
}

/// In-memory [`ThemeStore`] that records every write.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Theme>,
    writes: Mutex<Vec<Theme>>,
    fail_writes: bool,
}

impl MemoryThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: Mutex::new(initial),
            writes: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    /// A store that rejects every write and keeps its initial value.
    pub fn failing(initial: Theme) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(initial)
        }
    }

    /// Every value passed to [`ThemeStore::set_theme`], oldest first.
    pub fn writes(&self) -> Vec<Theme> {
        self.writes
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn current(&self) -> Theme {
        self.theme.lock().map(|t| *t).unwrap_or_default()
    }

    fn set_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        if let Ok(mut w) = self.writes.lock() {
            w.push(theme);
        }
        if self.fail_writes {
            return Err(ThemeError::SaveFailed);
        }
        if let Ok(mut t) = self.theme.lock() {
            *t = theme;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" dark\n".parse::<Theme>(), Ok(Theme::Dark));
        assert!("system".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_display_matches_storage_form() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string(), theme.as_str());
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_toggle_alternates_from_initial_value() {
        for initial in [Theme::Light, Theme::Dark] {
            let store = MemoryThemeStore::new(initial);
            let mut shown = store.current();
            let mut expected = initial;
            for _ in 0..7 {
                expected = expected.toggled();
                let (next, result) = toggle(shown, &store);
                shown = next;
                assert_eq!(next, expected);
                assert!(result.is_ok());
                assert_eq!(store.current(), expected);
            }

            let writes = store.writes();
            assert_eq!(writes.len(), 7);
            for pair in writes.windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
            assert_eq!(writes[0], initial.toggled());
        }
    }

    #[test]
    fn test_toggle_keeps_alternating_when_writes_fail() {
        let store = MemoryThemeStore::failing(Theme::Light);
        let mut shown = store.current();
        let mut seen = Vec::new();
        for _ in 0..3 {
            let (next, result) = toggle(shown, &store);
            assert_eq!(result, Err(ThemeError::SaveFailed));
            shown = next;
            seen.push(next);
        }

        assert_eq!(seen, vec![Theme::Dark, Theme::Light, Theme::Dark]);
        assert_eq!(store.writes(), seen);
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_unknown_theme_message() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: sepia");
    }
}
