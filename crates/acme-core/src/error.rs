//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while persisting the theme preference.
///
/// None of these surface to the user; the preference still flips for the
/// current page and the failure is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// No persistent storage is reachable (no window, storage disabled).
    #[error("theme storage not available")]
    StorageUnavailable,
    /// Storage exists but rejected the write (quota, private mode).
    #[error("failed to save theme preference")]
    SaveFailed,
}
