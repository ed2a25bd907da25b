//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Page copy lives in `acme_core::content`; this module holds identity,
//! browser keys, and UI switches.

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown in the navbar and footer.
pub const APP_NAME: &str = "Acme";

/// Single-letter brand mark.
pub const BRAND_MARK: &str = "A";

/// Footer copyright line.
pub const COPYRIGHT: &str = "\u{a9} 2025 Acme Inc. All rights reserved.";

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on `<html>` to select the design tokens.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query consulted when no preference is stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
