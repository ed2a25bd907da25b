//! Browser-independent core of the Acme landing page.
//!
//! Contains everything that can be reasoned about without a DOM:
//! - [`content`] - Static display records (links, features, stats, testimonial)
//! - [`nav`] - Navigation bar flags and the layout breakpoint rule
//! - [`theme`] - Light/dark preference and the injectable [`ThemeStore`]
//! - [`error`] - Error types for theme persistence

pub mod content;
pub mod error;
pub mod nav;
pub mod theme;

pub use error::ThemeError;
pub use nav::{HeaderVariant, Layout, NavState};
pub use theme::{MemoryThemeStore, Theme, ThemeStore};
