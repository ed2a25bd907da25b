//! Utility modules for browser API access.
//!
//! Provides:
//! - [`dom`] - Window, storage, scroll, and media-query helpers

pub mod dom;
