//! Acme marketing landing page, rendered client-side with Leptos.
//!
//! - [`app`] - Root component, page shell, viewport context
//! - [`components`] - Navigation bar, landing sections, shared widgets
//! - [`hooks`] - Window listeners scoped to the current reactive owner
//! - [`theme`] - Theme context and the localStorage-backed store
//! - [`config`] - Compile-time configuration

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod theme;
pub mod utils;
