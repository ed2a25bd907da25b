//! UI components built with Leptos.
//!
//! - [`Navbar`] - Fixed header with theme toggle and mobile slide-out menu
//! - [`LandingPage`] - Hero, stats, features, testimonial, CTA, footer
//! - [`action`] - Button-styled anchors shared by both
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod action;
pub mod icons;
pub mod landing;
pub mod navbar;

pub use landing::LandingPage;
pub use navbar::Navbar;
