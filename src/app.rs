//! Root application module.
//!
//! Contains the App component, the page shell, and the root-level contexts
//! (theme and viewport) that components read with `use_context`.

use std::sync::Arc;

use acme_core::Layout;
use acme_core::nav::desktop_media_query;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::{LandingPage, Navbar};
use crate::theme::{LocalStorageThemeStore, ThemeContext};

// ============================================================================
// Viewport
// ============================================================================

/// Reactive layout derived from the viewport width.
///
/// Provided at the root so components never query the window directly and
/// tests can pin a layout with [`Viewport::fixed`].
#[derive(Clone, Copy)]
pub struct Viewport(pub Signal<Layout>);

impl Viewport {
    /// Tracks [`desktop_media_query`] for the lifetime of the current owner.
    pub fn from_media_query() -> Self {
        let is_desktop = use_media_query(desktop_media_query());
        Self(Signal::derive(move || {
            Layout::from_desktop_match(is_desktop.get())
        }))
    }

    pub fn fixed(layout: Layout) -> Self {
        Self(Signal::stored(layout))
    }

    pub fn layout(&self) -> Layout {
        self.0.get()
    }
}

/// Fetch the viewport provided at the root.
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().expect("Viewport must be provided at root")
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// Provides the browser-backed theme store and the media-query viewport,
/// then renders the page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ThemeContext::new(Arc::new(LocalStorageThemeStore)));
    provide_context(Viewport::from_media_query());

    view! { <Page /> }
}

/// Page shell: navigation bar above the landing content.
///
/// Expects [`ThemeContext`] and [`Viewport`] in context.
#[component]
pub fn Page() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <LandingPage />
        </main>
    }
}
