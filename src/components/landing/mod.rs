//! Landing page sections.
//!
//! A pure rendering of the static records in `acme_core::content`, in fixed
//! order: hero, stats, features, testimonial, call to action, footer.
//! Each repeated record renders one block tagged with `data-block`.

mod cta;
mod features;
mod footer;
mod hero;
mod stats;
mod testimonial;

use leptos::prelude::*;

pub use cta::CallToActionPanel;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use stats::Stats;
pub use testimonial::SocialProof;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Full marketing page below the navigation bar.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <Hero />
            <Stats />
            <Features />
            <SocialProof />
            <CallToActionPanel />
            <Footer />
        </div>
    }
}
