use acme_core::content::{FEATURES, FEATURES_BADGE, FEATURES_HEADING, FEATURES_SUBHEADING, Feature};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Feature grid, the `#features` anchor target.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class=css::section data-section="features">
            <header class=css::sectionHeader>
                <span class=css::badge>{FEATURES_BADGE}</span>
                <h2 class=css::sectionTitle>{FEATURES_HEADING}</h2>
                <p class=css::sectionLead>{FEATURES_SUBHEADING}</p>
            </header>

            <div class=css::featureGrid>
                {FEATURES
                    .iter()
                    .map(|feature| view! { <FeatureCard feature=*feature /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class=css::card data-block="feature">
            <div class=css::featureIcon>
                <Icon icon=ic::feature(feature.icon) />
            </div>
            <h3 class=css::cardTitle>{feature.title}</h3>
            <p class=css::cardText>{feature.description}</p>
        </article>
    }
}
