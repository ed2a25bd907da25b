use acme_core::content::{CTA_ACTIONS, CTA_BADGE, CTA_BENEFITS, CTA_BODY, CTA_HEADING};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::action::{ActionLink, ActionSize};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Closing pitch with trial benefits.
#[component]
pub fn CallToActionPanel() -> impl IntoView {
    view! {
        <section class=css::section data-section="cta">
            <div class=css::ctaCard>
                <div class=css::ctaPitch>
                    <span class=css::badge>{CTA_BADGE}</span>
                    <h2 class=css::sectionTitle>{CTA_HEADING}</h2>
                    <p class=css::sectionLead>{CTA_BODY}</p>
                    <div class=css::actionRow>
                        {CTA_ACTIONS
                            .iter()
                            .map(|action| view! { <ActionLink action=*action size=ActionSize::Large /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <ul class=css::benefits>
                    {CTA_BENEFITS
                        .iter()
                        .map(|benefit| view! {
                            <li class=css::benefit>
                                <span class=css::check><Icon icon=ic::CHECK /></span>
                                <div>
                                    <p class=css::benefitTitle>{benefit.title}</p>
                                    <p class=css::benefitDetail>{benefit.detail}</p>
                                </div>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
