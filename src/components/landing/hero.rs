use acme_core::content::{
    HERO_ACTIONS, HERO_BADGE, HERO_HEADLINE, HERO_HEADLINE_ACCENT, HERO_PERKS, HERO_SUBHEADING,
};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::action::{ActionLink, ActionSize};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Headline, primary calls to action, and trial perks.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class=format!("{} {}", css::section, css::hero) data-section="hero">
            <div class=css::heroInner>
                <span class=css::badge>
                    <Icon icon=ic::SPARKLES />
                    {HERO_BADGE}
                </span>
                <h1 class=css::heroTitle>
                    {HERO_HEADLINE}
                    " "
                    <span class=css::heroAccent>{HERO_HEADLINE_ACCENT}</span>
                </h1>
                <p class=css::heroLead>{HERO_SUBHEADING}</p>

                <div class=css::actionRow>
                    {HERO_ACTIONS
                        .iter()
                        .map(|action| view! { <ActionLink action=*action size=ActionSize::Large /> })
                        .collect::<Vec<_>>()}
                </div>

                <ul class=css::perks>
                    {HERO_PERKS
                        .iter()
                        .map(|perk| view! {
                            <li class=css::perk>
                                <span class=css::check><Icon icon=ic::CHECK /></span>
                                <span>{*perk}</span>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
