use acme_core::content::{STATS, Stat};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Four headline numbers.
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class=format!("{} {}", css::section, css::muted) data-section="stats">
            <dl class=css::statGrid>
                {STATS.iter().map(|stat| view! { <StatBlock stat=*stat /> }).collect::<Vec<_>>()}
            </dl>
        </section>
    }
}

#[component]
fn StatBlock(stat: Stat) -> impl IntoView {
    view! {
        <div class=css::stat data-block="stat">
            <dt class=css::statLabel>{stat.label}</dt>
            <dd class=css::statValue>{stat.value}</dd>
        </div>
    }
}
