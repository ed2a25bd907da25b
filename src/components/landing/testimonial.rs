use acme_core::content::{TESTIMONIAL, Testimonial};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Avatar stack, star rating, and the customer quote.
#[component]
pub fn SocialProof() -> impl IntoView {
    view! {
        <section class=format!("{} {}", css::section, css::muted) data-section="social-proof">
            <TestimonialBlock testimonial=TESTIMONIAL />
        </section>
    }
}

#[component]
fn TestimonialBlock(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class=css::testimonial data-block="testimonial">
            <div class=css::avatars aria-hidden="true">
                {testimonial
                    .avatars
                    .iter()
                    .map(|initial| view! { <span class=css::avatar>{*initial}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class=css::stars aria-label=format!("{} out of 5 stars", testimonial.rating)>
                {(0..testimonial.rating)
                    .map(|_| view! { <span class=css::star><Icon icon=ic::STAR /></span> })
                    .collect::<Vec<_>>()}
            </div>
            <blockquote class=css::quote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
            <figcaption class=css::attribution>
                <span class=css::author>{testimonial.author}</span>
                <span class=css::authorTitle>{testimonial.author_title}</span>
            </figcaption>
        </figure>
    }
}
