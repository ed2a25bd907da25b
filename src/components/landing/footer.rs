use acme_core::content::{FOOTER_BLURB, FOOTER_COLUMNS, FooterColumn};
use leptos::prelude::*;

use crate::config::{APP_NAME, BRAND_MARK, COPYRIGHT};

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <div class=css::footerGrid>
                <div>
                    <div class=css::footerBrand>
                        <span class=css::footerMark>{BRAND_MARK}</span>
                        <span class=css::footerName>{APP_NAME}</span>
                    </div>
                    <p class=css::footerBlurb>{FOOTER_BLURB}</p>
                </div>

                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| view! { <FooterLinks column=*column /> })
                    .collect::<Vec<_>>()}
            </div>

            <p class=css::copyright>{COPYRIGHT}</p>
        </footer>
    }
}

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    view! {
        <nav class=css::footerColumn aria-label=column.heading>
            <h3 class=css::footerHeading>{column.heading}</h3>
            <ul class=css::footerLinks>
                {column
                    .links
                    .iter()
                    .map(|link| view! {
                        <li><a href=link.href class=css::footerLink>{link.label}</a></li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
