//! Button-styled anchors.
//!
//! Every call to action on the page is an inert in-page anchor rendered with
//! button styling; this component owns that styling.

use acme_core::content::{CallToAction, Emphasis};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/action/action.module.css");

/// Button size scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionSize {
    Small,
    #[default]
    Regular,
    Large,
}

/// Anchor styled as a button.
///
/// # Props
/// - `action`: target, label, emphasis, and whether to show a trailing arrow
/// - `size`: button scale (default `Regular`)
/// - `block`: stretch to the container width
/// - `on_select`: run on click, before the browser follows the anchor
#[component]
pub fn ActionLink(
    action: CallToAction,
    #[prop(optional)] size: ActionSize,
    #[prop(optional)] block: bool,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let mut classes = vec![
        css::action,
        match action.emphasis {
            Emphasis::Primary => css::primary,
            Emphasis::Outline => css::outline,
        },
        match size {
            ActionSize::Small => css::small,
            ActionSize::Regular => css::regular,
            ActionSize::Large => css::large,
        },
    ];
    if block {
        classes.push(css::block);
    }

    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(cb) = on_select {
            cb.run(());
        }
    };

    view! {
        <a href=action.href class=classes.join(" ") data-action=action.href on:click=on_click>
            {action.label}
            {action.arrow.then(|| view! {
                <span class=css::arrow><Icon icon=ic::ARROW_RIGHT /></span>
            })}
        </a>
    }
}
