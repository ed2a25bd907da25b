//! Navigation bar component.
//!
//! Fixed header with brand, links, auth actions, and theme toggle. Below the
//! desktop breakpoint the links and actions move into a slide-out panel.
//!
//! ## Responsive behavior
//!
//! | Layout | Bar | Panel |
//! |--------|-----|-------|
//! | Desktop (>= 768px) | Brand, links, theme toggle, Log in, Sign up | Not rendered |
//! | Mobile (< 768px) | Brand, theme toggle, menu trigger | Links, Log in, Sign up |

use acme_core::content::{AUTH_ACTIONS, NAV_LINKS};
use acme_core::{HeaderVariant, Layout, NavState};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_viewport;
use crate::components::action::{ActionLink, ActionSize};
use crate::components::icons as ic;
use crate::config::{APP_NAME, BRAND_MARK};
use crate::hooks::{on_escape_key, on_window_scroll};
use crate::theme::{ThemeContext, use_theme};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

// ============================================================================
// Listener Setup Functions
// ============================================================================

/// Flip `mounted` after the first render pass and sync the scroll flag.
fn setup_mount_effect(state: RwSignal<NavState>) {
    Effect::new(move |_| {
        let offset = dom::scroll_offset();
        state.maybe_update(|s| {
            let first = s.mount();
            s.on_scroll(offset) || first
        });
    });
}

/// Close the panel once the viewport reaches the desktop layout.
fn setup_layout_effect(state: RwSignal<NavState>, layout: Signal<Layout>) {
    Effect::new(move |_| {
        let layout = layout.get();
        state.maybe_update(|s| s.on_layout(layout));
    });
}

// ============================================================================
// Navbar Component
// ============================================================================

/// Site navigation bar.
///
/// Reads [`ThemeContext`] and [`Viewport`](crate::app::Viewport) from context.
/// Listeners registered here are removed when the component's owner is
/// disposed.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let viewport = use_viewport();
    let state = RwSignal::new(NavState::new());

    setup_mount_effect(state);
    setup_layout_effect(state, viewport.0);
    on_window_scroll(move |offset| state.maybe_update(|s| s.on_scroll(offset)));
    on_escape_key(move || state.maybe_update(|s| s.close_menu()));

    let mounted = Memo::new(move |_| state.with(|s| s.theme_toggle_visible()));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open()));
    let is_mobile = Memo::new(move |_| viewport.layout().is_mobile());
    let variant = Memo::new(move |_| state.with(|s| s.header_variant()));

    let header_class = move || match variant.get() {
        HeaderVariant::Solid => css::header.to_string(),
        HeaderVariant::Elevated => format!("{} {}", css::header, css::headerElevated),
    };
    let variant_name = move || match variant.get() {
        HeaderVariant::Solid => "solid",
        HeaderVariant::Elevated => "elevated",
    };

    let on_toggle_theme = Callback::new(move |_: ()| {
        if state.with_untracked(|s| s.mounted()) {
            theme.toggle();
        }
    });
    let on_toggle_menu = Callback::new(move |_: ()| state.update(|s| s.toggle_menu()));
    let on_close_menu = Callback::new(move |_: ()| state.update(|s| s.select_link()));

    view! {
        <header class=header_class data-variant=variant_name>
            <div class=css::inner>
                <Brand />

                <Show when=move || !is_mobile.get()>
                    <nav class=css::links aria-label="Primary">
                        <NavLinks />
                    </nav>
                </Show>

                <div class=css::controls>
                    // Theme-dependent markup waits for the first render pass
                    <Show when=move || mounted.get()>
                        <ThemeToggle theme=theme on_toggle=on_toggle_theme />
                    </Show>

                    <Show
                        when=move || is_mobile.get()
                        fallback=|| view! { <AuthActions size=ActionSize::Small /> }
                    >
                        <MenuTrigger open=menu_open on_toggle=on_toggle_menu />
                    </Show>
                </div>
            </div>
        </header>

        <Show when=move || is_mobile.get() && menu_open.get()>
            <MobilePanel on_close=on_close_menu />
        </Show>
    }
}

// ============================================================================
// Subcomponents
// ============================================================================

/// Brand mark and product name, linking to the root path.
#[component]
fn Brand() -> impl IntoView {
    view! {
        <a href="/" class=css::brand>
            <span class=css::brandMark>{BRAND_MARK}</span>
            <span class=css::brandName>{APP_NAME}</span>
        </a>
    }
}

/// The fixed link list. Shared by the inline bar and the panel so both
/// always render the same links in the same order.
#[component]
fn NavLinks(
    #[prop(optional)] on_select: Option<Callback<()>>,
    #[prop(optional)] stacked: bool,
) -> impl IntoView {
    let class = if stacked {
        format!("{} {}", css::link, css::linkStacked)
    } else {
        css::link.to_string()
    };

    NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class=class.clone()
                    data-nav-link=link.href
                    on:click=move |_| {
                        if let Some(cb) = on_select {
                            cb.run(());
                        }
                    }
                >
                    {link.label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}

/// Log in / Sign up.
#[component]
fn AuthActions(
    size: ActionSize,
    #[prop(optional)] block: bool,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    AUTH_ACTIONS
        .iter()
        .map(|action| match on_select {
            Some(cb) => view! {
                <ActionLink action=*action size=size block=block on_select=cb />
            }
            .into_any(),
            None => view! { <ActionLink action=*action size=size block=block /> }.into_any(),
        })
        .collect::<Vec<_>>()
}

/// Sun in dark mode, moon in light mode.
#[component]
fn ThemeToggle(theme: ThemeContext, on_toggle: Callback<()>) -> impl IntoView {
    let title = move || {
        if theme.theme.get().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <button
            class=css::iconButton
            aria-label="Toggle theme"
            title=title
            data-theme-toggle=move || theme.theme.get().as_str()
            on:click=move |_| on_toggle.run(())
        >
            {move || match theme.theme.get().is_dark() {
                true => view! { <Icon icon=ic::SUN /> }.into_any(),
                false => view! { <Icon icon=ic::MOON /> }.into_any(),
            }}
        </button>
    }
}

/// Hamburger button; shows a close glyph while the panel is open.
#[component]
fn MenuTrigger(open: Memo<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class=css::iconButton
            aria-label="Open menu"
            aria-expanded=move || open.get().to_string()
            on:click=move |_| on_toggle.run(())
        >
            {move || match open.get() {
                true => view! { <Icon icon=ic::CLOSE /> }.into_any(),
                false => view! { <Icon icon=ic::MENU /> }.into_any(),
            }}
        </button>
    }
}

/// Slide-out panel repeating the links and auth actions.
///
/// Every way out (backdrop, close button, any link or action) runs `on_close`.
#[component]
fn MobilePanel(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())></div>
        <aside class=css::panel role="dialog" aria-modal="true" aria-label="Menu">
            <div class=css::panelHeader>
                <h2 class=css::panelTitle>"Menu"</h2>
                <button
                    class=css::iconButton
                    aria-label="Close menu"
                    on:click=move |_| on_close.run(())
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>

            <nav class=css::panelLinks aria-label="Mobile">
                <NavLinks on_select=on_close stacked=true />
            </nav>

            <div class=css::panelActions>
                <AuthActions size=ActionSize::Regular block=true on_select=on_close />
            </div>
        </aside>
    }
}
