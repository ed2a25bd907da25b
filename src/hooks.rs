//! Window listeners tied to the current reactive owner.
//!
//! Each hook registers its listener immediately and removes it when the
//! calling owner is cleaned up, so a disposed component never sees events.

use leptos::ev;
use leptos::prelude::*;

use crate::utils::dom;

/// Call `on_offset` with the vertical scroll offset on every window scroll.
pub fn on_window_scroll(on_offset: impl Fn(f64) + 'static) {
    let handle = window_event_listener(ev::scroll, move |_| {
        on_offset(dom::scroll_offset());
    });
    on_cleanup(move || handle.remove());
}

/// Call `on_escape` whenever Escape is pressed.
pub fn on_escape_key(on_escape: impl Fn() + 'static) {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_escape();
        }
    });
    on_cleanup(move || handle.remove());
}
