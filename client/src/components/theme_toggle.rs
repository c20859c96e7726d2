//! Light/dark switch in the page header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the checkbox unchecked. The head script in `shell` has
//! already applied any saved `data-theme` by first paint, and the switch is
//! styled from that attribute. After hydration the preference is restored once
//! more so the checkbox and the signal agree with it.

use leptos::prelude::*;

use crate::util::storage::LocalStorage;
use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = RwSignal::new(Theme::default());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        current.set(theme::restore(&LocalStorage));
    });

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let checked = event_target_checked(&ev);
        current.set(theme::toggle(checked, &LocalStorage));
    };

    view! {
        <label class="theme-switch" for="theme-toggle" title="Toggle dark mode">
            <input
                type="checkbox"
                id="theme-toggle"
                prop:checked=move || current.get().is_dark()
                on:click=on_click
            />
            <span class="theme-switch__slider"></span>
        </label>
    }
}
