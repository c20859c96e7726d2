//! Contact form with inline submission status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Without WASM the form is a plain HTML post to the collector. Once hydrated
//! the submit handler takes over: it suppresses navigation, posts the fields
//! in the background and reports the outcome in `#form-status`. A second
//! submission is blocked only by the disabled submit button.

use leptos::prelude::*;

use crate::state::contact::ContactState;

#[component]
pub fn ContactForm(action: String) -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    #[cfg(feature = "hydrate")]
    let endpoint = action.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(ContactState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let payload = state.with_untracked(|s| s.fields.to_pairs());
            let endpoint = endpoint.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::contact::FetchTransport;
                let outcome = crate::net::contact::submit_contact(&transport, &endpoint, &payload).await;
                log::debug!("contact submission finished: {outcome:?}");
                state.update(|s| s.finish_submit(&outcome));
            });
        }
    };

    let status_class = move || state.with(|s| s.status.as_ref().map_or("", |m| m.kind.css_class()));
    let status_display = move || if state.with(|s| s.status.is_some()) { "block" } else { "none" };
    let status_text = move || state.with(|s| s.status.as_ref().map(|m| m.text.clone()).unwrap_or_default());

    view! {
        <form id="contact-form" class="contact-form" action=action method="post" on:submit=on_submit>
            <label for="contact-name">"Name"</label>
            <input
                id="contact-name"
                type="text"
                name="name"
                required
                prop:value=move || state.with(|s| s.fields.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.fields.name = value);
                }
            />
            <label for="contact-email">"Email"</label>
            <input
                id="contact-email"
                type="email"
                name="email"
                required
                prop:value=move || state.with(|s| s.fields.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.fields.email = value);
                }
            />
            <label for="contact-message">"Message"</label>
            <textarea
                id="contact-message"
                name="message"
                rows="5"
                required
                prop:value=move || state.with(|s| s.fields.message.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.fields.message = value);
                }
            ></textarea>
            <button type="submit" class="btn" disabled=move || state.with(|s| s.submitting)>
                "Send Message"
            </button>
            <p id="form-status" class=status_class style:display=status_display role="status">
                {status_text}
            </p>
        </form>
    }
}
