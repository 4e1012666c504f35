//! DateTime Input Component

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::format::{datetime_local_value, parse_datetime_local};

/// Wrapper around `<input type="datetime-local">` speaking chrono
#[component]
pub fn DateTimeInput(
    #[prop(into)] value: Signal<Option<DateTime<Utc>>>,
    #[prop(into)] on_change: Callback<Option<DateTime<Utc>>>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="datetime-local"
            disabled=disabled
            prop:value=move || {
                value
                    .get()
                    .map(|dt| datetime_local_value(&dt))
                    .unwrap_or_default()
            }
            on:change=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                on_change.run(parse_datetime_local(&input.value()));
            }
        />
    }
}
