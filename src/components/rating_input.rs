//! Rating Input Component
//!
//! Numeric rating control. Storage is normalized to [0, 1]; the user sees
//! and edits values on their configured 0..ratingMax scale.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::format::{normalize_rating, scale_rating};

#[component]
pub fn RatingInput(
    /// Stored rating in [0, 1]
    #[prop(into)] rating: Signal<Option<f64>>,
    #[prop(into)] rating_max: Signal<f64>,
    /// Receives the new stored ([0, 1]) rating, None when cleared
    #[prop(into)] on_change: Callback<Option<f64>>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="number"
            class="rating-input"
            min="0"
            step="0.01"
            disabled=disabled
            max=move || rating_max.get().to_string()
            prop:value=move || {
                rating
                    .get()
                    .map(|r| format!("{:.2}", scale_rating(r, rating_max.get())))
                    .unwrap_or_default()
            }
            on:change=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                let max = rating_max.get_untracked();
                let stored = input
                    .value()
                    .parse::<f64>()
                    .ok()
                    .map(|entered| normalize_rating(entered.clamp(0.0, max), max));
                on_change.run(stored);
            }
        />
    }
}
