//! Saving Alert Component
//!
//! Fixed-height slot showing a "Saving..." banner while a mutation is in
//! flight, so the layout does not jump.

use leptos::prelude::*;

#[component]
pub fn SavingAlert(#[prop(into)] saving: Signal<bool>) -> impl IntoView {
    view! {
        <div class="saving-alert-slot">
            {move || saving.get().then(|| view! {
                <div class="alert alert-success">"Saving..."</div>
            })}
        </div>
    }
}
