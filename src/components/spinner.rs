//! Spinner Component

use leptos::prelude::*;

/// Loading marker shown while a page's data is still in flight
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner">"Loading..."</div> }
}
