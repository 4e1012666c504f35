//! Item Type Card Component

use leptos::prelude::*;

/// Clickable card with an item type's icon, name and an action hint.
/// Types without an icon get a "?" placeholder.
#[component]
pub fn ItemTypeCard(
    #[prop(into)] name: String,
    #[prop(optional_no_strip)] icon_url: Option<String>,
    #[prop(into)] description: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="type-card" on:click=move |_| on_click.run(())>
            <div class="type-card-icon">
                {match icon_url {
                    Some(url) => view! { <img src=url /> }.into_any(),
                    None => view! { <span class="type-card-placeholder">"?"</span> }.into_any(),
                }}
            </div>
            <div class="type-card-title">{name}</div>
            <div class="type-card-descr">{description}</div>
        </div>
    }
}
