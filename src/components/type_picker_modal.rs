//! Type Picker Modal
//!
//! Modal grid of item-type cards; picking one hands the slug to the caller.

use leptos::prelude::*;

use crate::components::ItemTypeCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TypePickerModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    /// Noun for the card hint, e.g. "activity" -> "Add a new Book activity"
    #[prop(into)] action: String,
    #[prop(into)] on_pick: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || open.get()>
            <div class="modal-mask" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>{title.clone()}</h3>
                    <div class="type-card-grid">
                        {
                            let action = action.clone();
                            move || {
                                let action = action.clone();
                                store
                                    .item_types()
                                    .get()
                                    .into_iter()
                                    .map(|item_type| {
                                        let slug = item_type.slug.clone();
                                        let description =
                                            format!("Add a new {} {}", item_type.name, action);
                                        view! {
                                            <ItemTypeCard
                                                name=item_type.name.clone()
                                                icon_url=item_type.icon_url.clone()
                                                description=description
                                                on_click=move |_| on_pick.run(slug.clone())
                                            />
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </div>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                </div>
            </div>
        </Show>
    }
}
