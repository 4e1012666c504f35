//! Profile Basics
//!
//! Max rating, quick-menu membership and clock format.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::SavingAlert;
use crate::context::{save_settings, use_app_context};
use crate::store::{store_settings, use_app_store, AppStateStoreFields};

#[component]
pub fn ProfileBasics() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (saving, set_saving) = signal(false);

    let save_rating_max = {
        let ctx = ctx.clone();
        move |value: f64| {
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                save_settings(&ctx, &store, |s| s.rating_max = Some(value)).await;
                set_saving.set(false);
            });
        }
    };

    let toggle_quick_menu = {
        let ctx = ctx.clone();
        move |slug: String| {
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                save_settings(&ctx, &store, |s| {
                    let mut slugs = s.quick_menu_slugs();
                    if slugs.contains(&slug) {
                        slugs.retain(|existing| existing != &slug);
                    } else {
                        slugs.push(slug);
                    }
                    s.item_types_in_quick_menu = Some(slugs);
                })
                .await;
                set_saving.set(false);
            });
        }
    };

    let toggle_clock = {
        let ctx = ctx.clone();
        move |checked: bool| {
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                save_settings(&ctx, &store, |s| s.use_24_hr_time = Some(checked)).await;
                set_saving.set(false);
            });
        }
    };

    view! {
        <div class="profile-section">
            <SavingAlert saving=saving />

            <div class="labeled-row">
                <label>"Max rating"</label>
                <input
                    type="number"
                    min="1"
                    placeholder="5"
                    prop:value=move || store_settings(&store)
                        .rating_max
                        .map(|m| m.to_string())
                        .unwrap_or_default()
                    on:change={
                        let save_rating_max = save_rating_max.clone();
                        move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            if let Ok(value) = input.value().parse::<f64>() {
                                if value > 0.0 {
                                    save_rating_max(value);
                                }
                            }
                        }
                    }
                />
            </div>

            <div class="profile-subsection">
                <div>"Item types in quick menu"</div>
                <div class="quick-menu-toggles">
                    {move || {
                        let toggle_quick_menu = toggle_quick_menu.clone();
                        let selected = store_settings(&store).quick_menu_slugs();
                        store.item_types().get().into_iter().map(|item_type| {
                            let toggle_quick_menu = toggle_quick_menu.clone();
                            let slug = item_type.slug.clone();
                            let is_on = selected.contains(&item_type.slug);
                            view! {
                                <button
                                    class=if is_on { "type-btn active" } else { "type-btn" }
                                    on:click=move |_| toggle_quick_menu(slug.clone())
                                >
                                    {item_type.name.clone()}
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>

            <div class="labeled-row">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || store_settings(&store).use_24_hr_time()
                        on:change={
                            let toggle_clock = toggle_clock.clone();
                            move |_| {
                                let next = !store_settings(&store).use_24_hr_time();
                                toggle_clock(next);
                            }
                        }
                    />
                    "Use 24 hr time format"
                </label>
            </div>
        </div>
    }
}
