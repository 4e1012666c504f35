//! Item Details Page
//!
//! Schema-driven editor for one item: info fields, rating and notes, each
//! autosaved. Field edits are debounced so a burst of keystrokes becomes
//! one PATCH.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::{Schema, SchemaForm};
use std::collections::HashMap;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DeleteConfirmButton, RatingInput, SavingAlert, Spinner};
use crate::context::{use_app_context, Page};
use crate::models::{InfoMap, ItemPatch};
use crate::query::write_through;
use crate::store::{store_rating_max, use_app_store};

const SAVE_DEBOUNCE_MS: u32 = 600;

#[component]
pub fn ItemDetailsPage(token: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let token = StoredValue::new(token);

    let (item_name, set_item_name) = signal(String::new());
    let (parent_token, set_parent_token) = signal(None::<String>);
    let (type_slug, set_type_slug) = signal(None::<String>);
    let (schema, set_schema) = signal(Schema::default());
    let (suggestions, set_suggestions) = signal(HashMap::<String, Vec<String>>::new());
    let (info, set_info) = signal(InfoMap::new());
    let (rating, set_rating) = signal(None::<f64>);
    let (notes, set_notes) = signal(String::new());
    let (loaded, set_loaded) = signal(false);
    let (saving, set_saving) = signal(false);

    // Form fields are (re)initialized only when this flips to a new token,
    // not on every refetch, so saves don't clobber in-progress edits
    let (initialized_for, set_initialized_for) = signal(None::<String>);

    // Load the item when the token changes or items are invalidated
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.items.track();
            let token = token.get_value();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_item(&token).await {
                    Ok(item) => {
                        if !guard.still_valid() {
                            return;
                        }
                        set_item_name.set(item.name.clone());
                        set_parent_token.set(item.parent_token.clone());
                        set_type_slug.set(Some(item.item_type.clone()));
                        if initialized_for.get_untracked().as_deref() != Some(token.as_str()) {
                            set_info.set(item.info.clone());
                            set_rating.set(item.rating);
                            set_notes.set(item.notes.clone());
                            set_initialized_for.set(Some(token.clone()));
                        }
                        set_loaded.set(true);
                    }
                    Err(err) => ctx.handle_error("load item", &err),
                }
            });
        });
    }

    // Load the item type's schema (re-fetched when schemas change)
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.item_types.track();
            let Some(slug) = type_slug.get() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_item_type(&slug).await {
                    Ok(detail) => {
                        if guard.still_valid() {
                            set_schema.set(detail.item_schema);
                        }
                    }
                    Err(err) => ctx.handle_error("load item type", &err),
                }
            });
        });
    }

    // Load autocomplete suggestions for the string fields
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.autocomplete.track();
            let Some(slug) = type_slug.get() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::autocomplete_suggestions(&slug).await {
                    Ok(choices) => {
                        if guard.still_valid() {
                            set_suggestions.set(choices);
                        }
                    }
                    Err(err) => ctx.handle_error("load suggestions", &err),
                }
            });
        });
    }

    let save_patch = {
        let ctx = ctx.clone();
        move |patch: ItemPatch| {
            let ctx = ctx.clone();
            let token = token.get_value();
            spawn_local(async move {
                set_saving.set(true);
                let result =
                    write_through(&[&ctx.queries.items], api::update_item(&token, &patch)).await;
                if let Err(err) = result {
                    ctx.handle_error("save item", &err);
                }
                set_saving.set(false);
            });
        }
    };

    // Debounced info autosave: only the last edit in a burst is sent
    let edit_serial = StoredValue::new(0u32);
    let on_info_change = {
        let save_patch = save_patch.clone();
        move |new_info: InfoMap| {
            set_info.set(new_info.clone());
            let serial = edit_serial.get_value().wrapping_add(1);
            edit_serial.set_value(serial);
            let save_patch = save_patch.clone();
            spawn_local(async move {
                TimeoutFuture::new(SAVE_DEBOUNCE_MS).await;
                if edit_serial.get_value() != serial {
                    return;
                }
                save_patch(ItemPatch {
                    info: Some(new_info),
                    ..Default::default()
                });
            });
        }
    };

    let on_rating_change = {
        let save_patch = save_patch.clone();
        move |stored: Option<f64>| {
            set_rating.set(stored);
            if let Some(value) = stored {
                save_patch(ItemPatch {
                    rating: Some(value),
                    ..Default::default()
                });
            }
        }
    };

    let save_notes = {
        let save_patch = save_patch.clone();
        move || {
            save_patch(ItemPatch {
                notes: Some(notes.get_untracked()),
                ..Default::default()
            });
        }
    };

    let delete_item = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            let token = token.get_value();
            spawn_local(async move {
                let result = write_through(
                    &[&ctx.queries.items, &ctx.queries.activities],
                    api::delete_item(&token),
                )
                .await;
                match result {
                    Ok(()) => ctx.goto(Page::Items),
                    Err(err) => ctx.handle_error("delete item", &err),
                }
            });
        }
    };

    let goto_parent = {
        let ctx = ctx.clone();
        move |_| {
            if let Some(parent) = parent_token.get_untracked() {
                ctx.goto(Page::ItemDetail(parent));
            }
        }
    };

    view! {
        <div class="page item-details-page">
            <Show when=move || loaded.get() fallback=|| view! { <Spinner /> }>
                <h3>{move || {
                    let name = item_name.get();
                    if name.is_empty() { "[No name schema]".to_string() } else { name }
                }}</h3>
                <SavingAlert saving=saving />

                <SchemaForm
                    schema=schema
                    values=info
                    suggestions=suggestions
                    on_change=on_info_change.clone()
                />

                <div class="labeled-row">
                    <label>"Rating"</label>
                    <RatingInput
                        rating=rating
                        rating_max=Signal::derive(move || store_rating_max(&store))
                        on_change=on_rating_change.clone()
                    />
                </div>

                <div class="labeled-row">
                    <label>"Notes"</label>
                    <textarea
                        prop:value=move || notes.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_notes.set(area.value());
                        }
                        on:blur={
                            let save_notes = save_notes.clone();
                            move |_| save_notes()
                        }
                    ></textarea>
                </div>

                {
                    let goto_parent = goto_parent.clone();
                    move || parent_token.get().map(|_| {
                    let goto_parent = goto_parent.clone();
                    view! {
                        <div class="labeled-row">
                            <label>"Parent"</label>
                            <button class="link-btn" on:click=move |_| goto_parent(())>
                                "View parent item"
                            </button>
                        </div>
                    }
                })}

                <DeleteConfirmButton label="Delete Item" on_confirm=delete_item.clone() />
            </Show>
        </div>
    }
}
