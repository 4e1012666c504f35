//! Add Item Page
//!
//! Create form for a new item of a given type, straight from its schema.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::{Schema, SchemaForm};
use std::collections::HashMap;

use crate::api;
use crate::components::Spinner;
use crate::context::{use_app_context, Page};
use crate::models::{InfoMap, NewItem};
use crate::query::write_through;

#[component]
pub fn AddItemPage(slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let slug = StoredValue::new(slug);

    let (type_name, set_type_name) = signal(String::new());
    let (schema, set_schema) = signal(None::<Schema>);
    let (suggestions, set_suggestions) = signal(HashMap::<String, Vec<String>>::new());
    let (info, set_info) = signal(InfoMap::new());
    let (submitting, set_submitting) = signal(false);

    // Load the type's schema
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.item_types.track();
            let slug = slug.get_value();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_item_type(&slug).await {
                    Ok(detail) => {
                        if guard.still_valid() {
                            set_type_name.set(detail.name.clone());
                            set_schema.set(Some(detail.item_schema));
                        }
                    }
                    Err(err) => ctx.handle_error("load item type", &err),
                }
            });
        });
    }

    // Load suggestions from historical values
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.autocomplete.track();
            let slug = slug.get_value();
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

    let can_submit = move || {
        schema
            .get()
            .map(|s| s.can_submit(&info.get()))
            .unwrap_or(false)
            && !submitting.get()
    };

    let submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if !can_submit() {
                return;
            }
            set_submitting.set(true);
            let new_item = NewItem {
                item_type: slug.get_value(),
                info: info.get_untracked(),
                set_as_parent_to: None,
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = write_through(
                    &[&ctx.queries.items, &ctx.queries.autocomplete],
                    api::create_item(&new_item),
                )
                .await;
                match result {
                    Ok(created) => ctx.goto(Page::ItemDetail(created.token)),
                    Err(err) => ctx.handle_error("create item", &err),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <div class="page add-item-page">
            {move || match schema.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(_) => {
                    let submit = submit.clone();
                    view! {
                        <h3>{move || format!("New {}", type_name.get())}</h3>
                        <form class="add-item-form" on:submit=submit>
                            <SchemaForm
                                schema=Signal::derive(move || schema.get().unwrap_or_default())
                                values=info
                                suggestions=suggestions
                                on_change=move |merged: InfoMap| set_info.set(merged)
                            />
                            <button type="submit" class="primary-btn" disabled=move || !can_submit()>
                                {move || if submitting.get() { "Creating..." } else { "Create" }}
                            </button>
                        </form>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
