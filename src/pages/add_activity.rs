//! Add Activity Page
//!
//! Create form for a new activity of a given item type: the type's schema
//! fields identify (or create) the item, the rest describes the activity.
//! Activity defaults from user settings pre-fill status and times.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::{Schema, SchemaForm};
use std::collections::HashMap;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DateTimeInput, RatingInput, Spinner};
use crate::context::{use_app_context, Page};
use crate::models::{InfoMap, NewActivity, NewActivityDetails, NewActivityItem};
use crate::query::write_through;
use crate::store::{store_rating_max, use_app_store, AppStateStoreFields};

#[component]
pub fn AddActivityPage(slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let slug = StoredValue::new(slug);

    let (type_name, set_type_name) = signal(String::new());
    let (schema, set_schema) = signal(None::<Schema>);
    let (suggestions, set_suggestions) = signal(HashMap::<String, Vec<String>>::new());
    let (info, set_info) = signal(InfoMap::new());
    let (pending, set_pending) = signal(false);
    let (finished, set_finished) = signal(false);
    let (start_time, set_start_time) = signal(None::<DateTime<Utc>>);
    let (end_time, set_end_time) = signal(None::<DateTime<Utc>>);
    let (rating, set_rating) = signal(None::<f64>);
    let (notes, set_notes) = signal(String::new());
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

    // Apply activity defaults once settings are available
    let (defaults_applied, set_defaults_applied) = signal(false);
    Effect::new(move |_| {
        if defaults_applied.get_untracked() {
            return;
        }
        let Some(settings) = store.user_settings().get() else {
            return;
        };
        let defaults = &settings.activity_defaults;
        set_pending.set(defaults.default_pending.unwrap_or(false));
        set_finished.set(defaults.default_finished.unwrap_or(false));
        if defaults.default_start_to_now.unwrap_or(false) {
            set_start_time.set(Some(Utc::now()));
        }
        if defaults.default_end_to_now.unwrap_or(false) {
            set_end_time.set(Some(Utc::now()));
        }
        set_defaults_applied.set(true);
    });

    // Create is gated on the schema's required fields being present
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
            let new_activity = NewActivity {
                item_details: NewActivityItem {
                    item_type: slug.get_value(),
                    info: info.get_untracked(),
                },
                activity_details: NewActivityDetails {
                    start_time: start_time.get_untracked(),
                    // An activity without an end defaults to "just now"
                    end_time: end_time.get_untracked().or_else(|| Some(Utc::now())),
                    finished: finished.get_untracked(),
                    pending: pending.get_untracked(),
                    rating: rating.get_untracked(),
                    notes: notes.get_untracked(),
                    info: InfoMap::new(),
                },
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = write_through(
                    &[
                        &ctx.queries.activities,
                        &ctx.queries.items,
                        &ctx.queries.autocomplete,
                    ],
                    api::create_activity(&new_activity),
                )
                .await;
                match result {
                    Ok(created) => ctx.goto(Page::ActivityDetail(created.token)),
                    Err(err) => ctx.handle_error("create activity", &err),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <div class="page add-activity-page">
            {move || match schema.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(_) => {
                    let submit = submit.clone();
                    view! {
                        <h3>{move || format!("New {} activity", type_name.get())}</h3>
                        <form class="add-activity-form" on:submit=submit>
                            <SchemaForm
                                schema=Signal::derive(move || schema.get().unwrap_or_default())
                                values=info
                                suggestions=suggestions
                                on_change=move |merged: InfoMap| set_info.set(merged)
                            />

                            <div class="checkbox-group">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || pending.get()
                                        on:change=move |_| set_pending.update(|p| *p = !*p)
                                    />
                                    "Pending"
                                </label>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || finished.get()
                                        on:change=move |_| set_finished.update(|f| *f = !*f)
                                    />
                                    "Finishes item"
                                </label>
                            </div>

                            <div class="labeled-row">
                                <label>"Start"</label>
                                <DateTimeInput
                                    value=start_time
                                    on_change=move |dt| set_start_time.set(dt)
                                />
                            </div>
                            <div class="labeled-row">
                                <label>"End"</label>
                                <DateTimeInput
                                    value=end_time
                                    on_change=move |dt| set_end_time.set(dt)
                                />
                            </div>

                            <div class="labeled-row">
                                <label>"Rating"</label>
                                <RatingInput
                                    rating=rating
                                    rating_max=Signal::derive(move || store_rating_max(&store))
                                    on_change=move |stored| set_rating.set(stored)
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
                                ></textarea>
                            </div>

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
