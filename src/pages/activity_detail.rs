//! Activity Detail Page
//!
//! One activity record: a read-only view of the item it is against, plus
//! editable status, time range, rating and notes. Every edit saves
//! immediately.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::{Schema, SchemaForm};
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DateTimeInput, DeleteConfirmButton, RatingInput, SavingAlert, Spinner};
use crate::context::{use_app_context, Page};
use crate::models::{ActivityDetail, ActivityPatch};
use crate::query::write_through;
use crate::store::{store_rating_max, use_app_store};

#[component]
pub fn ActivityDetailPage(token: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let token = StoredValue::new(token);

    let (activity, set_activity) = signal(None::<ActivityDetail>);
    let (item_info, set_item_info) = signal(serde_json::Map::new());
    let (schema, set_schema) = signal(Schema::default());
    let (saving, set_saving) = signal(false);

    // Load the activity when the token changes or activities are invalidated
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.activities.track();
            let token = token.get_value();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_activity(&token).await {
                    Ok(detail) => {
                        if guard.still_valid() {
                            set_activity.set(Some(detail));
                        }
                    }
                    Err(err) => ctx.handle_error("load activity", &err),
                }
            });
        });
    }

    // The item's info and schema, shown read-only above the activity fields
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.item_types.track();
            let Some(current) = activity.get() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_item(&current.item).await {
                    Ok(item) => {
                        if guard.still_valid() {
                            set_item_info.set(item.info);
                        }
                    }
                    Err(err) => ctx.handle_error("load item", &err),
                }
                match api::get_item_type(&current.item_type).await {
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

    let save_patch = {
        let ctx = ctx.clone();
        move |patch: ActivityPatch| {
            let ctx = ctx.clone();
            let token = token.get_value();
            spawn_local(async move {
                set_saving.set(true);
                let result = write_through(
                    &[&ctx.queries.activities],
                    api::update_activity(&token, &patch),
                )
                .await;
                if let Err(err) = result {
                    ctx.handle_error("save activity", &err);
                }
                set_saving.set(false);
            });
        }
    };

    let delete_activity = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            let token = token.get_value();
            spawn_local(async move {
                let result =
                    write_through(&[&ctx.queries.activities], api::delete_activity(&token)).await;
                match result {
                    Ok(()) => ctx.goto(Page::Activities),
                    Err(err) => ctx.handle_error("delete activity", &err),
                }
            });
        }
    };

    let goto_item = {
        let ctx = ctx.clone();
        move |item_token: String| ctx.goto(Page::ItemDetail(item_token))
    };

    view! {
        <div class="page activity-detail-page">
            {move || match activity.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(current) => {
                    let save_patch = save_patch.clone();
                    let save_pending = save_patch.clone();
                    let save_finished = save_patch.clone();
                    let save_start = save_patch.clone();
                    let save_end = save_patch.clone();
                    let save_start_now = save_patch.clone();
                    let save_end_now = save_patch.clone();
                    let save_rating = save_patch.clone();
                    let save_notes = save_patch.clone();
                    let delete_activity = delete_activity.clone();
                    let goto_item = goto_item.clone();
                    let item_token = current.item.clone();
                    let pending_now = current.pending;
                    let finished_now = current.finished;
                    let start_time = current.start_time;
                    let end_time = current.end_time;
                    let stored_rating = current.rating;
                    let notes_value = current.notes.clone();

                    view! {
                        <h3>
                            "Activity for "
                            <button class="link-btn" on:click=move |_| goto_item(item_token.clone())>
                                {if current.item_name.is_empty() {
                                    "[No name schema]".to_string()
                                } else {
                                    current.item_name.clone()
                                }}
                            </button>
                        </h3>
                        <SavingAlert saving=saving />

                        <h4>"Item information"</h4>
                        <SchemaForm
                            schema=schema
                            values=item_info
                            on_change=|_| {}
                            disabled=true
                        />

                        <h4>"Activity information"</h4>
                        <div class="checkbox-group">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=pending_now
                                    on:change=move |_| save_pending(ActivityPatch {
                                        pending: Some(!pending_now),
                                        ..Default::default()
                                    })
                                />
                                "Pending"
                            </label>
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=finished_now
                                    on:change=move |_| save_finished(ActivityPatch {
                                        finished: Some(!finished_now),
                                        ..Default::default()
                                    })
                                />
                                "Finishes item"
                            </label>
                        </div>

                        <div class="labeled-row">
                            <label>"Start"</label>
                            <DateTimeInput
                                value=Signal::derive(move || start_time)
                                on_change=move |new_start| {
                                    if let Some(start) = new_start {
                                        save_start(ActivityPatch {
                                            start_time: Some(start),
                                            ..Default::default()
                                        });
                                    }
                                }
                            />
                            <button class="text-btn" on:click=move |_| save_start_now(ActivityPatch {
                                start_time: Some(Utc::now()),
                                ..Default::default()
                            })>
                                "Set start to now"
                            </button>
                        </div>
                        <div class="labeled-row">
                            <label>"End"</label>
                            <DateTimeInput
                                value=Signal::derive(move || end_time)
                                on_change=move |new_end| {
                                    if let Some(end) = new_end {
                                        save_end(ActivityPatch {
                                            end_time: Some(end),
                                            ..Default::default()
                                        });
                                    }
                                }
                            />
                            <button class="text-btn" on:click=move |_| save_end_now(ActivityPatch {
                                end_time: Some(Utc::now()),
                                ..Default::default()
                            })>
                                "Set end to now"
                            </button>
                        </div>

                        <div class="labeled-row">
                            <label>"Rating"</label>
                            <RatingInput
                                rating=Signal::derive(move || stored_rating)
                                rating_max=Signal::derive(move || store_rating_max(&store))
                                on_change=move |stored| {
                                    if let Some(value) = stored {
                                        save_rating(ActivityPatch {
                                            rating: Some(value),
                                            ..Default::default()
                                        });
                                    }
                                }
                            />
                        </div>

                        <div class="labeled-row">
                            <label>"Notes"</label>
                            <textarea
                                prop:value=notes_value
                                on:blur=move |ev| {
                                    let target = ev.target().unwrap();
                                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    save_notes(ActivityPatch {
                                        notes: Some(area.value()),
                                        ..Default::default()
                                    });
                                }
                            ></textarea>
                        </div>

                        <DeleteConfirmButton label="Delete Activity" on_confirm=delete_activity />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
