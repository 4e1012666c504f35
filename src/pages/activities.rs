//! Activities Page
//!
//! Searchable, filterable list of activity records.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::fuzzy_match;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::Spinner;
use crate::context::{use_app_context, Page};
use crate::format::{capitalize_words, format_datetime, format_rating};
use crate::models::ActivitySummary;
use crate::store::{store_rating_max, store_use_24_hr_time, use_app_store, AppStateStoreFields};

/// Completed/pending cascader choices
#[derive(Clone, Copy, PartialEq, Default)]
struct StatusFilter {
    finished_only: bool,
    pending_only: bool,
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (activities, set_activities) = signal(Vec::<ActivitySummary>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (type_filter, set_type_filter) = signal(String::new());
    let (status, set_status) = signal(StatusFilter::default());

    // Load activities whenever the resource is invalidated
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.activities.track();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::list_activities().await {
                    Ok(list) => {
                        if guard.still_valid() {
                            set_activities.set(list);
                            set_loading.set(false);
                        }
                    }
                    Err(err) => {
                        ctx.handle_error("load activities", &err);
                        set_loading.set(false);
                    }
                }
            });
        });
    }

    let filtered = move || {
        let query = search.get();
        let type_slug = type_filter.get();
        let status = status.get();
        activities
            .get()
            .into_iter()
            .filter(|a| type_slug.is_empty() || a.item_type == type_slug)
            .filter(|a| !status.finished_only || a.finished)
            .filter(|a| !status.pending_only || a.pending)
            .filter(|a| query.is_empty() || fuzzy_match(&query, &a.item_name))
            .collect::<Vec<_>>()
    };

    let goto_detail = {
        let ctx = ctx.clone();
        move |token: String| ctx.goto(Page::ActivityDetail(token))
    };
    let open_add_modal = {
        let ctx = ctx.clone();
        move |_| ctx.add_activity_open.set(true)
    };

    let time_range = move |activity: &ActivitySummary| {
        let use_24 = store_use_24_hr_time(&store);
        let start = activity
            .start_time
            .map(|t| format_datetime(&t, use_24))
            .unwrap_or_else(|| "[No start time]".to_string());
        let end = activity
            .end_time
            .map(|t| format_datetime(&t, use_24))
            .unwrap_or_else(|| "[No end time]".to_string());
        format!("{} - {}", start, end)
    };

    view! {
        <div class="page activities-page">
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder="Search activities..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_search.set(input.value());
                    }
                />
                <select on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_type_filter.set(select.value());
                }>
                    <option value="">"All types"</option>
                    {move || store.item_types().get().into_iter().map(|t| view! {
                        <option value=t.slug.clone()>{t.name.clone()}</option>
                    }).collect_view()}
                </select>
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || status.get().finished_only
                        on:change=move |_| set_status.update(|s| s.finished_only = !s.finished_only)
                    />
                    "Completed"
                </label>
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || status.get().pending_only
                        on:change=move |_| set_status.update(|s| s.pending_only = !s.pending_only)
                    />
                    "Pending"
                </label>
                <button class="primary-btn" on:click=open_add_modal>"Add"</button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="list">
                    {
                        let goto_detail = goto_detail.clone();
                        move || {
                        let goto_detail = goto_detail.clone();
                        filtered().into_iter().map(|activity| {
                            let goto_detail = goto_detail.clone();
                            let token = activity.token.clone();
                            let range = time_range(&activity);
                            view! {
                                <div class="list-row" on:click=move |_| goto_detail(token.clone())>
                                    <div class="list-row-avatar">
                                        {match activity.icon_url.clone() {
                                            Some(url) => view! { <img src=url /> }.into_any(),
                                            None => view! { <span>"?"</span> }.into_any(),
                                        }}
                                        <span class="list-row-type">{capitalize_words(&activity.item_type)}</span>
                                    </div>
                                    <div class="list-row-main">
                                        <div class="list-row-title">{activity.item_name.clone()}</div>
                                        <div class="list-row-descr">
                                            {activity.finished.then(|| view! {
                                                <span class="tag-completed">"Completed"</span>
                                            })}
                                            <span>{range}</span>
                                        </div>
                                    </div>
                                    <div class="list-row-rating">
                                        {format_rating(activity.rating, store_rating_max(&store))} " ★"
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
