//! Home Page
//!
//! Dashboard of modules, each toggleable from the profile's home screen
//! configuration.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Page};
use crate::format::format_rating;
use crate::models::{ActivitySummary, ItemSummary, UserSettings};
use crate::store::{store_rating_max, store_settings, use_app_store};

/// (module id, label, description) for every available home module
pub const HOME_SCREEN_MODULES: &[(&str, &str, &str)] = &[
    (
        "recently_added",
        "Recently Added",
        "The latest items added to the catalog",
    ),
    (
        "unfinished_activities",
        "Unfinished Activities",
        "Activities without a finish recorded",
    ),
];

pub const DEFAULT_HOME_MODULES: &[&str] = &["recently_added", "unfinished_activities"];

const MODULE_ROWS: usize = 8;

/// Module ids active for these settings, falling back to the defaults
pub fn active_modules(settings: &UserSettings) -> Vec<String> {
    settings
        .home_page_settings
        .active_modules
        .clone()
        .unwrap_or_else(|| DEFAULT_HOME_MODULES.iter().map(|m| m.to_string()).collect())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (items, set_items) = signal(Vec::<ItemSummary>::new());
    let (activities, set_activities) = signal(Vec::<ActivitySummary>::new());

    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.items.track();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::list_items().await {
                    Ok(list) => {
                        if guard.still_valid() {
                            set_items.set(list);
                        }
                    }
                    Err(err) => ctx.handle_error("load items", &err),
                }
            });
        });
    }
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
                        }
                    }
                    Err(err) => ctx.handle_error("load activities", &err),
                }
            });
        });
    }

    let is_active = move |module: &str| active_modules(&store_settings(&store)).iter().any(|m| m == module);

    let goto_item = {
        let ctx = ctx.clone();
        move |token: String| ctx.goto(Page::ItemDetail(token))
    };
    let goto_activity = {
        let ctx = ctx.clone();
        move |token: String| ctx.goto(Page::ActivityDetail(token))
    };

    view! {
        <div class="page home-page">
            <Show when=move || is_active("recently_added")>
                <h2>"Recently Added"</h2>
                <div class="home-module">
                    {
                        let goto_item = goto_item.clone();
                        move || {
                        let goto_item = goto_item.clone();
                        items.get().into_iter().take(MODULE_ROWS).map(|item| {
                            let goto_item = goto_item.clone();
                            let token = item.token.clone();
                            view! {
                                <div class="home-row" on:click=move |_| goto_item(token.clone())>
                                    <span>{item.name.clone()}</span>
                                    <span class="home-row-rating">
                                        {format_rating(item.rating, store_rating_max(&store))} " ★"
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || is_active("unfinished_activities")>
                <h2>"Unfinished Activities"</h2>
                <div class="home-module">
                    {
                        let goto_activity = goto_activity.clone();
                        move || {
                        let goto_activity = goto_activity.clone();
                        activities
                            .get()
                            .into_iter()
                            .filter(|a| !a.finished)
                            .take(MODULE_ROWS)
                            .map(|activity| {
                                let goto_activity = goto_activity.clone();
                                let token = activity.token.clone();
                                view! {
                                    <div class="home-row" on:click=move |_| goto_activity(token.clone())>
                                        <span>{activity.item_name.clone()}</span>
                                        {activity.pending.then(|| view! {
                                            <span class="tag-pending">"Pending"</span>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
