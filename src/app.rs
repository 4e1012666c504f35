//! Shelfmark App Shell
//!
//! Auth gate, header navigation, quick-add menu and signal-driven page
//! switching.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TypePickerModal;
use crate::context::{use_app_context, AppContext, Page, ProfileTab};
use crate::pages::{
    ActivitiesPage, ActivityDetailPage, AddActivityPage, AddItemPage, HomePage, ItemDetailsPage,
    ItemsPage, LoginPage, ProfilePage,
};
use crate::store::{store_quick_menu_types, use_app_store, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    let store: AppStore = reactive_stores::Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx.clone());
    provide_context(store);

    // Check auth on startup and whenever the auth key is invalidated
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.auth.track();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::user_is_logged_in().await {
                    Ok(authed) => {
                        if guard.still_valid() {
                            ctx.authenticated.set(Some(authed));
                        }
                    }
                    Err(err) => {
                        api::log_error("auth check", &err);
                        ctx.authenticated.set(Some(false));
                    }
                }
            });
        });
    }

    // Session-wide resources, loaded once logged in
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.item_types.track();
            if ctx.authenticated.get() != Some(true) {
                return;
            }
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::list_item_types().await {
                    Ok(types) => {
                        if guard.still_valid() {
                            store.item_types().set(types);
                        }
                    }
                    Err(err) => ctx.handle_error("load item types", &err),
                }
            });
        });
    }
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.settings.track();
            if ctx.authenticated.get() != Some(true) {
                return;
            }
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_settings().await {
                    Ok(settings) => {
                        if guard.still_valid() {
                            store.user_settings().set(Some(settings));
                        }
                    }
                    Err(err) => ctx.handle_error("load settings", &err),
                }
            });
        });
    }

    let authenticated = ctx.authenticated;
    view! {
        {move || match authenticated.get() {
            None => view! { <div class="spinner">"Loading..."</div> }.into_any(),
            Some(false) => view! { <LoginPage /> }.into_any(),
            Some(true) => view! { <LoggedInShell /> }.into_any(),
        }}
    }
}

const NAV_ITEMS: &[(&str, &str)] = &[("home", "Home"), ("items", "Items"), ("activities", "Activities")];

/// Nav key for highlighting the active header button
fn nav_key(page: &Page) -> &'static str {
    match page {
        Page::Home => "home",
        Page::Items | Page::ItemDetail(_) | Page::AddItem(_) => "items",
        Page::Activities | Page::ActivityDetail(_) | Page::AddActivity(_) => "activities",
        Page::Profile(_) => "profile",
    }
}

#[component]
fn LoggedInShell() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let logout = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            spawn_local(async move {
                if let Err(err) = api::logout().await {
                    api::log_error("logout", &err);
                }
                ctx.queries.auth.invalidate();
            });
        }
    };

    let nav_to = {
        let ctx = ctx.clone();
        move |key: &str| {
            let page = match key {
                "items" => Page::Items,
                "activities" => Page::Activities,
                _ => Page::Home,
            };
            ctx.goto(page);
        }
    };

    let pick_activity_type = {
        let ctx = ctx.clone();
        move |slug: String| {
            ctx.add_activity_open.set(false);
            ctx.goto(Page::AddActivity(slug));
        }
    };

    let page = ctx.page;
    let add_activity_open = ctx.add_activity_open;
    let ctx_for_profile = ctx.clone();
    let ctx_for_quick = ctx.clone();
    let ctx_for_other = ctx.clone();
    let ctx_for_close = ctx.clone();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-brand">"Shelfmark"</div>
                <nav class="app-nav">
                    {NAV_ITEMS.iter().map(|(key, label)| {
                        let nav_to = nav_to.clone();
                        view! {
                            <button
                                class=move || if nav_key(&page.get()) == *key { "nav-btn active" } else { "nav-btn" }
                                on:click=move |_| nav_to(key)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <div class="app-user-menu">
                    <button
                        class="nav-btn"
                        on:click=move |_| ctx_for_profile.goto(Page::Profile(ProfileTab::Basics))
                    >
                        "Profile"
                    </button>
                    <button class="nav-btn" on:click=logout.clone()>"Logout"</button>
                </div>
            </header>

            <main class="app-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Items => view! { <ItemsPage /> }.into_any(),
                    Page::ItemDetail(token) => view! { <ItemDetailsPage token=token /> }.into_any(),
                    Page::AddItem(slug) => view! { <AddItemPage slug=slug /> }.into_any(),
                    Page::Activities => view! { <ActivitiesPage /> }.into_any(),
                    Page::ActivityDetail(token) => {
                        view! { <ActivityDetailPage token=token /> }.into_any()
                    }
                    Page::AddActivity(slug) => view! { <AddActivityPage slug=slug /> }.into_any(),
                    Page::Profile(tab) => view! { <ProfilePage tab=tab /> }.into_any(),
                }}
            </main>

            // Quick-add float menu: pinned types plus an "other" catch-all
            <div class="float-menu">
                {move || {
                    let ctx = ctx_for_quick.clone();
                    store_quick_menu_types(&store).into_iter().map(|item_type| {
                        let ctx = ctx.clone();
                        let slug = item_type.slug.clone();
                        let tooltip = format!("Add new {} activity", item_type.name);
                        view! {
                            <button
                                class="float-btn"
                                title=tooltip
                                on:click=move |_| ctx.goto(Page::AddActivity(slug.clone()))
                            >
                                {match item_type.icon_url.clone() {
                                    Some(url) => view! { <img src=url /> }.into_any(),
                                    None => view! { <span>{item_type.name.clone()}</span> }.into_any(),
                                }}
                            </button>
                        }
                    }).collect_view()
                }}
                <button
                    class="float-btn"
                    title="Add new activity"
                    on:click=move |_| ctx_for_other.add_activity_open.set(true)
                >
                    "…"
                </button>
            </div>

            <TypePickerModal
                open=add_activity_open
                title="Add New Activity"
                action="activity"
                on_pick=pick_activity_type
                on_close=move |_| ctx_for_close.add_activity_open.set(false)
            />
        </div>
    }
}
