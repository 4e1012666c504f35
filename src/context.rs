//! Application Context
//!
//! Shared state provided via Leptos Context API: which page is showing,
//! auth status, and the query invalidation keys.

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::models::UserSettings;
use crate::query::{write_through, Queries};
use crate::store::AppStore;

/// Which view the shell is showing. View switching is signal-driven;
/// there is no URL routing.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Items,
    ItemDetail(String),
    AddItem(String),
    Activities,
    ActivityDetail(String),
    AddActivity(String),
    Profile(ProfileTab),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProfileTab {
    Basics,
    ActivityDefaults,
    HomeConfig,
    ItemTypes,
}

/// App-wide signals provided via context
#[derive(Clone)]
pub struct AppContext {
    pub queries: Queries,
    pub page: RwSignal<Page>,
    /// None while the initial auth check is in flight
    pub authenticated: RwSignal<Option<bool>>,
    /// Whether the add-activity type picker modal is open
    pub add_activity_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        AppContext {
            queries: Queries::new(),
            page: RwSignal::new(Page::Home),
            authenticated: RwSignal::new(None),
            add_activity_open: RwSignal::new(false),
        }
    }

    pub fn goto(&self, page: Page) {
        self.page.set(page);
    }

    /// Log a failed call; an auth failure drops the session back to the
    /// login view.
    pub fn handle_error(&self, what: &str, err: &ApiError) {
        api::log_error(what, err);
        if err.is_unauthorized() {
            self.authenticated.set(Some(false));
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Merge one change into the current settings and save the whole object.
/// The server replaces the settings wholesale, so merging here is what
/// keeps unrelated keys intact.
pub async fn save_settings(
    ctx: &AppContext,
    store: &AppStore,
    update: impl FnOnce(&mut UserSettings),
) -> bool {
    use crate::store::store_settings;

    let mut settings = store_settings(store);
    update(&mut settings);
    let saved = write_through(&[&ctx.queries.settings], api::update_settings(&settings)).await;
    match saved {
        Ok(_) => true,
        Err(err) => {
            ctx.handle_error("save settings", &err);
            false
        }
    }
}
