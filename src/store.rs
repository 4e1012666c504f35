//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! session-wide resources every page reads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ItemType, UserSettings};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All item types for the logged-in user
    pub item_types: Vec<ItemType>,
    /// User settings; None until the first fetch lands
    pub user_settings: Option<UserSettings>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current settings, or defaults while they are still loading
pub fn store_settings(store: &AppStore) -> UserSettings {
    store.user_settings().get().unwrap_or_default()
}

pub fn store_rating_max(store: &AppStore) -> f64 {
    store_settings(store).rating_max()
}

pub fn store_use_24_hr_time(store: &AppStore) -> bool {
    store_settings(store).use_24_hr_time()
}

/// Item types pinned to the quick-add menu, in quick-menu order
pub fn store_quick_menu_types(store: &AppStore) -> Vec<ItemType> {
    let types = store.item_types().get();
    store_settings(store)
        .quick_menu_slugs()
        .iter()
        .filter_map(|slug| types.iter().find(|t| &t.slug == slug).cloned())
        .collect()
}

/// Display name for a type slug, falling back to the slug itself
pub fn store_item_type_name(store: &AppStore, slug: &str) -> String {
    store
        .item_types()
        .get()
        .iter()
        .find(|t| t.slug == slug)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| slug.to_string())
}
