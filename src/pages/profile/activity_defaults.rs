//! Profile Activity Defaults
//!
//! What new activities start out as: status flags and time prefills.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SavingAlert;
use crate::context::{save_settings, use_app_context, AppContext};
use crate::models::ActivityDefaults;
use crate::store::{store_settings, use_app_store, AppStore};

/// One switch row bound to a field of the activity defaults
fn default_switch(
    ctx: AppContext,
    store: AppStore,
    set_saving: WriteSignal<bool>,
    label: &'static str,
    read: fn(&ActivityDefaults) -> bool,
    write: fn(&mut ActivityDefaults, bool),
) -> impl IntoView {
    let toggle = move |_| {
        let ctx = ctx.clone();
        let next = !read(&store_settings(&store).activity_defaults);
        spawn_local(async move {
            set_saving.set(true);
            save_settings(&ctx, &store, |s| write(&mut s.activity_defaults, next)).await;
            set_saving.set(false);
        });
    };

    view! {
        <div class="labeled-row">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || read(&store_settings(&store).activity_defaults)
                    on:change=toggle
                />
                {label}
            </label>
        </div>
    }
}

#[component]
pub fn ProfileActivityDefaults() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (saving, set_saving) = signal(false);

    view! {
        <div class="profile-section">
            <SavingAlert saving=saving />

            <h4>"Status"</h4>
            {default_switch(
                ctx.clone(),
                store,
                set_saving,
                "New activities should default to pending",
                |d| d.default_pending.unwrap_or(false),
                |d, v| d.default_pending = Some(v),
            )}
            {default_switch(
                ctx.clone(),
                store,
                set_saving,
                "New activities should default to closing out the item",
                |d| d.default_finished.unwrap_or(false),
                |d, v| d.default_finished = Some(v),
            )}

            <h4>"Times"</h4>
            {default_switch(
                ctx.clone(),
                store,
                set_saving,
                "Default start time to now",
                |d| d.default_start_to_now.unwrap_or(false),
                |d, v| d.default_start_to_now = Some(v),
            )}
            {default_switch(
                ctx,
                store,
                set_saving,
                "Default end time to now",
                |d| d.default_end_to_now.unwrap_or(false),
                |d, v| d.default_end_to_now = Some(v),
            )}
        </div>
    }
}
