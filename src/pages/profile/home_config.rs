//! Profile Home Screen Config
//!
//! Toggle which modules the home page shows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SavingAlert;
use crate::context::{save_settings, use_app_context};
use crate::pages::home::{active_modules, HOME_SCREEN_MODULES};
use crate::store::{store_settings, use_app_store};

#[component]
pub fn ProfileHomeConfig() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (saving, set_saving) = signal(false);

    let toggle_module = {
        let ctx = ctx.clone();
        move |module: String| {
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                save_settings(&ctx, &store, |s| {
                    let mut modules = active_modules(s);
                    if modules.contains(&module) {
                        modules.retain(|existing| existing != &module);
                    } else {
                        modules.push(module);
                    }
                    s.home_page_settings.active_modules = Some(modules);
                })
                .await;
                set_saving.set(false);
            });
        }
    };

    view! {
        <div class="profile-section">
            <SavingAlert saving=saving />
            <h4>"Home screen modules"</h4>
            <div class="module-card-grid">
                {move || {
                    let toggle_module = toggle_module.clone();
                    let active = active_modules(&store_settings(&store));
                    HOME_SCREEN_MODULES.iter().map(|(value, label, descr)| {
                        let toggle_module = toggle_module.clone();
                        let module = value.to_string();
                        let is_on = active.iter().any(|m| m == value);
                        view! {
                            <div class="module-card">
                                <div class="module-card-title">{*label}</div>
                                <div class="module-card-descr">{*descr}</div>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=is_on
                                        on:change=move |_| toggle_module(module.clone())
                                    />
                                    "Enabled"
                                </label>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
