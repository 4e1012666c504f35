//! Profile Page
//!
//! Tabbed settings area: basics, activity defaults, home screen modules
//! and the item type editor.

mod activity_defaults;
mod basics;
mod home_config;
mod item_types;

use leptos::prelude::*;

use crate::context::{use_app_context, Page, ProfileTab};

use activity_defaults::ProfileActivityDefaults;
use basics::ProfileBasics;
use home_config::ProfileHomeConfig;
use item_types::ProfileItemTypes;

const TABS: &[(ProfileTab, &str)] = &[
    (ProfileTab::Basics, "Basics"),
    (ProfileTab::ActivityDefaults, "Activity Defaults"),
    (ProfileTab::HomeConfig, "Home Screen"),
    (ProfileTab::ItemTypes, "Item Types"),
];

#[component]
pub fn ProfilePage(tab: ProfileTab) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page profile-page">
            <div class="profile-tabs">
                {TABS.iter().map(|(target, label)| {
                    let ctx = ctx.clone();
                    let target = *target;
                    let is_current = target == tab;
                    view! {
                        <button
                            class=if is_current { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| ctx.goto(Page::Profile(target))
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {match tab {
                ProfileTab::Basics => view! { <ProfileBasics /> }.into_any(),
                ProfileTab::ActivityDefaults => view! { <ProfileActivityDefaults /> }.into_any(),
                ProfileTab::HomeConfig => view! { <ProfileHomeConfig /> }.into_any(),
                ProfileTab::ItemTypes => view! { <ProfileItemTypes /> }.into_any(),
            }}
        </div>
    }
}
