//! Items Page
//!
//! Searchable, type-filterable list of cataloged items.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::fuzzy_match;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{Spinner, TypePickerModal};
use crate::context::{use_app_context, Page};
use crate::format::{capitalize_words, format_rating};
use crate::models::ItemSummary;
use crate::store::{store_rating_max, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (items, set_items) = signal(Vec::<ItemSummary>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (type_filter, set_type_filter) = signal(String::new());
    let (picker_open, set_picker_open) = signal(false);

    // Load items whenever the resource is invalidated
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
                            set_loading.set(false);
                        }
                    }
                    Err(err) => {
                        ctx.handle_error("load items", &err);
                        set_loading.set(false);
                    }
                }
            });
        });
    }

    let filtered = move || {
        let query = search.get();
        let type_slug = type_filter.get();
        items
            .get()
            .into_iter()
            .filter(|item| type_slug.is_empty() || item.item_type == type_slug)
            .filter(|item| query.is_empty() || fuzzy_match(&query, &item.name))
            .collect::<Vec<_>>()
    };

    let goto_detail = {
        let ctx = ctx.clone();
        move |token: String| ctx.goto(Page::ItemDetail(token))
    };
    let goto_add = {
        let ctx = ctx.clone();
        move |slug: String| {
            set_picker_open.set(false);
            ctx.goto(Page::AddItem(slug));
        }
    };

    view! {
        <div class="page items-page">
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder="Search items..."
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
                <button class="primary-btn" on:click=move |_| set_picker_open.set(true)>
                    "Add Item"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="list">
                    {
                        let goto_detail = goto_detail.clone();
                        move || {
                        let goto_detail = goto_detail.clone();
                        filtered().into_iter().map(|item| {
                            let goto_detail = goto_detail.clone();
                            let token = item.token.clone();
                            view! {
                                <div class="list-row" on:click=move |_| goto_detail(token.clone())>
                                    <div class="list-row-avatar">
                                        {match item.icon_url.clone() {
                                            Some(url) => view! { <img src=url /> }.into_any(),
                                            None => view! { <span>"?"</span> }.into_any(),
                                        }}
                                        <span class="list-row-type">{capitalize_words(&item.item_type)}</span>
                                    </div>
                                    <div class="list-row-title">{item.name.clone()}</div>
                                    <div class="list-row-rating">
                                        {format_rating(item.rating, store_rating_max(&store))} " ★"
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
                <p class="item-count">{move || format!("{} items", filtered().len())}</p>
            </Show>

            <TypePickerModal
                open=picker_open
                title="Add New Item"
                action="item"
                on_pick=goto_add
                on_close=move |_| set_picker_open.set(false)
            />
        </div>
    }
}
