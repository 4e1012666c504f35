//! Profile Item Types
//!
//! The item type editor: a card grid plus modals for creating a type and
//! editing its schema (fields, name template, parent link, icon).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_schema_form::{remove_field, FieldSpec, PropertySpec};
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DeleteConfirmButton, ItemTypeCard, SavingAlert};
use crate::context::{use_app_context, AppContext};
use crate::format::{capitalize_words, slugify};
use crate::models::{ItemTypeDetail, ItemTypePatch, FORM_FIELD_TYPES, NON_FORM_FIELD_PROPERTIES};
use crate::query::write_through;
use crate::store::{use_app_store, AppStateStoreFields};

/// Send one partial update, rippling invalidation to everything rendered
/// from schemas.
async fn apply_patch(ctx: &AppContext, slug: &str, patch: ItemTypePatch) -> bool {
    let family = ctx.queries.item_type_family();
    match write_through(&family, api::update_item_type(slug, &patch)).await {
        Ok(_) => true,
        Err(err) => {
            ctx.handle_error("update item type", &err);
            false
        }
    }
}

#[component]
pub fn ProfileItemTypes() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (editing_slug, set_editing_slug) = signal(None::<String>);
    let (new_modal_open, set_new_modal_open) = signal(false);

    view! {
        <div class="profile-section">
            <div>"Item types"</div>
            <div class="type-card-grid">
                {move || store.item_types().get().into_iter().map(|item_type| {
                    let slug = item_type.slug.clone();
                    let description = format!("Edit {} type", item_type.name);
                    view! {
                        <ItemTypeCard
                            name=item_type.name.clone()
                            icon_url=item_type.icon_url.clone()
                            description=description
                            on_click=move |_| set_editing_slug.set(Some(slug.clone()))
                        />
                    }
                }).collect_view()}
                <ItemTypeCard
                    name="New"
                    description="Add new type"
                    on_click=move |_| set_new_modal_open.set(true)
                />
            </div>

            <NewItemTypeModal
                open=new_modal_open
                on_close=move |_| set_new_modal_open.set(false)
                on_created=move |slug: String| {
                    set_new_modal_open.set(false);
                    set_editing_slug.set(Some(slug));
                }
            />
            <EditItemTypeModal
                slug=editing_slug
                on_close=move |_| set_editing_slug.set(None)
            />
        </div>
    }
}

#[component]
fn NewItemTypeModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (creating, set_creating) = signal(false);

    let create = {
        let ctx = ctx.clone();
        move |_| {
            let display_name = name.get_untracked();
            if display_name.is_empty() || creating.get_untracked() {
                return;
            }
            set_creating.set(true);
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = write_through(
                    &[&ctx.queries.item_types],
                    api::create_item_type(&display_name, None),
                )
                .await;
                match result {
                    Ok(created) => {
                        set_name.set(String::new());
                        on_created.run(created.slug);
                    }
                    Err(err) => ctx.handle_error("create item type", &err),
                }
                set_creating.set(false);
            });
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-mask" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"New Item Type"</h3>
                    <div class="labeled-row">
                        <label>"Slug"</label>
                        <input type="text" disabled prop:value=move || slugify(&name.get()) />
                    </div>
                    <div class="labeled-row">
                        <label>"Name"</label>
                        <input
                            type="text"
                            placeholder="New item type name"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                    </div>
                    <button
                        class="primary-btn"
                        disabled=move || name.get().is_empty() || creating.get()
                        on:click=create.clone()
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Pending add-field form state
#[derive(Clone, Default, PartialEq)]
struct NewField {
    title: String,
    field_type: String,
    required: bool,
}

#[component]
fn EditItemTypeModal(
    #[prop(into)] slug: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (detail, set_detail) = signal(None::<ItemTypeDetail>);
    let (saving, set_saving) = signal(false);
    let (new_field, set_new_field) = signal(None::<NewField>);

    // Load the type being edited; reloads after each patch settles
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let guard = ctx.queries.item_types.track();
            let Some(current_slug) = slug.get() else {
                set_detail.set(None);
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::get_item_type(&current_slug).await {
                    Ok(loaded) => {
                        if guard.still_valid() {
                            set_detail.set(Some(loaded));
                        }
                    }
                    Err(err) => ctx.handle_error("load item type", &err),
                }
            });
        });
    }

    let patch_type = {
        let ctx = ctx.clone();
        move |patch: ItemTypePatch| {
            let Some(current_slug) = slug.get_untracked() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                apply_patch(&ctx, &current_slug, patch).await;
                set_saving.set(false);
            });
        }
    };

    let upload_icon = {
        let ctx = ctx.clone();
        move |file: web_sys::File| {
            let Some(current_slug) = slug.get_untracked() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        let result = write_through(
                            &[&ctx.queries.item_types],
                            api::upload_item_type_icon(
                                &current_slug,
                                &file.name(),
                                &file.type_(),
                                bytes,
                            ),
                        )
                        .await;
                        if let Err(err) = result {
                            ctx.handle_error("upload icon", &err);
                        }
                    }
                    Err(_) => {
                        web_sys::console::error_1(&"[API] could not read icon file".into());
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let remove_icon = {
        let ctx = ctx.clone();
        move |_| {
            let Some(current_slug) = slug.get_untracked() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                set_saving.set(true);
                let result = write_through(
                    &[&ctx.queries.item_types],
                    api::delete_item_type_icon(&current_slug),
                )
                .await;
                if let Err(err) = result {
                    ctx.handle_error("remove icon", &err);
                }
                set_saving.set(false);
            });
        }
    };

    let delete_type = {
        let ctx = ctx.clone();
        move |_| {
            let Some(current_slug) = slug.get_untracked() else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                let family = ctx.queries.item_type_family();
                let result = write_through(&family, api::delete_item_type(&current_slug)).await;
                match result {
                    Ok(()) => on_close.run(()),
                    Err(err) => ctx.handle_error("delete item type", &err),
                }
            });
        }
    };

    view! {
        <Show when=move || slug.get().is_some()>
            <div class="modal-mask" on:click=move |_| on_close.run(())>
                <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                    {
                        let patch_type = patch_type.clone();
                        let upload_icon = upload_icon.clone();
                        let remove_icon = remove_icon.clone();
                        let delete_type = delete_type.clone();
                        move || {
                        let patch_type = patch_type.clone();
                        let upload_icon = upload_icon.clone();
                        let remove_icon = remove_icon.clone();
                        let delete_type = delete_type.clone();
                        match detail.get() {
                            None => view! { <div class="spinner">"Loading..."</div> }.into_any(),
                            Some(current) => view! {
                                <h3>{format!("Editing {}", current.name)}</h3>
                                <SavingAlert saving=saving />
                                {edit_modal_body(
                                    current,
                                    patch_type,
                                    upload_icon,
                                    remove_icon,
                                    delete_type,
                                    new_field,
                                    set_new_field,
                                )}
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

/// The editable body for one loaded item type
fn edit_modal_body(
    current: ItemTypeDetail,
    patch_type: impl Fn(ItemTypePatch) + Clone + Send + Sync + 'static,
    upload_icon: impl Fn(web_sys::File) + Clone + Send + Sync + 'static,
    remove_icon: impl Fn(()) + Clone + Send + Sync + 'static,
    delete_type: impl Fn(()) + Clone + Send + Sync + 'static,
    new_field: ReadSignal<Option<NewField>>,
    set_new_field: WriteSignal<Option<NewField>>,
) -> impl IntoView {
    let store = use_app_store();
    let schema = current.item_schema.clone();

    // Field rows: boolean sentinels and config entries stay out of the editor
    let editable_fields: Vec<(String, FieldSpec)> = schema
        .properties
        .iter()
        .filter(|(name, _)| !NON_FORM_FIELD_PROPERTIES.contains(&name.as_str()))
        .filter_map(|(name, spec)| spec.as_field().map(|f| (name.clone(), f.clone())))
        .collect();

    let existing_keys: Vec<String> = schema.properties.keys().cloned().collect();

    let name_patch = patch_type.clone();
    let name_schema_patch = patch_type.clone();
    let parent_patch = patch_type.clone();
    let add_field_patch = patch_type.clone();

    let schema_for_rows = schema.clone();
    let schema_for_add = schema.clone();
    let parent_slug = current.parent_slug.clone();
    let other_types: Vec<_> = store
        .item_types()
        .get_untracked()
        .into_iter()
        .filter(|t| t.slug != current.slug)
        .collect();

    view! {
        <div class="labeled-row">
            <label>"Display name"</label>
            <input
                type="text"
                prop:value=current.name.clone()
                on:blur=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    if !input.value().is_empty() {
                        name_patch(ItemTypePatch {
                            name: Some(input.value()),
                            ..Default::default()
                        });
                    }
                }
            />
        </div>

        <div class="labeled-row">
            <label>"Item name schema"</label>
            <input
                type="text"
                placeholder="{{title}}"
                prop:value=current.name_schema.clone()
                on:blur=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    name_schema_patch(ItemTypePatch {
                        name_schema: Some(input.value()),
                        ..Default::default()
                    });
                }
            />
        </div>

        // Parent link is a flat slug reference; the server owns cycle checks
        <div class="labeled-row">
            <label>"Parent type"</label>
            <select on:change=move |ev| {
                let target = ev.target().unwrap();
                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                let value = select.value();
                let parent = if value.is_empty() { None } else { Some(value) };
                parent_patch(ItemTypePatch {
                    parent_slug: Some(parent),
                    ..Default::default()
                });
            }>
                <option value="" selected=parent_slug.is_none()>"None"</option>
                {other_types.into_iter().map(|t| {
                    let is_selected = parent_slug.as_deref() == Some(t.slug.as_str());
                    view! {
                        <option value=t.slug.clone() selected=is_selected>{t.name.clone()}</option>
                    }
                }).collect_view()}
            </select>
        </div>

        <div class="labeled-row">
            <label>"Icon"</label>
            <input
                type="file"
                accept="image/*"
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        upload_icon(file);
                    }
                }
            />
            {current.icon_url.clone().map(|_| view! {
                <button class="text-btn" on:click=move |_| remove_icon(())>"Remove icon"</button>
            })}
        </div>

        <h4>"Fields"</h4>
        <div class="field-rows">
            {editable_fields.into_iter().map(|(field_name, spec)| {
                field_editor_row(field_name, spec, schema_for_rows.clone(), patch_type.clone())
            }).collect_view()}
        </div>

        {move || match new_field.get() {
            None => view! {
                <button class="primary-btn" on:click=move |_| set_new_field.set(Some(NewField {
                    field_type: "string".to_string(),
                    ..Default::default()
                }))>
                    "Add new field"
                </button>
            }
            .into_any(),
            Some(pending) => {
                let add_field_patch = add_field_patch.clone();
                let schema = schema_for_add.clone();
                let field_slug = slugify(&pending.title);
                let slug_taken = existing_keys.iter().any(|k| k == &field_slug);
                let can_add = !pending.title.is_empty() && !field_slug.is_empty() && !slug_taken;
                let pending_for_title = pending.clone();
                let pending_for_type = pending.clone();
                let pending_for_required = pending.clone();
                let pending_for_add = pending.clone();
                view! {
                    <div class="new-field-form">
                        <div class="labeled-row">
                            <label>"Field name"</label>
                            <input type="text" disabled prop:value=field_slug.clone() />
                        </div>
                        <div class="labeled-row">
                            <label>"Display name"</label>
                            <input
                                type="text"
                                placeholder="Display name"
                                prop:value=pending.title.clone()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_new_field.set(Some(NewField {
                                        title: input.value(),
                                        ..pending_for_title.clone()
                                    }));
                                }
                            />
                        </div>
                        <div class="labeled-row">
                            <label>"Field type"</label>
                            <select on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_new_field.set(Some(NewField {
                                    field_type: select.value(),
                                    ..pending_for_type.clone()
                                }));
                            }>
                                {FORM_FIELD_TYPES.iter().map(|ft| view! {
                                    <option value=*ft selected=pending.field_type == *ft>
                                        {capitalize_words(ft)}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="labeled-row">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=pending.required
                                    on:change=move |_| {
                                        let mut next = pending_for_required.clone();
                                        next.required = !next.required;
                                        set_new_field.set(Some(next));
                                    }
                                />
                                "Required"
                            </label>
                        </div>
                        <button
                            class="primary-btn"
                            disabled=!can_add
                            on:click=move |_| {
                                let field_slug = slugify(&pending_for_add.title);
                                let mut next_schema = schema.clone();
                                let spec = match pending_for_add.field_type.as_str() {
                                    "number" => FieldSpec::number(&pending_for_add.title),
                                    _ => FieldSpec::string(&pending_for_add.title),
                                };
                                next_schema
                                    .properties
                                    .insert(field_slug.clone(), PropertySpec::Field(spec));
                                if pending_for_add.required {
                                    next_schema.required.push(field_slug);
                                }
                                add_field_patch(ItemTypePatch {
                                    item_schema: Some(next_schema),
                                    ..Default::default()
                                });
                                set_new_field.set(None);
                            }
                        >
                            "Add"
                        </button>
                    </div>
                }
                .into_any()
            }
        }}

        <DeleteConfirmButton label="Delete Item Type" on_confirm=delete_type />
    }
}

/// Editor row for one existing schema field
fn field_editor_row(
    field_name: String,
    spec: FieldSpec,
    schema: leptos_schema_form::Schema,
    patch_type: impl Fn(ItemTypePatch) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let is_required = schema.is_required(&field_name);

    let title_patch = patch_type.clone();
    let type_patch = patch_type.clone();
    let required_patch = patch_type.clone();
    let delete_patch = patch_type;

    let title_schema = schema.clone();
    let type_schema = schema.clone();
    let required_schema = schema.clone();
    let delete_schema = schema;

    let title_name = field_name.clone();
    let title_spec = spec.clone();
    let type_name = field_name.clone();
    let type_spec = spec.clone();
    let required_name = field_name.clone();
    let delete_name = field_name.clone();

    view! {
        <div class="field-row">
            <div class="field-row-key">{field_name.clone()}</div>

            <div class="labeled-row">
                <label>"Display name"</label>
                <input
                    type="text"
                    prop:value=spec.title.clone().unwrap_or_default()
                    on:blur=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let mut next_schema = title_schema.clone();
                        let mut next_spec = title_spec.clone();
                        next_spec.title = Some(input.value());
                        next_schema
                            .properties
                            .insert(title_name.clone(), PropertySpec::Field(next_spec));
                        title_patch(ItemTypePatch {
                            item_schema: Some(next_schema),
                            ..Default::default()
                        });
                    }
                />
            </div>

            <div class="labeled-row">
                <label>"Field type"</label>
                <select on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    let mut next_schema = type_schema.clone();
                    let mut next_spec = type_spec.clone();
                    next_spec.field_type = select.value();
                    next_schema
                        .properties
                        .insert(type_name.clone(), PropertySpec::Field(next_spec));
                    type_patch(ItemTypePatch {
                        item_schema: Some(next_schema),
                        ..Default::default()
                    });
                }>
                    {FORM_FIELD_TYPES.iter().map(|ft| view! {
                        <option value=*ft selected=spec.field_type == *ft>
                            {capitalize_words(ft)}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="labeled-row">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=is_required
                        on:change=move |_| {
                            let mut next_schema = required_schema.clone();
                            if is_required {
                                next_schema.required.retain(|r| r != &required_name);
                            } else {
                                next_schema.required.push(required_name.clone());
                            }
                            required_patch(ItemTypePatch {
                                item_schema: Some(next_schema),
                                ..Default::default()
                            });
                        }
                    />
                    "Required"
                </label>
            </div>

            // Removes the key from both properties and required in one patch
            <DeleteConfirmButton
                label="Delete field"
                on_confirm=move |_| {
                    delete_patch(ItemTypePatch {
                        item_schema: Some(remove_field(&delete_schema, &delete_name)),
                        ..Default::default()
                    });
                }
            />
        </div>
    }
}
