//! Schema Form Components
//!
//! Renders a `Schema` plus a value map as editable controls. String fields
//! get a free-text input with suggestions, number fields a numeric input
//! honoring `multipleOf` precision, anything else an inert marker.

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;

use crate::schema::{decimal_precision, fuzzy_match, merge_value, FieldSpec, Schema};

/// Free-text input with a suggestion dropdown.
///
/// Suggestions are fuzzy-filtered against the current value; Tab or a click
/// accepts one, ArrowUp/ArrowDown move the highlight.
#[component]
pub fn SuggestInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] suggestions: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let (selected_idx, set_selected_idx) = signal(0usize);

    // Matching suggestions for the current value (hidden on exact match)
    let matches = move || {
        let current = value.get();
        if current.is_empty() {
            return vec![];
        }
        suggestions
            .get()
            .into_iter()
            .filter(|s| s != &current && fuzzy_match(&current, s))
            .take(5)
            .collect::<Vec<_>>()
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = matches();
        match ev.key().as_str() {
            "Tab" => {
                if !sugg.is_empty() {
                    ev.prevent_default();
                    let sel = selected_idx.get();
                    if sel < sugg.len() {
                        on_change.run(sugg[sel].clone());
                        set_selected_idx.set(0);
                    }
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="suggest-input-wrapper">
            <input
                type="text"
                autocomplete="off"
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_change.run(input.value());
                    set_selected_idx.set(0);
                }
                on:keydown=on_keydown
            />
            {move || {
                let sugg = matches();
                if sugg.is_empty() || disabled {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="suggest-list">
                            {sugg.into_iter().enumerate().map(|(i, name)| {
                                let name_for_click = name.clone();
                                let is_selected = i == selected;
                                view! {
                                    <button
                                        type="button"
                                        class=if is_selected { "suggest-item selected" } else { "suggest-item" }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            on_change.run(name_for_click.clone());
                                            set_selected_idx.set(0);
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Schema-driven form body.
///
/// Renders one labeled control per visible property. Every edit merges the
/// changed key into a copy of the value map and hands the merged map to
/// `on_change`; the caller owns persistence and submission gating
/// (see `Schema::can_submit`).
#[component]
pub fn SchemaForm(
    #[prop(into)] schema: Signal<Schema>,
    #[prop(into)] values: Signal<Map<String, Value>>,
    #[prop(into)] on_change: Callback<Map<String, Value>>,
    #[prop(optional, into)] suggestions: Signal<HashMap<String, Vec<String>>>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="schema-form">
            {move || {
                let current_schema = schema.get();
                current_schema
                    .visible_fields()
                    .map(|(name, spec)| {
                        field_row(
                            name.to_string(),
                            spec.clone(),
                            current_schema.is_required(name),
                            values,
                            on_change,
                            suggestions,
                            disabled,
                        )
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// One labeled field row.
fn field_row(
    name: String,
    spec: FieldSpec,
    required: bool,
    values: Signal<Map<String, Value>>,
    on_change: Callback<Map<String, Value>>,
    suggestions: Signal<HashMap<String, Vec<String>>>,
    disabled: bool,
) -> impl IntoView {
    let label = spec.label(&name).to_string();
    let control = match spec.field_type.as_str() {
        "string" => {
            let field = name.clone();
            let value_field = name.clone();
            let field_suggestions = Signal::derive(move || {
                suggestions.get().get(&field).cloned().unwrap_or_default()
            });
            let field = name.clone();
            view! {
                <SuggestInput
                    value=Signal::derive(move || text_value(values.get().get(&value_field)))
                    suggestions=field_suggestions
                    disabled=disabled
                    on_change=move |text: String| {
                        let edit = if text.is_empty() { None } else { Some(Value::String(text)) };
                        on_change.run(merge_value(&values.get_untracked(), &field, edit));
                    }
                />
            }
            .into_any()
        }
        "number" => {
            let precision = spec.multiple_of.map(decimal_precision);
            let step = spec
                .multiple_of
                .map(|m| m.to_string())
                .unwrap_or_else(|| "any".to_string());
            let value_field = name.clone();
            let field = name.clone();
            view! {
                <input
                    type="number"
                    step=step
                    disabled=disabled
                    prop:value=move || number_value(values.get().get(&value_field), precision)
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let edit = input
                            .value()
                            .parse::<f64>()
                            .ok()
                            .and_then(serde_json::Number::from_f64)
                            .map(Value::Number);
                        on_change.run(merge_value(&values.get_untracked(), &field, edit));
                    }
                />
            }
            .into_any()
        }
        // Unknown types fail soft: visible, inert, never a panic
        _ => view! { <div class="schema-field-unsupported">"Unsupported type"</div> }.into_any(),
    };

    view! {
        <div class="schema-field-row">
            <label class="schema-field-label">
                {label}
                {required.then(|| view! { <span class="required-marker">" *"</span> })}
            </label>
            {control}
        </div>
    }
}

fn text_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn number_value(value: Option<&Value>, precision: Option<u32>) -> String {
    let Some(number) = value.and_then(Value::as_f64) else {
        return String::new();
    };
    match precision {
        Some(places) => format!("{:.*}", places as usize, number),
        None => number.to_string(),
    }
}
