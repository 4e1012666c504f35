//! Leptos Schema Form
//!
//! Schema-driven form rendering for Leptos: a field schema plus a value map
//! in, editable controls out, edits merged back into the map immutably.

mod form;
mod schema;

pub use form::{SchemaForm, SuggestInput};
pub use schema::{
    decimal_precision, fuzzy_match, is_empty_value, merge_value, remove_field, FieldSpec,
    PropertySpec, Schema,
};
