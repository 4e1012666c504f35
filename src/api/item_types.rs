//! Item Type Endpoints
//!
//! Schema CRUD plus icon upload and per-field autocomplete suggestions.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::models::{ItemType, ItemTypeDetail, ItemTypePatch};

use super::{
    delete, get_json, patch_json, path_segment, post_json, post_multipart, ApiError, ApiResult,
};

#[derive(Debug, Serialize)]
struct NewItemType<'a> {
    name: &'a str,
    #[serde(rename = "parentSlug", skip_serializing_if = "Option::is_none")]
    parent_slug: Option<&'a str>,
}

pub async fn list_item_types() -> ApiResult<Vec<ItemType>> {
    get_json("/api/item_type").await
}

pub async fn get_item_type(slug: &str) -> ApiResult<ItemTypeDetail> {
    get_json(&format!("/api/item_type/{}", path_segment(slug))).await
}

pub async fn create_item_type(name: &str, parent_slug: Option<&str>) -> ApiResult<ItemType> {
    post_json("/api/item_type", &NewItemType { name, parent_slug }).await
}

pub async fn update_item_type(slug: &str, patch: &ItemTypePatch) -> ApiResult<ItemTypeDetail> {
    patch_json(&format!("/api/item_type/{}", path_segment(slug)), patch).await
}

pub async fn delete_item_type(slug: &str) -> ApiResult<()> {
    delete(&format!("/api/item_type/{}", path_segment(slug))).await
}

pub async fn upload_item_type_icon(
    slug: &str,
    file_name: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> ApiResult<()> {
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let form = reqwest::multipart::Form::new().part("icon", part);
    post_multipart(&format!("/api/item_type/{}/icon", path_segment(slug)), form).await
}

pub async fn delete_item_type_icon(slug: &str) -> ApiResult<()> {
    delete(&format!("/api/item_type/{}/icon", path_segment(slug))).await
}

/// Distinct historical `info` values per field, for the string-control
/// suggestions on add/edit forms
pub async fn autocomplete_suggestions(slug: &str) -> ApiResult<HashMap<String, Vec<String>>> {
    let raw: HashMap<String, Vec<Value>> = get_json(&format!(
        "/api/autocomplete_suggestions/{}",
        path_segment(slug)
    ))
    .await?;
    Ok(raw
        .into_iter()
        .map(|(field, values)| {
            let strings = values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            (field, strings)
        })
        .collect())
}
