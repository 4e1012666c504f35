//! Item Endpoints

use crate::models::{ItemDetail, ItemPatch, ItemSummary, NewItem};

use super::{delete, get_json, patch_json, path_segment, post_json, ApiResult};

pub async fn list_items() -> ApiResult<Vec<ItemSummary>> {
    get_json("/api/item").await
}

pub async fn get_item(token: &str) -> ApiResult<ItemDetail> {
    get_json(&format!("/api/item/{}", path_segment(token))).await
}

pub async fn create_item(new_item: &NewItem) -> ApiResult<ItemDetail> {
    post_json("/api/item", new_item).await
}

pub async fn update_item(token: &str, patch: &ItemPatch) -> ApiResult<ItemDetail> {
    patch_json(&format!("/api/item/{}", path_segment(token)), patch).await
}

pub async fn delete_item(token: &str) -> ApiResult<()> {
    delete(&format!("/api/item/{}", path_segment(token))).await
}
