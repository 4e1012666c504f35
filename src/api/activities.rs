//! Activity Endpoints

use crate::models::{ActivityDetail, ActivityPatch, ActivitySummary, NewActivity};

use super::{delete, get_json, patch_json, path_segment, post_json, ApiResult};

pub async fn list_activities() -> ApiResult<Vec<ActivitySummary>> {
    get_json("/api/activity").await
}

pub async fn get_activity(token: &str) -> ApiResult<ActivityDetail> {
    get_json(&format!("/api/activity/{}", path_segment(token))).await
}

pub async fn create_activity(new_activity: &NewActivity) -> ApiResult<ActivityDetail> {
    post_json("/api/activity", new_activity).await
}

pub async fn update_activity(token: &str, patch: &ActivityPatch) -> ApiResult<ActivityDetail> {
    patch_json(&format!("/api/activity/{}", path_segment(token)), patch).await
}

pub async fn delete_activity(token: &str) -> ApiResult<()> {
    delete(&format!("/api/activity/{}", path_segment(token))).await
}
