//! User Settings Endpoints
//!
//! Settings are a singleton per user, wrapped in a `settings` envelope. The
//! server replaces the whole object on PATCH, so callers merge before saving
//! (see `context::AppContext::save_settings`).

use serde::{Deserialize, Serialize};

use crate::models::UserSettings;

use super::{get_json, patch_json, ApiResult};

#[derive(Debug, Serialize, Deserialize)]
struct SettingsEnvelope {
    settings: UserSettings,
}

pub async fn get_settings() -> ApiResult<UserSettings> {
    let envelope: SettingsEnvelope = get_json("/api/settings").await?;
    Ok(envelope.settings)
}

pub async fn update_settings(settings: &UserSettings) -> ApiResult<UserSettings> {
    let envelope: SettingsEnvelope = patch_json(
        "/api/settings",
        &SettingsEnvelope {
            settings: settings.clone(),
        },
    )
    .await?;
    Ok(envelope.settings)
}
