//! Data Models
//!
//! Data structures matching backend API payloads.

use chrono::{DateTime, Utc};
use leptos_schema_form::Schema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema-driven per-record field values (`info` on items and activities)
pub type InfoMap = Map<String, Value>;

/// Schema property keys that are configuration, not form fields
pub const NON_FORM_FIELD_PROPERTIES: &[&str] = &["autocompleteFields", "labelMap"];

/// Field types the item-type editor lets users pick
pub const FORM_FIELD_TYPES: &[&str] = &["string", "number"];

/// Item type as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Item type detail, including its field schema
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemTypeDetail {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub item_schema: Schema,
    /// Template for deriving item display names, e.g. "{{title}} ({{author}})"
    #[serde(default)]
    pub name_schema: String,
    #[serde(default)]
    pub parent_slug: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Partial item-type update; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemTypePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slug: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_schema: Option<Schema>,
}

/// Item as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub token: String,
    /// Server-derived from the type's name schema
    #[serde(default)]
    pub name: String,
    pub item_type: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Full item detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub token: String,
    #[serde(default)]
    pub name: String,
    pub item_type: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub info: InfoMap,
    #[serde(default)]
    pub parent_token: Option<String>,
}

/// New item payload
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub item_type: String,
    pub info: InfoMap,
    #[serde(rename = "setAsParentTo", skip_serializing_if = "Option::is_none")]
    pub set_as_parent_to: Option<String>,
}

/// Partial item update; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_token: Option<String>,
}

/// Activity as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub token: String,
    pub item_type: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Full activity detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    pub token: String,
    /// Token of the item this activity is against
    pub item: String,
    pub item_type: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub info: InfoMap,
}

/// New activity payload. The server get-or-creates the item from
/// `item_details` (keyed on the type's required fields) before attaching
/// the activity.
#[derive(Debug, Clone, Serialize)]
pub struct NewActivity {
    #[serde(rename = "itemDetails")]
    pub item_details: NewActivityItem,
    #[serde(rename = "activityDetails")]
    pub activity_details: NewActivityDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewActivityItem {
    pub item_type: String,
    pub info: InfoMap,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewActivityDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub finished: bool,
    pub pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub notes: String,
    pub info: InfoMap,
}

/// Partial activity update; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ========================
// User Settings
// ========================

/// Per-user preferences. Keys this client version does not know are kept in
/// `extra` so a settings save never clobbers them (the server replaces the
/// whole settings object).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_types_in_quick_menu: Option<Vec<String>>,
    #[serde(default)]
    pub activity_defaults: ActivityDefaults,
    #[serde(default)]
    pub home_page_settings: HomePageSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_24_hr_time: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_finished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_start_to_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_end_to_now: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_modules: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSettings {
    /// Scale factor between stored ratings ([0, 1]) and displayed ratings
    pub fn rating_max(&self) -> f64 {
        self.rating_max.unwrap_or(5.0)
    }

    pub fn use_24_hr_time(&self) -> bool {
        self.use_24_hr_time.unwrap_or(true)
    }

    /// Item type slugs pinned to the quick-add menu
    pub fn quick_menu_slugs(&self) -> Vec<String> {
        self.item_types_in_quick_menu
            .clone()
            .unwrap_or_else(|| vec!["book".to_string(), "movie".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_unknown_keys_survive_roundtrip() {
        let incoming = json!({
            "ratingMax": 10,
            "use24HrTime": false,
            "someFutureSetting": {"nested": true},
            "activityDefaults": {"defaultPending": true, "newerFlag": 1},
        });
        let settings: UserSettings = serde_json::from_value(incoming).unwrap();
        assert_eq!(settings.rating_max(), 10.0);
        assert!(!settings.use_24_hr_time());
        assert_eq!(settings.activity_defaults.default_pending, Some(true));

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["someFutureSetting"]["nested"], json!(true));
        assert_eq!(back["activityDefaults"]["newerFlag"], json!(1));
    }

    #[test]
    fn test_settings_merge_does_not_clobber() {
        // Changing one key leaves the rest of the settings intact
        let mut settings: UserSettings = serde_json::from_value(json!({
            "ratingMax": 5,
            "itemTypesInQuickMenu": ["book"],
            "use24HrTime": true,
        }))
        .unwrap();
        settings.rating_max = Some(10.0);

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["ratingMax"], json!(10.0));
        assert_eq!(back["itemTypesInQuickMenu"], json!(["book"]));
        assert_eq!(back["use24HrTime"], json!(true));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = UserSettings::default();
        assert_eq!(settings.rating_max(), 5.0);
        assert!(settings.use_24_hr_time());
        assert_eq!(settings.quick_menu_slugs(), vec!["book", "movie"]);
    }

    #[test]
    fn test_item_patch_serializes_only_set_fields() {
        let patch = ItemPatch {
            notes: Some("great".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, json!({"notes": "great"}));
    }

    #[test]
    fn test_activity_detail_deserializes_timestamps() {
        let activity: ActivityDetail = serde_json::from_value(json!({
            "token": "A_abc123",
            "item": "I_def456",
            "item_type": "book",
            "start_time": "2024-03-01T18:30:00Z",
            "end_time": null,
            "finished": false,
            "pending": true,
            "info": {},
        }))
        .unwrap();
        assert!(activity.start_time.is_some());
        assert!(activity.end_time.is_none());
        assert!(activity.pending);
    }
}
