//! Field Schema Model
//!
//! JSON-Schema-like field definitions: an ordered property map plus a
//! required list. Property specs are tri-state: a typed field, a boolean
//! sentinel (field disabled but kept for historical data), or absent.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One property entry in a schema.
///
/// Boolean entries are a schema convention for "field disabled/removed
/// without deleting historical data" and never render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    Disabled(bool),
    Field(FieldSpec),
}

impl PropertySpec {
    pub fn as_field(&self) -> Option<&FieldSpec> {
        match self {
            PropertySpec::Disabled(_) => None,
            PropertySpec::Field(spec) => Some(spec),
        }
    }
}

/// A typed field definition.
///
/// `extra` carries through any schema keys this renderer does not interpret
/// (`const`, `patternProperties`, ...) so a load/edit/save cycle never
/// drops them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(rename = "multipleOf", default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldSpec {
    pub fn string(title: &str) -> Self {
        FieldSpec {
            title: Some(title.to_string()),
            field_type: "string".to_string(),
            ..Default::default()
        }
    }

    pub fn number(title: &str) -> Self {
        FieldSpec {
            title: Some(title.to_string()),
            field_type: "number".to_string(),
            ..Default::default()
        }
    }

    /// Display label: the title if set, the property key otherwise.
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(name)
    }
}

/// A full field schema: ordered properties + required keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub properties: IndexMap<String, PropertySpec>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schema {
    /// Iterate properties that should render, in schema order.
    /// Boolean sentinel entries are skipped.
    pub fn visible_fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.properties
            .iter()
            .filter_map(|(name, spec)| spec.as_field().map(|f| (name.as_str(), f)))
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Required keys whose value is missing or empty.
    pub fn missing_required<'a>(&'a self, values: &Map<String, Value>) -> Vec<&'a str> {
        self.required
            .iter()
            .filter(|name| values.get(name.as_str()).map_or(true, is_empty_value))
            .map(|name| name.as_str())
            .collect()
    }

    /// A record may be submitted only when every required key holds a
    /// non-empty value.
    pub fn can_submit(&self, values: &Map<String, Value>) -> bool {
        self.missing_required(values).is_empty()
    }
}

/// Whether a value counts as "unset" for required-field gating.
///
/// Mirrors JS falsiness: null, "", 0 and false all count as unset. That
/// makes a legitimately-zero required number indistinguishable from a
/// missing one; carried over deliberately, do not change without a
/// stakeholder decision.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(_) => false,
    }
}

/// Decimal places implied by a numeric field's `multipleOf`
/// (0.01 means two decimal places). Non-positive steps fall back to 0.
pub fn decimal_precision(multiple_of: f64) -> u32 {
    if multiple_of <= 0.0 {
        return 0;
    }
    let places = -multiple_of.log10();
    if places <= 0.0 {
        0
    } else {
        places.round() as u32
    }
}

/// Merge a single edit into a value map without touching the original.
/// `None` removes the key (a cleared control); other edits replace it.
pub fn merge_value(
    values: &Map<String, Value>,
    name: &str,
    value: Option<Value>,
) -> Map<String, Value> {
    let mut merged = values.clone();
    match value {
        Some(v) => {
            merged.insert(name.to_string(), v);
        }
        None => {
            merged.remove(name);
        }
    }
    merged
}

/// Remove a field from a schema: the key leaves both `properties` and
/// `required`, so one patch carries the whole removal.
pub fn remove_field(schema: &Schema, name: &str) -> Schema {
    let mut next = schema.clone();
    next.properties.shift_remove(name);
    next.required.retain(|r| r != name);
    next
}

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book_schema() -> Schema {
        serde_json::from_value(json!({
            "type": "object",
            "properties": {
                "title": {"type": "string"},
                "author": {"type": "string", "title": "Author"},
                "series_num": {"type": "number", "multipleOf": 0.5},
                "legacy_isbn": false,
            },
            "required": ["title", "author"],
        }))
        .expect("schema should deserialize")
    }

    #[test]
    fn test_boolean_sentinel_never_visible() {
        let schema = book_schema();
        let names: Vec<&str> = schema.visible_fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "author", "series_num"]);
    }

    #[test]
    fn test_visible_fields_keep_schema_order() {
        let schema = book_schema();
        let first = schema.visible_fields().next().map(|(n, _)| n);
        assert_eq!(first, Some("title"));
    }

    #[test]
    fn test_tri_state_roundtrip() {
        let schema = book_schema();
        let back = serde_json::to_value(&schema).unwrap();
        assert_eq!(back["properties"]["legacy_isbn"], json!(false));
        assert_eq!(back["properties"]["title"]["type"], json!("string"));
    }

    #[test]
    fn test_required_gating_enables_and_disables() {
        let schema = book_schema();
        let mut values = Map::new();
        assert!(!schema.can_submit(&values));

        values.insert("title".into(), json!("Dune"));
        values.insert("author".into(), json!("Frank Herbert"));
        assert!(schema.can_submit(&values));

        // Clearing a required field disables submission again
        let cleared = merge_value(&values, "author", Some(json!("")));
        assert!(!schema.can_submit(&cleared));
        assert_eq!(schema.missing_required(&cleared), vec!["author"]);

        let restored = merge_value(&cleared, "author", Some(json!("Frank Herbert")));
        assert!(schema.can_submit(&restored));
    }

    #[test]
    fn test_zero_counts_as_unset() {
        // The known sharp edge: 0 and "" gate exactly like a missing value.
        let schema: Schema = serde_json::from_value(json!({
            "properties": {"pages": {"type": "number"}},
            "required": ["pages"],
        }))
        .unwrap();
        let mut values = Map::new();
        values.insert("pages".into(), json!(0));
        assert!(!schema.can_submit(&values));
        values.insert("pages".into(), json!(412));
        assert!(schema.can_submit(&values));
    }

    #[test]
    fn test_merge_value_leaves_original_untouched() {
        let mut values = Map::new();
        values.insert("title".into(), json!("Dune"));

        let merged = merge_value(&values, "author", Some(json!("Frank Herbert")));
        assert_eq!(merged.len(), 2);
        assert_eq!(values.len(), 1);

        let removed = merge_value(&merged, "author", None);
        assert!(!removed.contains_key("author"));
        assert!(merged.contains_key("author"));
    }

    #[test]
    fn test_decimal_precision() {
        assert_eq!(decimal_precision(0.01), 2);
        assert_eq!(decimal_precision(0.5), 0);
        assert_eq!(decimal_precision(0.001), 3);
        assert_eq!(decimal_precision(1.0), 0);
        assert_eq!(decimal_precision(0.0), 0);
        assert_eq!(decimal_precision(-2.0), 0);
    }

    #[test]
    fn test_unknown_field_type_deserializes() {
        // Meta-entries like array/object typed properties must parse,
        // they just render as unsupported.
        let schema: Schema = serde_json::from_value(json!({
            "properties": {
                "autocompleteFields": {"type": "array", "const": ["title"]},
                "labelMap": {"type": "object"},
            },
        }))
        .unwrap();
        let types: Vec<&str> = schema
            .visible_fields()
            .map(|(_, spec)| spec.field_type.as_str())
            .collect();
        assert_eq!(types, vec!["array", "object"]);
        // Uninterpreted keys survive a round-trip
        let back = serde_json::to_value(&schema).unwrap();
        assert_eq!(back["properties"]["autocompleteFields"]["const"], json!(["title"]));
    }

    #[test]
    fn test_field_label_falls_back_to_key() {
        let schema = book_schema();
        let labels: Vec<String> = schema
            .visible_fields()
            .map(|(name, spec)| spec.label(name).to_string())
            .collect();
        assert_eq!(labels, vec!["title", "Author", "series_num"]);
    }

    #[test]
    fn test_remove_field_clears_properties_and_required() {
        let schema: Schema = serde_json::from_value(json!({
            "properties": {
                "title": {"type": "string"},
                "pages": {"type": "number"},
            },
            "required": ["title", "pages"],
        }))
        .unwrap();

        let next = remove_field(&schema, "pages");
        assert!(!next.properties.contains_key("pages"));
        assert_eq!(next.required, vec!["title"]);
        // Source schema untouched
        assert!(schema.properties.contains_key("pages"));
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("dn", "Dune"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("dune", "Dn"));
        assert!(fuzzy_match("FH", "frank herbert"));
    }
}
