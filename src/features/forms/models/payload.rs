use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::forms::validator::{FieldKind, FormSchema};

/// Raw value of one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Selection(Vec<String>),
}

impl FieldValue {
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Selection => FieldValue::Selection(Vec::new()),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Selection(items) => items.is_empty(),
        }
    }

    /// Selected items; non-blank text counts as a single item
    pub fn items(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(s) if s.trim().is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s.trim()],
            FieldValue::Selection(items) => items.iter().map(String::as_str).collect(),
        }
    }

    pub fn trimmed(&self) -> Self {
        match self {
            FieldValue::Text(s) => FieldValue::Text(s.trim().to_string()),
            FieldValue::Selection(items) => {
                FieldValue::Selection(items.iter().map(|i| i.trim().to_string()).collect())
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Selection(_) => None,
        }
    }
}

/// Field name to value mapping for one form at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    values: BTreeMap<String, FieldValue>,
}

impl FormPayload {
    /// Build a payload from urlencoded pairs, using the schema to decide which
    /// fields collect repeated values. Unknown fields are dropped.
    pub fn from_pairs(schema: &FormSchema, pairs: &[(String, String)]) -> Self {
        let mut payload = Self::default();
        for (name, value) in pairs {
            let Some(rules) = schema.field_rules(name) else {
                continue;
            };
            match rules.kind {
                FieldKind::Text => payload.set_text(rules.field, value.as_str()),
                FieldKind::Selection => {
                    if !value.is_empty() {
                        payload.add_selection(rules.field, value.as_str());
                    }
                }
            }
        }
        payload
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Current value, or the empty value of the expected kind
    pub fn value_or_empty(&self, field: &str, kind: FieldKind) -> FieldValue {
        self.values
            .get(field)
            .cloned()
            .unwrap_or_else(|| FieldValue::empty(kind))
    }

    pub fn text(&self, field: &str) -> &str {
        self.values
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    pub fn selection(&self, field: &str) -> Vec<&str> {
        self.values
            .get(field)
            .map(FieldValue::items)
            .unwrap_or_default()
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.values
            .insert(field.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_selection(&mut self, field: &str, items: Vec<String>) {
        self.values
            .insert(field.to_string(), FieldValue::Selection(items));
    }

    fn add_selection(&mut self, field: &str, item: &str) {
        match self.values.get_mut(field) {
            Some(FieldValue::Selection(items)) => {
                if !items.iter().any(|i| i == item) {
                    items.push(item.to_string());
                }
            }
            _ => self.set_selection(field, vec![item.to_string()]),
        }
    }

    /// Select `item` if absent, deselect it otherwise
    pub fn toggle_selection(&mut self, field: &str, item: &str) {
        match self.values.get_mut(field) {
            Some(FieldValue::Selection(items)) if items.iter().any(|i| i == item) => {
                items.retain(|i| i != item);
            }
            _ => self.add_selection(field, item),
        }
    }

    /// True when every field is blank
    pub fn is_empty(&self) -> bool {
        self.values.values().all(FieldValue::is_blank)
    }

    /// Copy of this payload with secret fields removed, safe to render back
    pub fn without_secrets(&self, schema: &FormSchema) -> Self {
        let values = self
            .values
            .iter()
            .filter(|(name, _)| {
                schema
                    .field_rules(name)
                    .map(|rules| !rules.secret)
                    .unwrap_or(false)
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::forms::validator::FieldRules;

    fn schema() -> FormSchema {
        FormSchema::new("test")
            .field(FieldRules::text("name"))
            .field(FieldRules::secret("password"))
            .field(FieldRules::selection("activities"))
    }

    #[test]
    fn test_from_pairs_groups_selection_and_drops_unknown() {
        let pairs = vec![
            ("name".to_string(), "Sara".to_string()),
            ("activities".to_string(), "chess".to_string()),
            ("activities".to_string(), "robotics".to_string()),
            ("activities".to_string(), "chess".to_string()),
            ("admin".to_string(), "true".to_string()),
        ];
        let payload = FormPayload::from_pairs(&schema(), &pairs);
        assert_eq!(payload.text("name"), "Sara");
        assert_eq!(payload.selection("activities"), vec!["chess", "robotics"]);
        assert!(payload.get("admin").is_none());
    }

    #[test]
    fn test_toggle_selection() {
        let mut payload = FormPayload::default();
        payload.toggle_selection("activities", "chess");
        payload.toggle_selection("activities", "robotics");
        payload.toggle_selection("activities", "chess");
        assert_eq!(payload.selection("activities"), vec!["robotics"]);
    }

    #[test]
    fn test_without_secrets_drops_password() {
        let mut payload = FormPayload::default();
        payload.set_text("name", "Sara");
        payload.set_text("password", "hunter22");
        let safe = payload.without_secrets(&schema());
        assert_eq!(safe.text("name"), "Sara");
        assert!(safe.get("password").is_none());
    }

    #[test]
    fn test_is_empty_ignores_blank_values() {
        let mut payload = FormPayload::default();
        assert!(payload.is_empty());
        payload.set_text("name", "   ");
        assert!(payload.is_empty());
        payload.set_text("name", "x");
        assert!(!payload.is_empty());
    }
}
