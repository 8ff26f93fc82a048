//! Data-driven form validation.
//!
//! A [`FormSchema`] is an ordered table of fields, each carrying an ordered
//! list of constraints with the message shown when the constraint fails.
//! [`FormSchema::validate`] walks the table in declaration order and stops at
//! the first failure, so a rejected payload always reports exactly one field.

use serde::Serialize;
use thiserror::Error;
use validator::ValidateLength;

use super::models::{FieldValue, FormPayload};
use crate::shared::validation::{is_valid_email, is_valid_phone};

/// The first rule a payload violated
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating one payload against one schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(ValidationError),
}

impl Verdict {
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(err) => Err(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Non-blank text, or at least one selected item
    Required,
    /// Minimum length in characters
    MinLength(u64),
    /// Maximum length in characters
    MaxLength(u64),
    Email,
    Phone,
    /// At least one item selected
    NonEmptySelection,
    /// Every selected item belongs to the enumeration
    OneOf(&'static [&'static str]),
}

impl Constraint {
    fn holds(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Constraint::Required, v) => !v.is_blank(),
            (Constraint::MinLength(min), FieldValue::Text(s)) => {
                s.validate_length(Some(*min), None, None)
            }
            (Constraint::MaxLength(max), FieldValue::Text(s)) => {
                s.validate_length(None, Some(*max), None)
            }
            (Constraint::Email, FieldValue::Text(s)) => is_valid_email(s),
            (Constraint::Phone, FieldValue::Text(s)) => is_valid_phone(s),
            (Constraint::NonEmptySelection, v) => !v.items().is_empty(),
            (Constraint::OneOf(allowed), v) => v.items().iter().all(|i| allowed.contains(i)),
            // Text constraints never hold for a multi-select value
            (_, FieldValue::Selection(_)) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Selection,
}

/// Ordered rules for a single field
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub kind: FieldKind,
    /// Trim surrounding whitespace before checking (disabled for secrets)
    pub trim: bool,
    /// Never echo the submitted value back to the user
    pub secret: bool,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn text(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::Text,
            trim: true,
            secret: false,
            rules: Vec::new(),
        }
    }

    /// Untrimmed text that is never rendered back
    pub fn secret(field: &'static str) -> Self {
        Self {
            trim: false,
            secret: true,
            ..Self::text(field)
        }
    }

    pub fn selection(field: &'static str) -> Self {
        Self {
            kind: FieldKind::Selection,
            ..Self::text(field)
        }
    }

    pub fn rule(mut self, constraint: Constraint, message: &'static str) -> Self {
        self.rules.push(Rule {
            constraint,
            message,
        });
        self
    }

    pub fn required(self, message: &'static str) -> Self {
        self.rule(Constraint::Required, message)
    }

    pub fn min_length(self, min: u64, message: &'static str) -> Self {
        self.rule(Constraint::MinLength(min), message)
    }

    pub fn max_length(self, max: u64, message: &'static str) -> Self {
        self.rule(Constraint::MaxLength(max), message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.rule(Constraint::Email, message)
    }

    pub fn phone(self, message: &'static str) -> Self {
        self.rule(Constraint::Phone, message)
    }

    pub fn non_empty(self, message: &'static str) -> Self {
        self.rule(Constraint::NonEmptySelection, message)
    }

    pub fn one_of(self, allowed: &'static [&'static str], message: &'static str) -> Self {
        self.rule(Constraint::OneOf(allowed), message)
    }

    /// Check this field, returning the message of the first failing rule
    pub fn check(&self, value: &FieldValue) -> Result<(), &'static str> {
        let normalized = if self.trim { value.trimmed() } else { value.clone() };
        match self
            .rules
            .iter()
            .find(|rule| !rule.constraint.holds(&normalized))
        {
            Some(rule) => Err(rule.message),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSchema {
    pub name: &'static str,
    fields: Vec<FieldRules>,
}

impl FormSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn field_rules(&self, field: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Validate a payload, fail-fast in declaration order
    pub fn validate(&self, payload: &FormPayload) -> Verdict {
        for rules in &self.fields {
            let value = payload.value_or_empty(rules.field, rules.kind);
            if let Err(message) = rules.check(&value) {
                return Verdict::Rejected(ValidationError::new(rules.field, message));
            }
        }
        Verdict::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["a", "b"];

    fn schema() -> FormSchema {
        FormSchema::new("test")
            .field(
                FieldRules::text("first")
                    .min_length(2, "first too short")
                    .max_length(4, "first too long"),
            )
            .field(FieldRules::text("second").email("second not an email"))
            .field(
                FieldRules::selection("tags")
                    .non_empty("pick one")
                    .one_of(ALLOWED, "unknown tag"),
            )
    }

    fn payload(first: &str, second: &str, tags: &[&str]) -> FormPayload {
        let mut p = FormPayload::default();
        p.set_text("first", first);
        p.set_text("second", second);
        p.set_selection("tags", tags.iter().map(|t| t.to_string()).collect());
        p
    }

    #[test]
    fn test_all_valid_is_accepted() {
        assert_eq!(
            schema().validate(&payload("abc", "x@y.org", &["a"])),
            Verdict::Accepted
        );
    }

    #[test]
    fn test_first_declared_violation_wins() {
        let verdict = schema().validate(&payload("a", "nope", &[]));
        assert_eq!(
            verdict,
            Verdict::Rejected(ValidationError::new("first", "first too short"))
        );
    }

    #[test]
    fn test_rules_within_a_field_run_in_order() {
        let schema = FormSchema::new("order").field(
            FieldRules::text("x")
                .email("bad email")
                .max_length(3, "too long"),
        );
        let mut p = FormPayload::default();
        p.set_text("x", "not-an-email");
        assert_eq!(
            schema.validate(&p).into_result().unwrap_err().message,
            "bad email"
        );
    }

    #[test]
    fn test_trimming_applies_before_length() {
        let verdict = schema().validate(&payload("  a  ", "x@y.org", &["a"]));
        assert_eq!(
            verdict.into_result().unwrap_err().message,
            "first too short"
        );
    }

    #[test]
    fn test_secret_fields_are_not_trimmed() {
        let rules = FieldRules::secret("password").min_length(6, "short");
        assert!(rules.check(&FieldValue::Text("  ab  ".to_string())).is_ok());
        assert!(rules.secret);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rules = FieldRules::text("name").max_length(3, "too long");
        assert!(rules.check(&FieldValue::Text("éèê".to_string())).is_ok());
    }

    #[test]
    fn test_selection_outside_enumeration_is_rejected() {
        let verdict = schema().validate(&payload("abc", "x@y.org", &["a", "z"]));
        assert_eq!(verdict.into_result().unwrap_err().message, "unknown tag");
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let verdict = schema().validate(&FormPayload::default());
        assert_eq!(
            verdict.into_result().unwrap_err(),
            ValidationError::new("first", "first too short")
        );
    }

    #[test]
    fn test_text_constraint_on_selection_fails() {
        let rules = FieldRules::text("name").max_length(10, "bad");
        assert_eq!(
            rules.check(&FieldValue::Selection(vec!["a".to_string()])),
            Err("bad")
        );
    }

    #[test]
    fn test_required_rejects_blank_text() {
        let rules = FieldRules::text("code").required("required");
        assert_eq!(
            rules.check(&FieldValue::Text("   ".to_string())),
            Err("required")
        );
        assert!(rules.check(&FieldValue::Text("X1".to_string())).is_ok());
    }
}
