use super::{FormKind, FormPayload};
use crate::features::forms::validator::{ValidationError, Verdict};

/// Field values a user is editing in one form.
///
/// Created empty, mutated field by field, and reset to empty once a
/// submission is accepted. A rejected submission leaves every value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    kind: FormKind,
    payload: FormPayload,
}

impl FormSession {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            payload: FormPayload::default(),
        }
    }

    pub fn with_payload(kind: FormKind, payload: FormPayload) -> Self {
        Self { kind, payload }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn payload(&self) -> &FormPayload {
        &self.payload
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.payload.set_text(field, value);
    }

    pub fn toggle_selection(&mut self, field: &str, item: &str) {
        self.payload.toggle_selection(field, item);
    }

    pub fn validate(&self) -> Verdict {
        self.kind.schema().validate(&self.payload)
    }

    /// Validate the whole payload. On acceptance the payload is handed out
    /// and the session is back to its initial empty state.
    pub fn submit(&mut self) -> Result<FormPayload, ValidationError> {
        self.validate().into_result()?;
        Ok(std::mem::take(&mut self.payload))
    }

    /// Put a previously submitted payload back, e.g. after delivery failed
    pub fn restore(&mut self, payload: FormPayload) {
        self.payload = payload;
    }

    #[cfg(test)]
    pub fn is_pristine(&self) -> bool {
        self.payload.is_empty()
    }
}
