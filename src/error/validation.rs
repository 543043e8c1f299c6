use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending request field, as it appears on the wire.
    pub field: &'static str,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

/// Request payload validation failure.
///
/// Collects every failed rule for a payload so the response can report all of
/// them at once rather than stopping at the first. Surfaced as 400 Bad Request
/// with per-field messages.
#[derive(Error, Debug, Default)]
#[error("validation failed")]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failed rule against a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Finishes a validation pass: `Ok(())` when no rule failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_field_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
