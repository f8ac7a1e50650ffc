use thiserror::Error;

/// A single field that failed draft validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level validation failure collected before any network call.
///
/// Built up by `Draft::validate`; a draft that produces one of these is
/// rejected locally and the collection collaborator is never contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("validation failed for {} field(s)", .fields.len())]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up the failure recorded for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Collapse into a `Result`: `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
