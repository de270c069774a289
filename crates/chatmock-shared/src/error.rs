use thiserror::Error;

use crate::constants::*;

/// A single rejected field of an input descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Field name as it appears in the input (`time`, `content`, ...).
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn time_format(field: &str) -> Self {
        Self::new(field, TIME_FORMAT_ERROR)
    }

    pub fn not_boolean(field: &str) -> Self {
        Self::new(field, BOOLEAN_SENDER_ERROR)
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new(field, format!("{field} must be a string"))
    }

    pub fn content_required() -> Self {
        Self::new("content", CONTENT_REQUIRED_ERROR)
    }

    pub fn image_required() -> Self {
        Self::new("imageUrl", IMAGE_REQUIRED_ERROR)
    }

    pub fn invalid_type() -> Self {
        Self::new("type", MESSAGE_TYPE_ERROR)
    }

    pub fn name_required(field: &str) -> Self {
        Self::new(field, NAME_REQUIRED_ERROR)
    }
}

/// Every violation found in one descriptor, in rule order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// A field violation attributed to one element of a bulk import.
///
/// `index` is zero-based; the rendered message counts from one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("element {} ({}): {}", .index + 1, .error.field, .error.reason)]
pub struct FieldError {
    pub index: usize,
    pub error: ValidationError,
}

/// Bulk import failures, from the outermost layer inwards.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Rejected by name and MIME type before reading.
    #[error("Unsupported file '{0}': please select a valid JSON file")]
    UnsupportedFile(String),

    /// The document is not JSON at all.
    #[error("Invalid JSON format. Please check your file and try again. ({0})")]
    InvalidJson(#[from] serde_json::Error),

    /// Valid JSON, but not a non-empty array.
    #[error("Invalid import document: {0}")]
    Shape(String),

    /// Well-shaped array with failing elements.
    #[error("Validation errors: {}", join_errors(.0))]
    Validation(Vec<FieldError>),
}

impl ImportError {
    /// Field-level failures; empty for the outer error classes.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors<E: ToString>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
