use thiserror::Error;

use super::number_kind::NumberKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Invalid {kind} value: '{text}'")]
    Parse { text: String, kind: NumberKind },

    #[error("NaN is not a valid {0} field value")]
    NotANumber(NumberKind),

    #[error("Set query on field '{0}' requires at least one value")]
    EmptySet(String),

    #[error("Can not sort on field '{field}': {reason}")]
    UnsortableField { field: String, reason: &'static str },

    #[error("Can not use field cache on field '{field}': {reason}")]
    FieldCacheUnavailable { field: String, reason: &'static str },

    #[error("Multi-value selector requires at least one value")]
    EmptyMultiValue,

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: NumberKind, got: NumberKind },

    #[error("Invalid encoded length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// The index engine handed back a field without a retrievable numeric value.
    #[error("Unexpected state. Field: '{0}'")]
    InternalInvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
