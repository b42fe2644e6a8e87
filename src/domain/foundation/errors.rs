//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating birth input at the boundary.
///
/// Once an input has passed validation the chart computation cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' has invalid format, expected {expected}")]
    InputFormat { field: String, expected: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    InputRange {
        field: String,
        min: String,
        max: String,
        actual: String,
    },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn input_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        ValidationError::InputFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn input_range(
        field: impl Into<String>,
        min: impl fmt::Display,
        max: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        ValidationError::InputRange {
            field: field.into(),
            min: min.to_string(),
            max: max.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::InputFormat { field, .. }
            | ValidationError::InputRange { field, .. } => field,
        }
    }

    /// Error code matching this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::InputFormat { .. } => ErrorCode::InputFormat,
            ValidationError::InputRange { .. } => ErrorCode::InputRange,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    MissingField,
    InputFormat,
    InputRange,

    // Infrastructure errors
    InvalidConfiguration,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::InputFormat => "INPUT_FORMAT",
            ErrorCode::InputRange => "INPUT_RANGE",
            ErrorCode::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::new(err.code(), err.to_string()).with_detail("field", field)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_displays_correctly() {
        let err = ValidationError::missing_field("gender");
        assert_eq!(format!("{}", err), "Field 'gender' is required");
    }

    #[test]
    fn input_format_names_expected_format() {
        let err = ValidationError::input_format("birth_date", "YYYY-MM-DD");
        assert_eq!(
            format!("{}", err),
            "Field 'birth_date' has invalid format, expected YYYY-MM-DD"
        );
    }

    #[test]
    fn input_range_names_valid_range() {
        let err = ValidationError::input_range("hour", 0, 23, 24);
        assert_eq!(
            format!("{}", err),
            "Field 'hour' must be between 0 and 23, got 24"
        );
    }

    #[test]
    fn validation_error_maps_to_code() {
        assert_eq!(ValidationError::missing_field("x").code(), ErrorCode::MissingField);
        assert_eq!(ValidationError::input_format("x", "y").code(), ErrorCode::InputFormat);
        assert_eq!(ValidationError::input_range("x", 0, 1, 2).code(), ErrorCode::InputRange);
    }

    #[test]
    fn domain_error_from_validation_keeps_field() {
        let err: DomainError = ValidationError::input_range("longitude", -180, 180, 200).into();
        assert_eq!(err.code, ErrorCode::InputRange);
        assert_eq!(err.details.get("field"), Some(&"longitude".to_string()));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::InternalError, "boom");
        assert_eq!(format!("{}", err), "[INTERNAL_ERROR] boom");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InputFormat), "INPUT_FORMAT");
        assert_eq!(format!("{}", ErrorCode::InvalidConfiguration), "INVALID_CONFIGURATION");
    }
}
