//! Error types
//!
//! Defines domain-specific error types for each module of the authentication core.

use std::fmt;

/// Single-field format violation raised by the field validators
///
/// Always folded into [`ValidationFailed`] by the composite validator;
/// never reaches a login caller directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvalidArgument {}

/// One failed rule for one credential field
///
/// `field` carries the API-facing label (`"email"` or `"plainPassword"`),
/// not a Rust identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Aggregated field violations, in email-then-password order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailed {
    errors: Vec<ValidationError>,
}

impl ValidationFailed {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailed {}

/// Repository module errors
///
/// A single uniform kind: backing stores must never leak backend-specific
/// failure detail past the repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    message: String,
}

impl RepositoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repository error: {}", self.message)
    }
}

impl std::error::Error for RepositoryError {}

/// Login service errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// One or more credential fields failed validation
    ValidationFailed(Vec<ValidationError>),
    /// Credentials are well-formed but do not match a known account
    Unauthorized(String),
    /// The backing store failed during authentication
    ServerFailure(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::ValidationFailed(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
            LoginError::Unauthorized(reason) => write!(f, "Unauthorized: {}", reason),
            LoginError::ServerFailure(reason) => write!(f, "Server failure: {}", reason),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<ValidationFailed> for LoginError {
    fn from(failed: ValidationFailed) -> Self {
        LoginError::ValidationFailed(failed.into_errors())
    }
}
