//! Credential sanitization and validation
//!
//! Implements the per-field format rules and the composite credential
//! validator. Field validators report only the first violated rule;
//! the composite checks both fields independently and aggregates their
//! failures instead of stopping at the first.

use log::debug;

use super::credentials::Credentials;
use crate::error::{InvalidArgument, ValidationError, ValidationFailed};

/// Field label used for email violations in aggregated errors
pub const FIELD_EMAIL: &str = "email";
/// Field label used for password violations in aggregated errors
pub const FIELD_PASSWORD: &str = "plainPassword";

/// Whitespace stripped from both ends of raw input
const TRIM_SET: [char; 6] = [' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Sanitizes and validates an email address
///
/// Trims surrounding whitespace and lower-cases the result, then checks the
/// format rules in order: minimum length, `@` present, `.` present, allowed
/// characters. Idempotent on its own output.
pub fn validate_email(raw: &str) -> Result<String, InvalidArgument> {
    let sanitized = raw.trim_matches(TRIM_SET).to_lowercase();

    if sanitized.len() < 6 {
        return Err(InvalidArgument::new("Email must be at least 6 characters"));
    }
    if !sanitized.contains('@') {
        return Err(InvalidArgument::new("Email must contain @"));
    }
    if !sanitized.contains('.') {
        return Err(InvalidArgument::new("Email must contain ."));
    }
    if !sanitized.chars().all(is_valid_email_char) {
        return Err(InvalidArgument::new("Email contains invalid characters"));
    }

    Ok(sanitized)
}

fn is_valid_email_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '@' | '-')
}

/// Sanitizes and validates a password
///
/// Trims surrounding whitespace without changing case, enforces the length
/// window, then scans every character once: an invalid character fails
/// immediately, pre-empting the class-coverage checks. With all characters
/// valid, requires one lowercase letter, one uppercase letter, one digit and
/// one special character, reporting the first missing class in that order.
pub fn validate_password(raw: &str) -> Result<String, InvalidArgument> {
    let sanitized = raw.trim_matches(TRIM_SET).to_string();

    if sanitized.len() < 12 {
        return Err(InvalidArgument::new(
            "Password must be at least 12 characters",
        ));
    }
    if sanitized.len() > 24 {
        return Err(InvalidArgument::new(
            "Password must be at most 24 characters",
        ));
    }

    let mut has_lowercase = false;
    let mut has_uppercase = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in sanitized.chars() {
        match c {
            'a'..='z' => has_lowercase = true,
            'A'..='Z' => has_uppercase = true,
            '0'..='9' => has_digit = true,
            '.' | '-' | '_' | '+' | ',' | ';' | ':' => has_special = true,
            _ => {
                return Err(InvalidArgument::new("Password contains invalid characters"));
            }
        }
    }

    if !has_lowercase {
        return Err(InvalidArgument::new(
            "Password must contain at least one lowercase letter",
        ));
    }
    if !has_uppercase {
        return Err(InvalidArgument::new(
            "Password must contain at least one uppercase letter",
        ));
    }
    if !has_digit {
        return Err(InvalidArgument::new(
            "Password must contain at least one digit",
        ));
    }
    if !has_special {
        return Err(InvalidArgument::new(
            "Password must contain at least one special character",
        ));
    }

    Ok(sanitized)
}

/// Sanitizes and validates both credential fields, aggregating failures
///
/// Both fields are checked independently; failures are collected in
/// email-then-password order, one entry per failing field. The sole entry
/// point callers should use before constructing a login attempt.
pub fn validate_credentials(credentials: &Credentials) -> Result<Credentials, ValidationFailed> {
    let email = validate_email(&credentials.email);
    let password = validate_password(&credentials.plain_password);

    match (email, password) {
        (Ok(email), Ok(plain_password)) => Ok(Credentials {
            email,
            plain_password,
        }),
        (email, password) => {
            let mut errors = Vec::new();
            if let Err(e) = email {
                errors.push(ValidationError::new(FIELD_EMAIL, e.into_message()));
            }
            if let Err(e) = password {
                errors.push(ValidationError::new(FIELD_PASSWORD, e.into_message()));
            }
            debug!("credential validation failed with {} error(s)", errors.len());
            Err(ValidationFailed::new(errors))
        }
    }
}
