//! Credential and identity records
//!
//! Data types flowing through the authentication pipeline.

/// Login credentials for a single attempt
///
/// Transient: constructed per attempt and never persisted as-is. Values are
/// raw until they have passed through
/// [`validate_credentials`](crate::auth::validator::validate_credentials);
/// only sanitized credentials may reach a repository lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub plain_password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, plain_password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            plain_password: plain_password.into(),
        }
    }
}

/// Stored identity record
///
/// Owned by the backing store; the login service only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub status: String,
}
