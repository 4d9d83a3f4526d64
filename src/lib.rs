//! Minimal authentication core
//!
//! Sanitizes and validates user credentials, authenticates them against a
//! pluggable person repository, and reports outcomes through a small typed
//! error taxonomy. No hashing, tokens or rate limiting live here; the stored
//! password hash is compared through a pluggable verifier.

pub mod auth;
pub mod config;
pub mod error;
pub mod repository;

pub use auth::{Credentials, LoginService, Person, Session};
pub use error::{LoginError, RepositoryError, ValidationError, ValidationFailed};
pub use repository::Repository;
