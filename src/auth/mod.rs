//! Authentication core
//!
//! Credential sanitization/validation, identity records, and the login
//! service that composes them with a person repository.

pub mod credentials;
pub mod results;
pub mod service;
pub mod store;
pub mod validator;

pub use credentials::{Credentials, Person};
pub use results::Session;
pub use service::{LoginService, PasswordVerifier};
pub use validator::{validate_credentials, validate_email, validate_password};
