//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

/// Result of a successful login
///
/// Produced only on successful authentication; has no lifecycle of its own
/// beyond the caller's use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}
