//! Repository abstraction
//!
//! Uniform lookup-by-identifier over interchangeable backing stores.
//! Backends are selected at construction time and share the single-method
//! [`Repository`] contract; backend-specific failures never cross this
//! boundary (see [`crate::error::RepositoryError`]).

pub mod faulty;
pub mod sqlite;
pub mod vec;

pub use faulty::FaultyRepository;
pub use sqlite::SqliteRepository;
pub use vec::VecRepository;

use crate::error::RepositoryError;

/// Lookup-by-identifier capability implemented by every backing store
pub trait Repository<T> {
    /// Returns at most one entity matching `id`, or `None` when absent
    ///
    /// Callers rely on at-most-one semantics even when the underlying store
    /// would match multiple rows for the same identifier.
    fn get(&self, id: &str) -> Result<Option<T>, RepositoryError>;
}
