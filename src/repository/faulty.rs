//! Fault-injection repository
//!
//! A stub backend whose lookups always fail. Exists so upstream components
//! can be tested against storage failure without a real backing store.

use std::marker::PhantomData;

use super::Repository;
use crate::error::RepositoryError;

/// Repository whose `get` always fails with `RepositoryError("oops")`
pub struct FaultyRepository<T> {
    _marker: PhantomData<T>,
}

impl<T> FaultyRepository<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FaultyRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Repository<T> for FaultyRepository<T> {
    fn get(&self, _id: &str) -> Result<Option<T>, RepositoryError> {
        Err(RepositoryError::new("oops"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_always_fails() {
        let repo: FaultyRepository<String> = FaultyRepository::new();
        let error = repo.get("anything").unwrap_err();
        assert_eq!(error.message(), "oops");
    }
}
