//! Vector-backed repository
//!
//! Holds entities in an owned, ordered `Vec` behind a caller-supplied match
//! predicate. Intended for single-threaded seeding and tests: `add` and `get`
//! must not interleave without external synchronization.

use super::Repository;
use crate::error::RepositoryError;

/// Match predicate deciding whether an entity answers to an identifier
pub type Filter<T> = Box<dyn Fn(&T, &str) -> bool>;

/// In-memory repository over an ordered sequence of entities
pub struct VecRepository<T> {
    items: Vec<T>,
    filter: Filter<T>,
}

impl<T> VecRepository<T> {
    /// Empty repository with the given match predicate
    pub fn new(filter: impl Fn(&T, &str) -> bool + 'static) -> Self {
        Self::with_items(filter, Vec::new())
    }

    /// Repository seeded with initial entities
    pub fn with_items(filter: impl Fn(&T, &str) -> bool + 'static, items: Vec<T>) -> Self {
        Self {
            items,
            filter: Box::new(filter),
        }
    }

    /// Appends an entity to the backing sequence
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T: Clone> Repository<T> for VecRepository<T> {
    /// Returns the first entity matching `id`; never errors
    fn get(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(self
            .items
            .iter()
            .find(|item| (self.filter)(item, id))
            .cloned())
    }
}
