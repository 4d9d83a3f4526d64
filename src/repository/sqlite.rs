//! SQLite-backed repository
//!
//! Equality lookups against a configured table and column, mapping rows to
//! entities through a caller-supplied mapper. Every backend failure is logged
//! and re-signalled uniformly as `RepositoryError("Database error")` so that
//! callers never see SQLite-specific detail.
//!
//! A single connection must not serve more than one in-flight lookup at a
//! time; callers needing concurrency pool or serialize connections.

use log::error;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row};

use super::Repository;
use crate::error::RepositoryError;

/// Maps one result row to an entity
pub type RowMapper<T> = Box<dyn Fn(&Row<'_>) -> rusqlite::Result<T>>;

/// Connection handle that is either owned by the repository or borrowed
/// from the caller
///
/// An owned connection is closed when the repository is dropped; a borrowed
/// one outlives the repository and remains the caller's responsibility.
enum ConnectionHandle<'c> {
    Owned(Connection),
    Borrowed(&'c Connection),
}

impl ConnectionHandle<'_> {
    fn connection(&self) -> &Connection {
        match self {
            ConnectionHandle::Owned(conn) => conn,
            ConnectionHandle::Borrowed(conn) => conn,
        }
    }
}

/// Repository over a SQLite table, keyed by one lookup column
///
/// `table` and `column` are interpolated into SQL text and must come from
/// trusted configuration, not user input (see `StoreConfig::validate`).
pub struct SqliteRepository<'c, T> {
    conn: ConnectionHandle<'c>,
    table: String,
    column: String,
    mapper: RowMapper<T>,
}

impl<'c, T> SqliteRepository<'c, T> {
    /// Repository over a caller-owned connection
    pub fn new(
        conn: &'c Connection,
        table: impl Into<String>,
        column: impl Into<String>,
        mapper: impl Fn(&Row<'_>) -> rusqlite::Result<T> + 'static,
    ) -> Self {
        Self {
            conn: ConnectionHandle::Borrowed(conn),
            table: table.into(),
            column: column.into(),
            mapper: Box::new(mapper),
        }
    }

    /// Repository that owns its connection and closes it on drop
    pub fn with_owned_connection(
        conn: Connection,
        table: impl Into<String>,
        column: impl Into<String>,
        mapper: impl Fn(&Row<'_>) -> rusqlite::Result<T> + 'static,
    ) -> SqliteRepository<'static, T> {
        SqliteRepository {
            conn: ConnectionHandle::Owned(conn),
            table: table.into(),
            column: column.into(),
            mapper: Box::new(mapper),
        }
    }

    /// Inserts an entity, with `binder` supplying one value per table column
    ///
    /// Population helper for seeding and tests; not part of the read contract.
    pub fn insert(
        &self,
        item: &T,
        binder: impl Fn(&T) -> Vec<Value>,
    ) -> Result<(), RepositoryError> {
        let values = binder(item);
        let placeholders = (1..=values.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("INSERT INTO {} VALUES ({})", self.table, placeholders);

        self.conn
            .connection()
            .execute(&sql, rusqlite::params_from_iter(values))
            .map_err(|e| {
                error!("insert into {} failed: {}", self.table, e);
                RepositoryError::new("Database error")
            })?;
        Ok(())
    }
}

impl<T> Repository<T> for SqliteRepository<'_, T> {
    fn get(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ?1",
            self.table, self.column
        );

        // query_row consumes the first row only, preserving at-most-one
        // semantics even if the column is not unique.
        self.conn
            .connection()
            .query_row(&sql, [id], |row| (self.mapper)(row))
            .optional()
            .map_err(|e| {
                error!("lookup on {}.{} failed: {}", self.table, self.column, e);
                RepositoryError::new("Database error")
            })
    }
}
