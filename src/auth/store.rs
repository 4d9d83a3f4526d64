//! Person persistence wiring
//!
//! Canonical row mapping for identity records and the glue between
//! [`StoreConfig`] and a SQLite-backed person repository.

use log::{error, info};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

use super::credentials::Person;
use crate::config::StoreConfig;
use crate::error::RepositoryError;
use crate::repository::SqliteRepository;

/// Maps a persons row to a [`Person`]
///
/// Column order: id, email, password_hash, status.
pub fn person_row_mapper(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        status: row.get(3)?,
    })
}

/// Binds a [`Person`] for insertion, in the same column order as the mapper
pub fn person_row_binder(person: &Person) -> Vec<Value> {
    vec![
        person.id.clone().into(),
        person.email.clone().into(),
        person.password_hash.clone().into(),
        person.status.clone().into(),
    ]
}

/// Opens the configured database and wires a person repository keyed by the
/// configured email column
///
/// The repository owns the connection and closes it on drop.
pub fn open_person_repository(
    config: &StoreConfig,
) -> Result<SqliteRepository<'static, Person>, RepositoryError> {
    let conn = Connection::open(&config.database_path).map_err(|e| {
        error!("failed to open database {}: {}", config.database_path, e);
        RepositoryError::new("Database error")
    })?;

    info!(
        "person repository ready: {} (table {}, lookup column {})",
        config.database_path, config.table, config.email_column
    );
    Ok(SqliteRepository::with_owned_connection(
        conn,
        config.table.clone(),
        config.email_column.clone(),
        person_row_mapper,
    ))
}
