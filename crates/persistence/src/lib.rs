// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-backed durable storage for the depot state.
//!
//! The depot keeps each entity collection as one JSON document under a
//! string key. This crate stores those documents in a single
//! `storage_entries` table, one row per key, and implements
//! [`kmrl_ragi::DurableStorage`] on top of it.
//!
//! In-memory databases are used by tests and by servers started without a
//! database file. Each in-memory instance is isolated from every other.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use diesel::prelude::*;
use kmrl_ragi::{DurableStorage, StorageError};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

mod backend;
mod diesel_schema;
mod error;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use error::PersistenceError;

use diesel_schema::storage_entries;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Insertable)]
#[diesel(table_name = storage_entries)]
struct NewStorageEntry<'a> {
    storage_key: &'a str,
    storage_value: &'a str,
    updated_at: &'a str,
}

/// A stored key and when it was last written.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct StoredKey {
    pub key: String,
    pub updated_at: String,
}

/// Durable key/value storage in a `SQLite` database.
pub struct SqliteStorage {
    conn: SqliteConnection,
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage").finish_non_exhaustive()
    }
}

impl SqliteStorage {
    /// Opens a fresh, isolated in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:kmrl_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Opens (creating if needed) a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Lists every stored key with its last write time, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stored_keys(&mut self) -> Result<Vec<StoredKey>, PersistenceError> {
        Ok(storage_entries::table
            .select((storage_entries::storage_key, storage_entries::updated_at))
            .order(storage_entries::storage_key.asc())
            .load::<StoredKey>(&mut self.conn)?)
    }

    fn read(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(storage_entries::table
            .find(key)
            .select(storage_entries::storage_value)
            .first::<String>(&mut self.conn)
            .optional()?)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let updated_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

        diesel::replace_into(storage_entries::table)
            .values(&NewStorageEntry {
                storage_key: key,
                storage_value: value,
                updated_at: &updated_at,
            })
            .execute(&mut self.conn)?;
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), PersistenceError> {
        let removed: usize =
            diesel::delete(storage_entries::table.find(key)).execute(&mut self.conn)?;
        debug!(key, removed, "Deleted value");
        Ok(())
    }
}

impl DurableStorage for SqliteStorage {
    fn get_item(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        self.read(key).map_err(StorageError::from)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write(key, value).map_err(StorageError::from)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.delete(key).map_err(StorageError::from)
    }
}
