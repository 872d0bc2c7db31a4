// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Durable key/value storage.
//!
//! Every store keeps its whole entity collection as one JSON value under a
//! fixed string key. There is no schema version and no migration of stored
//! values: a shape change means deleting the key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

/// Key holding the logged-in session.
pub const SESSION_KEY: &str = "krithyatha_user";

/// Key holding the full bay layout.
pub const BAY_LAYOUT_KEY: &str = "kmrl-bay-layout";

/// Key holding the full job list.
pub const JOBS_KEY: &str = "kmrl-jobs";

/// Errors raised by durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The underlying store failed to read or write.
    Backend(String),
    /// A stored value could not be parsed.
    Corrupt {
        /// The key holding the bad value.
        key: String,
        /// The parse failure.
        reason: String,
    },
    /// A value could not be serialized.
    Serialization(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "Storage backend error: {msg}"),
            Self::Corrupt { key, reason } => {
                write!(f, "Stored value under '{key}' is corrupt: {reason}")
            }
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// A string-keyed store of string values that survives restarts.
///
/// Reads and writes are synchronous and are never retried by callers.
pub trait DurableStorage: Send {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&mut self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the value under `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used by tests and by servers started without a
/// database file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the raw value under `key` without going through the trait.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and parses the JSON value under `key`.
///
/// # Errors
///
/// Returns `StorageError::Corrupt` if the value does not parse, or the
/// backend error if it cannot be read.
pub fn load_json<T: DeserializeOwned>(
    storage: &mut dyn DurableStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        debug!(key, "No stored value");
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Serializes `value` and stores it under `key`, replacing the whole value.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn persist_json<T: Serialize + ?Sized>(
    storage: &mut dyn DurableStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw: String =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    storage.set_item(key, &raw)
}
