pub mod json_store;

pub use json_store::JsonStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::StorageError;

/// Abstraction over persistence backends holding keyed textual snapshots.
pub trait StorageBackend: Send + Sync {
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;

    /// Returns the stored payload, or `None` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Store adapter that serializes values and absorbs backend failures.
///
/// A failed write or an unreadable key is logged and otherwise ignored, so a
/// broken store degrades the tracker to in-memory-only operation instead of
/// surfacing an error.
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Opens a store over the default on-disk backend.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(Box::new(JsonStore::new(None)?)))
    }

    /// Serializes `value` and writes it under `key`. Never fails the caller.
    pub fn save<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        let outcome = serde_json::to_string_pretty(value)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.write(key, &json));
        match outcome {
            Ok(()) => tracing::debug!(key, "persisted snapshot"),
            Err(err) => tracing::warn!(
                key,
                error = %err,
                "failed to persist snapshot; keeping in-memory state"
            ),
        }
    }

    /// Reads and deserializes the value under `key`, falling back to
    /// `T::default()` when the key is absent, unreadable, or malformed.
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.backend.read(key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key, error = %err, "stored snapshot is malformed; starting empty");
                    T::default()
                }
            },
            Ok(None) => {
                tracing::debug!(key, "no stored snapshot");
                T::default()
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read snapshot; starting empty");
                T::default()
            }
        }
    }
}
