//! Models - Storage-backed records keyed by a store-assigned id.
//!
//! A model is any serde-serializable struct. The store owns identity: every
//! insert draws a fresh `u64` from a monotonically increasing sequence, so
//! ids are never reused, not even after deletion.
//!
//! ## Example
//!
//! ```ignore
//! use mediahub::{InMemoryModelStore, Model, ModelsExt};
//!
//! #[derive(Serialize, Deserialize, Clone, Model)]
//! #[model(collection = "bookmarks")]
//! struct Bookmark {
//!     pub url: String,
//! }
//!
//! let store = InMemoryModelStore::new();
//! let saved = store.models::<Bookmark>().insert(&bookmark)?;
//! let loaded = store.models::<Bookmark>().get(saved.id)?;
//! ```

mod file;
mod in_memory;
mod model_repository;
mod store;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// Trait for types that can be stored as models.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this model type (e.g., "media_items").
    /// Maps to a table in SQL, a collection in MongoDB, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;
}

/// A model paired with the id the store assigned to it.
///
/// Serializes flat: `{ "id": 7, ...model fields }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: u64,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Stored<T> {
    pub fn new(id: u64, data: T) -> Self {
        Self { id, data }
    }
}

/// Error type for model store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error (e.g. a poisoned lock).
    Storage(String),
    /// Reading or writing the backing file failed.
    Io(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Serde(msg) => write!(f, "model serialization error: {}", msg),
            ModelError::Storage(msg) => write!(f, "model storage error: {}", msg),
            ModelError::Io(msg) => write!(f, "model file error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Io(err.to_string())
    }
}

pub use file::JsonFileModelStore;
pub use in_memory::InMemoryModelStore;
pub use model_repository::{ModelRepository, ModelsExt};
pub use store::ModelStore;
