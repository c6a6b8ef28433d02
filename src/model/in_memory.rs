//! InMemoryModelStore - HashMap-backed model store for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Model, ModelError, ModelStore, Stored};

/// Internal stored representation of a model.
struct StoredModel {
    collection: String,
    id: u64,
    bytes: Vec<u8>,
}

/// Serializable image of the whole store, used by the file-backed store.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub(crate) next_id: u64,
    pub(crate) records: Vec<SnapshotRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SnapshotRecord {
    pub(crate) collection: String,
    pub(crate) id: u64,
    pub(crate) data: serde_json::Value,
}

/// In-memory model store backed by a HashMap.
///
/// Storage key is `"COLLECTION:id"`. Clone-friendly via Arc: clones share
/// both the records and the id sequence.
#[derive(Clone)]
pub struct InMemoryModelStore {
    storage: Arc<RwLock<HashMap<String, StoredModel>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryModelStore {
    /// Create a new empty model store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn make_key(collection: &str, id: u64) -> String {
        format!("{}:{}", collection, id)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoredModel>>, ModelError> {
        self.storage
            .read()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoredModel>>, ModelError> {
        self.storage
            .write()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))
    }

    /// Decode every model of `M`'s collection that satisfies the predicate,
    /// sorted by id.
    fn collect<M: Model>(
        storage: &HashMap<String, StoredModel>,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Stored<M>>, ModelError> {
        let mut results = Vec::new();

        for stored in storage.values() {
            if stored.collection != M::COLLECTION {
                continue;
            }
            let data: M = serde_json::from_slice(&stored.bytes)?;
            if predicate(&data) {
                results.push(Stored::new(stored.id, data));
            }
        }

        results.sort_by_key(|s| s.id);
        Ok(results)
    }

    /// Capture the full contents of the store.
    pub(crate) fn snapshot(&self) -> Result<Snapshot, ModelError> {
        let storage = self.read()?;

        let mut records = storage
            .values()
            .map(|stored| {
                Ok(SnapshotRecord {
                    collection: stored.collection.clone(),
                    id: stored.id,
                    data: serde_json::from_slice(&stored.bytes)?,
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;
        records.sort_by(|a, b| (a.collection.as_str(), a.id).cmp(&(b.collection.as_str(), b.id)));

        Ok(Snapshot {
            next_id: self.next_id.load(Ordering::SeqCst),
            records,
        })
    }

    /// Build a store from a snapshot. The id sequence resumes past the
    /// highest id seen, even if the recorded `next_id` is behind.
    pub(crate) fn from_snapshot(snapshot: Snapshot) -> Result<Self, ModelError> {
        let mut storage = HashMap::with_capacity(snapshot.records.len());
        let mut next_id = snapshot.next_id.max(1);

        for record in snapshot.records {
            let key = Self::make_key(&record.collection, record.id);
            if storage.contains_key(&key) {
                return Err(ModelError::Serde(format!("duplicate record {}", key)));
            }
            let after = record.id.checked_add(1).ok_or_else(|| {
                ModelError::Serde(format!("record {} leaves no room for new ids", key))
            })?;
            next_id = next_id.max(after);
            let bytes = serde_json::to_vec(&record.data)?;
            storage.insert(
                key,
                StoredModel {
                    collection: record.collection,
                    id: record.id,
                    bytes,
                },
            );
        }

        Ok(Self {
            storage: Arc::new(RwLock::new(storage)),
            next_id: Arc::new(AtomicU64::new(next_id)),
        })
    }

    /// The encoded record stored under `collection:id`, if any.
    pub(crate) fn raw(&self, collection: &str, id: u64) -> Result<Option<Vec<u8>>, ModelError> {
        let storage = self.read()?;
        Ok(storage
            .get(&Self::make_key(collection, id))
            .map(|stored| stored.bytes.clone()))
    }

    /// Put `collection:id` back to a previously captured state: the given
    /// bytes, or no record at all.
    pub(crate) fn restore_raw(
        &self,
        collection: &str,
        id: u64,
        bytes: Option<Vec<u8>>,
    ) -> Result<(), ModelError> {
        let key = Self::make_key(collection, id);
        let mut storage = self.write()?;

        match bytes {
            Some(bytes) => {
                storage.insert(
                    key,
                    StoredModel {
                        collection: collection.to_string(),
                        id,
                        bytes,
                    },
                );
            }
            None => {
                storage.remove(&key);
            }
        }
        Ok(())
    }
}

impl ModelStore for InMemoryModelStore {
    fn insert_model<M: Model>(&self, model: &M) -> Result<Stored<M>, ModelError> {
        let bytes = serde_json::to_vec(model)?;

        let mut storage = self.write()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        storage.insert(
            Self::make_key(M::COLLECTION, id),
            StoredModel {
                collection: M::COLLECTION.to_string(),
                id,
                bytes,
            },
        );
        debug!(collection = M::COLLECTION, id, "model inserted");

        Ok(Stored::new(id, model.clone()))
    }

    fn get_model<M: Model>(&self, id: u64) -> Result<Option<Stored<M>>, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self.read()?;

        match storage.get(&key) {
            Some(stored) => {
                let data: M = serde_json::from_slice(&stored.bytes)?;
                Ok(Some(Stored::new(id, data)))
            }
            None => Ok(None),
        }
    }

    fn all_models<M: Model>(&self) -> Result<Vec<Stored<M>>, ModelError> {
        let storage = self.read()?;
        Self::collect(&storage, &|_: &M| true)
    }

    fn overwrite_model<M: Model>(&self, id: u64, model: &M) -> Result<bool, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let bytes = serde_json::to_vec(model)?;

        let mut storage = self.write()?;
        match storage.get_mut(&key) {
            Some(stored) => {
                stored.bytes = bytes;
                debug!(collection = M::COLLECTION, id, "model overwritten");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_model<M: Model>(&self, id: u64) -> Result<bool, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write()?;

        let existed = storage.remove(&key).is_some();
        if existed {
            debug!(collection = M::COLLECTION, id, "model deleted");
        }
        Ok(existed)
    }

    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Stored<M>>, ModelError> {
        let storage = self.read()?;
        Self::collect(&storage, predicate)
    }

    fn any_model<M: Model>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<bool, ModelError> {
        let storage = self.read()?;

        for stored in storage.values() {
            if stored.collection != M::COLLECTION {
                continue;
            }
            let data: M = serde_json::from_slice(&stored.bytes)?;
            if predicate(&data) {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
