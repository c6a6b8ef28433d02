//! JsonFileModelStore - In-memory store persisted to a JSON snapshot file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use super::in_memory::{InMemoryModelStore, Snapshot};
use super::{Model, ModelError, ModelStore, Stored};

/// A model store that keeps everything in memory and rewrites a JSON
/// snapshot file after every successful mutation.
///
/// The file is written to a sibling temp file first and then renamed over
/// the target, so a crash mid-write leaves the previous snapshot intact.
/// A mutation whose snapshot cannot be written is rolled back in memory
/// before the error is returned. Reads never touch the disk.
#[derive(Clone)]
pub struct JsonFileModelStore {
    inner: InMemoryModelStore,
    path: PathBuf,
    // Held from a mutation until its snapshot is on disk or rolled back.
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileModelStore {
    /// Open the store at `path`, loading the snapshot if the file exists.
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref().to_path_buf();

        let inner = match fs::read(&path) {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
                info!(
                    path = %path.display(),
                    records = snapshot.records.len(),
                    "loaded model snapshot"
                );
                InMemoryModelStore::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no snapshot found, starting empty");
                InMemoryModelStore::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            inner,
            path,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents to disk.
    pub fn flush(&self) -> Result<(), ModelError> {
        let _guard = self.lock_writes()?;
        self.write_snapshot()
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, ModelError> {
        self.write_lock
            .lock()
            .map_err(|_| ModelError::Storage("write lock poisoned".into()))
    }

    fn write_snapshot(&self) -> Result<(), ModelError> {
        let snapshot = self.inner.snapshot()?;
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), records = snapshot.records.len(), "snapshot written");
        Ok(())
    }

    /// Persist a mutation of `collection:id`, or restore `previous` in
    /// memory if the snapshot cannot be written.
    fn commit(
        &self,
        collection: &str,
        id: u64,
        previous: Option<Vec<u8>>,
    ) -> Result<(), ModelError> {
        if let Err(err) = self.write_snapshot() {
            warn!(
                path = %self.path.display(),
                collection,
                id,
                error = %err,
                "snapshot write failed, rolling back"
            );
            self.inner.restore_raw(collection, id, previous)?;
            return Err(err);
        }
        Ok(())
    }
}

impl ModelStore for JsonFileModelStore {
    fn insert_model<M: Model>(&self, model: &M) -> Result<Stored<M>, ModelError> {
        let _guard = self.lock_writes()?;
        let stored = self.inner.insert_model(model)?;
        self.commit(M::COLLECTION, stored.id, None)?;
        Ok(stored)
    }

    fn get_model<M: Model>(&self, id: u64) -> Result<Option<Stored<M>>, ModelError> {
        self.inner.get_model(id)
    }

    fn all_models<M: Model>(&self) -> Result<Vec<Stored<M>>, ModelError> {
        self.inner.all_models()
    }

    fn overwrite_model<M: Model>(&self, id: u64, model: &M) -> Result<bool, ModelError> {
        let _guard = self.lock_writes()?;
        let Some(previous) = self.inner.raw(M::COLLECTION, id)? else {
            return Ok(false);
        };
        self.inner.overwrite_model(id, model)?;
        self.commit(M::COLLECTION, id, Some(previous))?;
        Ok(true)
    }

    fn delete_model<M: Model>(&self, id: u64) -> Result<bool, ModelError> {
        let _guard = self.lock_writes()?;
        let Some(previous) = self.inner.raw(M::COLLECTION, id)? else {
            return Ok(false);
        };
        self.inner.delete_model::<M>(id)?;
        self.commit(M::COLLECTION, id, Some(previous))?;
        Ok(true)
    }

    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Stored<M>>, ModelError> {
        self.inner.find_models(predicate)
    }

    fn any_model<M: Model>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<bool, ModelError> {
        self.inner.any_model(predicate)
    }
}
