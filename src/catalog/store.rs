//! MediaStore - typed persistence of media items over any model store.

use tracing::debug;

use crate::media::{MediaFilter, MediaItem};
use crate::model::{ModelError, ModelStore, ModelsExt, Stored};

/// Keyed collection of media items with the composite filter query.
#[derive(Clone)]
pub struct MediaStore<S> {
    store: S,
}

impl<S: ModelStore> MediaStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store a new item and return its freshly assigned id.
    pub fn insert(&self, item: &MediaItem) -> Result<u64, ModelError> {
        Ok(self.store.models::<MediaItem>().insert(item)?.id)
    }

    pub fn fetch_by_id(&self, id: u64) -> Result<Option<Stored<MediaItem>>, ModelError> {
        self.store.models::<MediaItem>().get(id)
    }

    /// Every item, in insertion order.
    pub fn fetch_all(&self) -> Result<Vec<Stored<MediaItem>>, ModelError> {
        self.store.models::<MediaItem>().all()
    }

    /// Replace all fields of an existing item. Returns false if `id` is absent.
    pub fn overwrite(&self, id: u64, item: &MediaItem) -> Result<bool, ModelError> {
        self.store.models::<MediaItem>().overwrite(id, item)
    }

    pub fn delete_by_id(&self, id: u64) -> Result<bool, ModelError> {
        self.store.models::<MediaItem>().delete(id)
    }

    pub fn exists_by_title_ignore_case(&self, title: &str) -> Result<bool, ModelError> {
        let wanted = title.to_lowercase();
        self.store
            .models::<MediaItem>()
            .any(&|item| item.title.to_lowercase() == wanted)
    }

    /// Items matching every present predicate of `filter`.
    pub fn filter(&self, filter: &MediaFilter) -> Result<Vec<Stored<MediaItem>>, ModelError> {
        if filter.is_unconstrained() {
            return self.fetch_all();
        }
        let results = self
            .store
            .models::<MediaItem>()
            .find(&|item| filter.matches(item))?;
        debug!(?filter, matched = results.len(), "filtered media items");
        Ok(results)
    }
}
