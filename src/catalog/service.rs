//! CatalogService - business rules on top of the media store.

use std::sync::Mutex;

use tracing::{info, instrument, warn};

use super::error::CatalogError;
use super::store::MediaStore;
use crate::media::{FilterParams, MediaFilter, MediaItem, MediaItemRequest};
use crate::model::{ModelError, ModelStore, Stored};

/// Business-rule layer for the media catalogue.
///
/// Title uniqueness is checked at creation only; `update` may leave two
/// items with the same title.
pub struct CatalogService<S> {
    store: MediaStore<S>,
    // Serialises the duplicate-title check with the insert that follows it.
    create_gate: Mutex<()>,
}

impl<S: ModelStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: MediaStore::new(store),
            create_gate: Mutex::new(()),
        }
    }

    /// Validate and store a new item.
    ///
    /// Fails with [`CatalogError::DuplicateTitle`] if a live item has the
    /// same title under case-insensitive comparison.
    #[instrument(skip(self, request), fields(title = ?request.title))]
    pub fn create(&self, request: MediaItemRequest) -> Result<Stored<MediaItem>, CatalogError> {
        let item = request.into_item()?;

        let _gate = self
            .create_gate
            .lock()
            .map_err(|_| ModelError::Storage("create gate poisoned".into()))?;

        if self.store.exists_by_title_ignore_case(&item.title)? {
            warn!("rejected duplicate title");
            return Err(CatalogError::DuplicateTitle(item.title));
        }

        let id = self.store.insert(&item)?;
        info!(id, "media item created");
        Ok(Stored::new(id, item))
    }

    pub fn get_by_id(&self, id: u64) -> Result<Option<Stored<MediaItem>>, CatalogError> {
        Ok(self.store.fetch_by_id(id)?)
    }

    pub fn get_all(&self) -> Result<Vec<Stored<MediaItem>>, CatalogError> {
        Ok(self.store.fetch_all()?)
    }

    /// Overwrite every mutable field of an existing item.
    ///
    /// Returns `Ok(None)` and stores nothing if `id` is absent.
    #[instrument(skip(self, request))]
    pub fn update(
        &self,
        id: u64,
        request: MediaItemRequest,
    ) -> Result<Option<Stored<MediaItem>>, CatalogError> {
        let item = request.into_item()?;

        if !self.store.overwrite(id, &item)? {
            return Ok(None);
        }
        info!("media item updated");
        Ok(Some(Stored::new(id, item)))
    }

    /// Delete an item. Returns false if it did not exist.
    #[instrument(skip(self))]
    pub fn delete(&self, id: u64) -> Result<bool, CatalogError> {
        let deleted = self.store.delete_by_id(id)?;
        if deleted {
            info!("media item deleted");
        }
        Ok(deleted)
    }

    /// Run the composite filter from raw, free-text parameters.
    ///
    /// `type` and `status` must name an enumeration member (any case);
    /// unknown text fails with [`CatalogError::InvalidFilterValue`] rather
    /// than matching nothing.
    #[instrument(skip(self))]
    pub fn filter(&self, params: &FilterParams) -> Result<Vec<Stored<MediaItem>>, CatalogError> {
        let filter = MediaFilter::try_from(params).map_err(|e| {
            warn!(field = e.kind, value = %e.value, "invalid filter value");
            CatalogError::from(e)
        })?;
        self.filter_by(&filter)
    }

    /// Run the composite filter with typed criteria.
    pub fn filter_by(&self, filter: &MediaFilter) -> Result<Vec<Stored<MediaItem>>, CatalogError> {
        Ok(self.store.filter(filter)?)
    }

    pub fn exists_by_title(&self, title: &str) -> Result<bool, CatalogError> {
        Ok(self.store.exists_by_title_ignore_case(title)?)
    }
}
