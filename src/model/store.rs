//! ModelStore - Abstract keyed storage for models.

use super::{Model, ModelError, Stored};

/// Abstract keyed storage for models.
///
/// Each method is a single atomic operation against the backing storage.
/// Listing methods return records in ascending id order, which is insertion
/// order because ids come from a monotonic sequence.
pub trait ModelStore: Send + Sync {
    /// Insert a model under a freshly assigned id.
    fn insert_model<M: Model>(&self, model: &M) -> Result<Stored<M>, ModelError>;

    /// Get a model by id. Returns None if not found.
    fn get_model<M: Model>(&self, id: u64) -> Result<Option<Stored<M>>, ModelError>;

    /// All models of a collection.
    fn all_models<M: Model>(&self) -> Result<Vec<Stored<M>>, ModelError>;

    /// Replace the model stored under `id`. Returns false (and stores
    /// nothing) if the id does not exist.
    fn overwrite_model<M: Model>(&self, id: u64, model: &M) -> Result<bool, ModelError>;

    /// Delete a model by id. Returns true if it existed.
    fn delete_model<M: Model>(&self, id: u64) -> Result<bool, ModelError>;

    /// Find models matching a predicate.
    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Stored<M>>, ModelError>;

    /// Check whether any model matches a predicate.
    fn any_model<M: Model>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<bool, ModelError>;
}
