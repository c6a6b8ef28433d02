//! ModelRepository - Typed accessor for model operations.

use std::marker::PhantomData;

use super::{Model, ModelError, ModelStore, Stored};

/// Typed repository wrapper for accessing models of a specific type.
pub struct ModelRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: ModelStore, M: Model> ModelRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Insert a model, assigning it a fresh id.
    pub fn insert(&self, model: &M) -> Result<Stored<M>, ModelError> {
        self.store.insert_model(model)
    }

    /// Get a model by id.
    pub fn get(&self, id: u64) -> Result<Option<Stored<M>>, ModelError> {
        self.store.get_model(id)
    }

    /// All models in insertion order.
    pub fn all(&self) -> Result<Vec<Stored<M>>, ModelError> {
        self.store.all_models()
    }

    /// Replace an existing model. Returns true if it existed.
    pub fn overwrite(&self, id: u64, model: &M) -> Result<bool, ModelError> {
        self.store.overwrite_model(id, model)
    }

    /// Delete a model by id. Returns true if it existed.
    pub fn delete(&self, id: u64) -> Result<bool, ModelError> {
        self.store.delete_model::<M>(id)
    }

    /// Find models matching a predicate.
    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<Stored<M>>, ModelError> {
        self.store.find_models(predicate)
    }

    /// Check whether any model matches a predicate.
    pub fn any(&self, predicate: &dyn Fn(&M) -> bool) -> Result<bool, ModelError> {
        self.store.any_model(predicate)
    }
}

/// Extension trait for typed model access on any ModelStore.
pub trait ModelsExt: ModelStore + Sized {
    /// Get a typed model repository.
    fn models<M: Model>(&self) -> ModelRepository<'_, Self, M> {
        ModelRepository::new(self)
    }
}

impl<S: ModelStore> ModelsExt for S {}
