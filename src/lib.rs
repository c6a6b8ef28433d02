//! mediahub - a personal media catalogue.
//!
//! Movies, shows, books and games with a rating and review, stored in a
//! typed model store and queried through a composite filter of
//! independently optional predicates.

// Lets `#[derive(Model)]` name `::mediahub::Model` from inside this crate.
extern crate self as mediahub;

mod catalog;
mod config;
mod media;
mod model;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::{CatalogError, CatalogService, MediaStore};
pub use config::ServerConfig;
pub use media::{
    ExperienceStatus, FilterParams, MediaFilter, MediaItem, MediaItemRequest, MediaType,
    ParseEnumError, ValidationError,
};
pub use model::{
    InMemoryModelStore, JsonFileModelStore, Model, ModelError, ModelRepository, ModelStore,
    ModelsExt, Stored,
};

// Derive macro for `Model`.
pub use mediahub_macros::Model;
