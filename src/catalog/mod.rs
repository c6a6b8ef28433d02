//! Catalog - media item persistence and the business rules around it.
//!
//! `MediaStore<S>` is the typed store over any [`crate::ModelStore`];
//! `CatalogService<S>` adds request validation, title uniqueness and
//! free-text filter normalisation on top.
//!
//! ## Example
//!
//! ```ignore
//! use mediahub::{CatalogService, FilterParams, InMemoryModelStore, MediaItemRequest};
//!
//! let service = CatalogService::new(InMemoryModelStore::new());
//! let created = service.create(request)?;
//! let movies = service.filter(&FilterParams {
//!     media_type: Some("movie".into()),
//!     ..Default::default()
//! })?;
//! ```

mod error;
mod service;
mod store;

pub use error::CatalogError;
pub use service::CatalogService;
pub use store::MediaStore;
