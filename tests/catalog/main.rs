//! Catalog integration tests.
//!
//! Exercises `CatalogService` end to end over both model stores:
//! - Create/read/update/delete lifecycle
//! - Composite filtering from raw parameters
//! - Title uniqueness under concurrent creates
//! - Custom models through `#[derive(Model)]`

mod concurrency;
mod derive;
mod filter;
mod lifecycle;
mod persistence;
