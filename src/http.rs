//! HTTP transport - maps REST routes onto the catalog service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /api/media-items`: create; 200 + created item, 400 invalid, 409 duplicate title.
//! - `GET /api/media-items`: list all.
//! - `GET /api/media-items/filter?title&type&genre&creator&rating&status`: composite filter.
//! - `GET /api/media-items/exists?title=`: case-insensitive title check.
//! - `GET /api/media-items/:id`: 200 + item, 404 if absent.
//! - `PUT /api/media-items/:id`: full overwrite; 200 + item, 404 if absent.
//! - `DELETE /api/media-items/:id`: 204, 404 if absent.
//! - `GET /health`: `{ "ok": true, "items": N }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mediahub::{http, CatalogService, InMemoryModelStore};
//!
//! let service = Arc::new(CatalogService::new(InMemoryModelStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "127.0.0.1:8080".parse()?).await?;
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::catalog::{CatalogError, CatalogService};
use crate::media::{FilterParams, MediaItemRequest};
use crate::model::ModelStore;

/// Base path of the media item resource.
pub const MEDIA_ITEMS_PATH: &str = "/api/media-items";

/// Build an axum `Router` serving the catalog API.
pub fn router<S: ModelStore + 'static>(service: Arc<CatalogService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route(
            MEDIA_ITEMS_PATH,
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            &format!("{}/filter", MEDIA_ITEMS_PATH),
            get(filter_handler::<S>),
        )
        .route(
            &format!("{}/exists", MEDIA_ITEMS_PATH),
            get(exists_handler::<S>),
        )
        .route(
            &format!("{}/:id", MEDIA_ITEMS_PATH),
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(service)
}

/// Serve the catalog over HTTP until Ctrl-C.
pub async fn serve<S: ModelStore + 'static>(
    service: Arc<CatalogService<S>>,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self, "catalog operation failed");
        }
        let body = match &self {
            CatalogError::Validation(fields) => {
                json!({ "error": self.to_string(), "fields": fields })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

fn not_found(id: u64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("media item {} not found", id) })),
    )
        .into_response()
}

/// `GET /health`: returns `{ "ok": true, "items": N }`.
async fn health_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Result<Response, CatalogError> {
    let items = service.get_all()?.len();
    Ok(Json(json!({ "ok": true, "items": items })).into_response())
}

/// `POST /api/media-items`
async fn create_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Json(request): Json<MediaItemRequest>,
) -> Result<Response, CatalogError> {
    let created = service.create(request)?;
    Ok((StatusCode::OK, Json(created)).into_response())
}

/// `GET /api/media-items`
async fn list_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Result<Response, CatalogError> {
    Ok(Json(service.get_all()?).into_response())
}

/// `GET /api/media-items/:id`
async fn get_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<u64>,
) -> Result<Response, CatalogError> {
    Ok(match service.get_by_id(id)? {
        Some(item) => Json(item).into_response(),
        None => not_found(id),
    })
}

/// `PUT /api/media-items/:id`
async fn update_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<u64>,
    Json(request): Json<MediaItemRequest>,
) -> Result<Response, CatalogError> {
    Ok(match service.update(id, request)? {
        Some(item) => Json(item).into_response(),
        None => not_found(id),
    })
}

/// `DELETE /api/media-items/:id`
async fn delete_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<u64>,
) -> Result<Response, CatalogError> {
    Ok(if service.delete(id)? {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(id)
    })
}

/// `GET /api/media-items/filter`
async fn filter_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, CatalogError> {
    Ok(Json(service.filter(&params)?).into_response())
}

#[derive(Debug, Deserialize)]
struct ExistsParams {
    #[serde(default)]
    title: String,
}

/// `GET /api/media-items/exists?title=`
async fn exists_handler<S: ModelStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(params): Query<ExistsParams>,
) -> Result<Response, CatalogError> {
    Ok(Json(service.exists_by_title(&params.title)?).into_response())
}
