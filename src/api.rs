//! HTTP surface
//!
//! GET /api/0/projects/{organization_id}/{project_id}/files/app-icons/{icon_id}/
//! serves a stored icon with a sniffed `Content-Type`.

use crate::models::ScopeKey;
use crate::retrieval::{retrieve_icon, RetrievalOutcome};
use crate::store::ObjectStore;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

const ICON_ROUTE: &str = "/api/0/projects/{organization_id}/{project_id}/files/app-icons/{icon_id}";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    pub usecase: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, usecase: impl Into<String>) -> Self {
        Self {
            store,
            usecase: usecase.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IconPath {
    organization_id: u64,
    project_id: u64,
    icon_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Build the router with shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(ICON_ROUTE, get(icon_handler))
        .route(&format!("{}/", ICON_ROUTE), get(icon_handler))
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn icon_handler(
    Path(path): Path<IconPath>,
    State(state): State<AppState>,
) -> RetrievalOutcome {
    let scope = ScopeKey::new(path.organization_id, path.project_id);
    retrieve_icon(state.store.as_ref(), &state.usecase, scope, &path.icon_id).await
}

impl IntoResponse for RetrievalOutcome {
    fn into_response(self) -> Response {
        match self {
            RetrievalOutcome::Success { data, content_type } => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type.as_str())],
                data,
            )
                .into_response(),
            RetrievalOutcome::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not found" })),
            )
                .into_response(),
            // Details were logged during retrieval; the caller only sees a 500.
            RetrievalOutcome::StoreError(_) | RetrievalOutcome::UnexpectedError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to retrieve app icon" })),
            )
                .into_response(),
        }
    }
}
