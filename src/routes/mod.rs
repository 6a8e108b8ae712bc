//! HTTP surface: router construction, shared state, error rendering.

pub mod cards;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, put};
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::error::Error;
use crate::images::ImageStore;
use crate::store::CardStore;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The injected storage backing; the route layer never sees which one.
    pub store: Arc<dyn CardStore>,

    /// Where accepted image uploads are written.
    pub images: ImageStore,
}

/// Build the card API router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/cards",
            get(cards::list_cards).post(cards::create_card),
        )
        .route(
            "/api/cards/{id}",
            put(cards::update_card).delete(cards::delete_card),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match &e {
            Error::Validation { .. } | Error::InvalidUpload(_) => {
                ApiError::bad_request(e.to_string())
            }
            Error::NotFound(_) => ApiError::not_found(e.to_string()),
            _ => {
                tracing::error!("infrastructure failure: {e}");
                ApiError::internal(e.to_string())
            }
        }
    }
}
