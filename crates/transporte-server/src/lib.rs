//! # transporte-server
//!
//! HTTP boundary for the transport-management reference-data service.

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use state::AppState;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Identification types
        .route(
            "/identification-types",
            get(api::identification_types::list_identification_types),
        )
        .route(
            "/identification-types/{id}/edit",
            get(api::identification_types::edit_identification_type)
                .post(api::identification_types::update_identification_type),
        )
        .route(
            "/identification-types/{id}/delete",
            post(api::identification_types::delete_identification_type),
        )
        // Add middleware
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
