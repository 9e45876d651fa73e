//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::health_check))

        // Address lookup
        .route("/api/endereco/historico", get(handlers::list_history))
        .route("/api/endereco/:uf/:cidade/:logradouro", get(handlers::lookup_address))

        .with_state(state)
}
