//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use viacep_core::constants::DEFAULT_RECENT;
use viacep_core::types::{AddressQuery, AddressResult, HistoryRecord};

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::validate_address;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /api/endereco/:uf/:cidade/:logradouro
pub async fn lookup_address(
    State(state): State<Arc<AppState>>,
    Path(path): Path<AddressPath>,
) -> Result<Json<Vec<AddressResult>>> {
    validate_address(&path)?;

    let query = AddressQuery::new(path.uf, path.cidade, path.logradouro);
    let outcome = state.lookup.lookup(&query).await?;

    if outcome.results.is_empty() {
        debug!(query = %query, "No postal code found");
        return Err(ApiError::not_found("no postal code found for the given address"));
    }

    info!(
        query = %query,
        count = outcome.results.len(),
        from_cache = outcome.from_cache,
        "Address lookup served"
    );
    Ok(Json(outcome.results))
}

/// GET /api/endereco/historico
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryRecord>> {
    Json(state.lookup.recent_history(DEFAULT_RECENT))
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
