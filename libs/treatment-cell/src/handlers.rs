use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{AvailableQuery, Service};
use crate::services::AvailabilityService;

/// List the service catalog, names only.
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, AppError> {
    debug!("Listing services");

    let services: Vec<Value> = state
        .store
        .find_projected("services", &[], "name")
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(services))
}

pub async fn get_available(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailableQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let date = query.date.unwrap_or_default();

    let services = AvailabilityService::new(&state.store)
        .available_on(&date)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(services))
}
