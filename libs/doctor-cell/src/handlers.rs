use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{CreateDoctorRequest, Doctor};
use crate::services::{DoctorOutcome, DoctorService};

pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    let doctors = DoctorService::new(&state.store)
        .list()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(doctors))
}

pub async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let outcome = DoctorService::new(&state.store)
        .create(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let body = match outcome {
        DoctorOutcome::Created(result) => json!({ "success": true, "result": result }),
        DoctorOutcome::Duplicate(existing) => json!({ "success": false, "doctor": existing }),
    };

    Ok(Json(body))
}

pub async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = DoctorService::new(&state.store)
        .delete(&id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "deleted": deleted.len() })))
}
