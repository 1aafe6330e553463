use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::jwt::sign_token;

use crate::services::UserService;

/// Upsert the user and mint a fresh access token for them.
pub async fn upsert_user(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    Json(profile): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let result = UserService::new(&state.store)
        .upsert(&email, profile)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let token = sign_token(&email, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(json!({ "result": result, "token": token })))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, AppError> {
    let users = UserService::new(&state.store)
        .list()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(users))
}

/// Report whether the given email has the admin role.
pub async fn check_admin(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let admin = UserService::new(&state.store)
        .is_admin(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "admin": admin })))
}

pub async fn promote_admin(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let updated = UserService::new(&state.store)
        .promote_to_admin(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "modified": updated.len() })))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = UserService::new(&state.store)
        .delete(&id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "deleted": deleted.len() })))
}
