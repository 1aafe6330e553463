use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::models::{Booking, BookingQuery};
use crate::services::{BookingOutcome, BookingService};

/// List the patient's bookings. The token identity must match the queried
/// email exactly; a valid token for another patient is rejected.
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<BookingQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let email = query.email.unwrap_or_default();

    if user.email != email {
        return Err(AppError::Forbidden);
    }

    let bookings = BookingService::new(&state.store)
        .for_patient(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(bookings))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(booking): Json<Booking>,
) -> Result<Json<Value>, AppError> {
    let outcome = BookingService::new(&state.store)
        .create(booking)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // A duplicate is still a 200; clients key on the success flag.
    let body = match outcome {
        BookingOutcome::Created(result) => json!({ "success": true, "result": result }),
        BookingOutcome::Duplicate(existing) => json!({ "success": false, "booking": existing }),
    };

    Ok(Json(body))
}
