use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use doctor_cell::router::doctor_routes;
use shared_database::AppState;
use treatment_cell::router::treatment_routes;
use user_cell::router::user_routes;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Doctors portal is running" }))
        .merge(user_routes(state.clone()))
        .merge(treatment_routes(state.clone()))
        .merge(booking_routes(state.clone()))
        .merge(doctor_routes(state))
}
