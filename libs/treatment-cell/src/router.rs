use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::AppState;

use crate::handlers;

pub fn treatment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/services", get(handlers::list_services))
        .route("/available", get(handlers::get_available))
        .with_state(state)
}
