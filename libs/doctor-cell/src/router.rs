use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};

use shared_database::AppState;
use shared_utils::extractor::{admin_middleware, auth_middleware};

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    // Token gate runs first, then the role gate.
    let admin_routes = Router::new()
        .route(
            "/doctors",
            get(handlers::list_doctors).post(handlers::create_doctor),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let public_routes = Router::new().route("/doctor/{id}", delete(handlers::delete_doctor));

    Router::new()
        .merge(admin_routes)
        .merge(public_routes)
        .with_state(state)
}
