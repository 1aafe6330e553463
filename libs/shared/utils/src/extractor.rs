use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use shared_database::AppState;
use shared_models::auth::{AuthUser, StoredUser};
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Bearer-token gate. A missing header is `Unauthorized`; a header that is
/// present but fails verification is `Forbidden`.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or(AppError::Unauthorized)?;

    let auth_value = auth_header.to_str().map_err(|_| AppError::Forbidden)?;

    // Split on the first space; a header without one yields an empty token
    // and fails verification below.
    let token = auth_value
        .split_once(' ')
        .map(|(_, token)| token)
        .unwrap_or("");

    let user = validate_token(token, &state.config.jwt_secret)
        .map_err(|_| AppError::Forbidden)?;

    // Add the decoded identity to request extensions
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Admin gate; composes after `auth_middleware`. A decoded email with no
/// stored user is treated as forbidden rather than faulting.
pub async fn admin_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or(AppError::Forbidden)?;

    let stored: Option<StoredUser> = state
        .store
        .find_one("users", &[("email", &user.email)])
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    match stored {
        Some(stored) if stored.is_admin() => Ok(next.run(request).await),
        _ => Err(AppError::Forbidden),
    }
}
