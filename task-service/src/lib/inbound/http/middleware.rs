use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user ID in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware gating all task routes behind a bearer token.
///
/// A missing `Authorization` header is rejected with 403; a present but
/// unverifiable token with 401. On success the decoded user ID is attached
/// to the request extensions for the handlers. No state is kept between
/// requests.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    let user_id_str = claims.user_id().ok_or_else(|| {
        tracing::warn!("Missing 'sub' claim in token");
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    let user_id = UserId::from_string(user_id_str).map_err(|e| {
        tracing::warn!("Failed to parse user ID from token: {}", e);
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Forbidden("No token provided".to_string()).into_response())?;

    // Anything present but not a well-formed bearer header counts as an
    // invalid token, not a missing one
    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()).into_response())?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized("Invalid token".to_string()).into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
