use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::MessageBody;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let username =
        Username::new(body.username).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = RegisterUserCommand::new(username, body.password);

    state
        .user_service
        .register_user(command)
        .await
        .map_err(|e| match e {
            // Store-layer failures during registration all surface as the
            // duplicate-user response
            UserError::UsernameAlreadyExists(_) | UserError::DatabaseError(_) => {
                ApiError::BadRequest("User already exists".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody::new("User registered")),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: String,
    password: String,
}
