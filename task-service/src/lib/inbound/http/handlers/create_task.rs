use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::list_tasks::TaskData;
use super::ApiError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::TaskTitle;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskData>), ApiError> {
    let title =
        TaskTitle::new(body.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateTaskCommand::new(auth_user.user_id, title);

    state
        .task_service
        .create_task(command)
        .await
        .map_err(ApiError::from)
        .map(|ref task| (StatusCode::CREATED, Json(task.into())))
}

/// HTTP request body for creating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    title: String,
}
