use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::MessageBody;
use crate::domain::task::models::TaskId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// Sets the completion flag on the caller's task.
///
/// Reports success even when no task matched the id and owner; the write is
/// an unconditional owner-filtered update.
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    let task_id = TaskId::from_string(&id).map_err(TaskError::from)?;

    state
        .task_service
        .set_task_completed(&auth_user.user_id, &task_id, body.completed)
        .await
        .map_err(ApiError::from)
        .map(|_| Json(MessageBody::new("Task updated")))
}

/// HTTP request body for updating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    completed: bool,
}
