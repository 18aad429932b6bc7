use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::MessageBody;
use crate::domain::task::models::TaskId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// Deletes the caller's task.
///
/// Same silent-miss policy as update: deleting a non-existent or foreign
/// task id still reports success.
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let task_id = TaskId::from_string(&id).map_err(TaskError::from)?;

    state
        .task_service
        .delete_task(&auth_user.user_id, &task_id)
        .await
        .map_err(ApiError::from)
        .map(|_| Json(MessageBody::new("Task deleted")))
}
