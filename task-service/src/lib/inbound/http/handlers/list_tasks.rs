use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::task::models::Task;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<TaskData>>, ApiError> {
    let tasks = state.task_service.list_tasks(&auth_user.user_id).await?;

    Ok(Json(tasks.iter().map(TaskData::from).collect()))
}

/// Task record as returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskData {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            owner_id: task.owner_id.to_string(),
            title: task.title.as_str().to_string(),
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}
