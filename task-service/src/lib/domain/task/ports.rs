use async_trait::async_trait;

use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;

/// Port for task domain service operations.
///
/// Every operation is scoped to the authenticated owner.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a new task for the owner in the command.
    ///
    /// Fills in the id, `completed = false`, and `created_at = now`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError>;

    /// List all tasks owned by `owner_id`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Set the completion flag on the task matching both `task_id` and
    /// `owner_id`.
    ///
    /// Succeeds silently when no matching task exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn set_task_completed(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        completed: bool,
    ) -> Result<(), TaskError>;

    /// Delete the task matching both `task_id` and `owner_id`.
    ///
    /// Succeeds silently when no matching task exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_task(&self, owner_id: &UserId, task_id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for the task aggregate.
///
/// Writes are unconditional owner-filtered operations; zero affected rows
/// is success, not an error.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist a new task to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve all tasks owned by `owner_id`, ordered by creation time
    /// descending.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Set the completion flag on the owner's task, if it exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn set_completed(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        completed: bool,
    ) -> Result<(), TaskError>;

    /// Remove the owner's task from storage, if it exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> Result<(), TaskError>;
}
