use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn task_from_row(row: &PgRow) -> Result<Task, TaskError> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let owner_id: Uuid = row
            .try_get("owner_id")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let completed: bool = row
            .try_get("completed")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(Task {
            id: TaskId(id),
            owner_id: UserId(owner_id),
            title: TaskTitle::new(title)?,
            completed,
            created_at,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, owner_id, title, completed, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(task.id.0)
        .bind(task.owner_id.0)
        .bind(task.title.as_str())
        .bind(task.completed)
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(task)
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, completed, created_at
            FROM tasks
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::task_from_row).collect()
    }

    async fn set_completed(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        completed: bool,
    ) -> Result<(), TaskError> {
        // Unconditional owner-filtered write; zero affected rows is success
        sqlx::query(
            r#"
            UPDATE tasks
            SET completed = $3
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(task_id.0)
        .bind(owner_id.0)
        .bind(completed)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> Result<(), TaskError> {
        sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(task_id.0)
        .bind(owner_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
