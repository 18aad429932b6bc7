use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
///
/// Concrete implementation of TaskServicePort with dependency injection.
/// Owner scoping is delegated to the repository, which filters every read
/// and write by owner id.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    /// Create a new task service with an injected repository.
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError> {
        let task = Task {
            id: TaskId::new(),
            owner_id: command.owner_id,
            title: command.title,
            completed: false,
            created_at: Utc::now(),
        };

        let created_task = self.repository.create(task).await?;

        tracing::debug!(task_id = %created_task.id, owner_id = %created_task.owner_id, "Task created");

        Ok(created_task)
    }

    async fn list_tasks(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError> {
        self.repository.list_for_owner(owner_id).await
    }

    async fn set_task_completed(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        completed: bool,
    ) -> Result<(), TaskError> {
        self.repository
            .set_completed(owner_id, task_id, completed)
            .await
    }

    async fn delete_task(&self, owner_id: &UserId, task_id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete(owner_id, task_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::task::models::TaskTitle;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: Task) -> Result<Task, TaskError>;
            async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError>;
            async fn set_completed(&self, owner_id: &UserId, task_id: &TaskId, completed: bool) -> Result<(), TaskError>;
            async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> Result<(), TaskError>;
        }
    }

    #[tokio::test]
    async fn test_create_task_fills_defaults() {
        let mut repository = MockTestTaskRepository::new();

        let owner_id = UserId::new();
        repository
            .expect_create()
            .withf(move |task| {
                task.owner_id == owner_id && task.title.as_str() == "Buy milk" && !task.completed
            })
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = CreateTaskCommand {
            owner_id,
            title: TaskTitle::new("Buy milk".to_string()).unwrap(),
        };

        let before = Utc::now();
        let result = service.create_task(command).await;
        assert!(result.is_ok());

        let task = result.unwrap();
        assert!(!task.completed);
        assert!(task.created_at >= before);
        assert_eq!(task.owner_id, owner_id);
    }

    #[tokio::test]
    async fn test_list_tasks_scoped_to_owner() {
        let mut repository = MockTestTaskRepository::new();

        let owner_id = UserId::new();
        let tasks: Vec<Task> = (0..3)
            .map(|i| Task {
                id: TaskId::new(),
                owner_id,
                title: TaskTitle::new(format!("task {}", i)).unwrap(),
                completed: false,
                created_at: Utc::now(),
            })
            .collect();

        let returned_tasks = tasks.clone();
        repository
            .expect_list_for_owner()
            .withf(move |id| *id == owner_id)
            .times(1)
            .returning(move |_| Ok(returned_tasks.clone()));

        let service = TaskService::new(Arc::new(repository));

        let result = service.list_tasks(&owner_id).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_set_task_completed_passes_owner_filter() {
        let mut repository = MockTestTaskRepository::new();

        let owner_id = UserId::new();
        let task_id = TaskId::new();

        repository
            .expect_set_completed()
            .withf(move |o, t, completed| *o == owner_id && *t == task_id && *completed)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = TaskService::new(Arc::new(repository));

        let result = service.set_task_completed(&owner_id, &task_id, true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_set_task_completed_miss_is_silent() {
        let mut repository = MockTestTaskRepository::new();

        // Repository reports success even when nothing matched
        repository
            .expect_set_completed()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = TaskService::new(Arc::new(repository));

        let result = service
            .set_task_completed(&UserId::new(), &TaskId::new(), true)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_task_passes_owner_filter() {
        let mut repository = MockTestTaskRepository::new();

        let owner_id = UserId::new();
        let task_id = TaskId::new();

        repository
            .expect_delete()
            .withf(move |o, t| *o == owner_id && *t == task_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TaskService::new(Arc::new(repository));

        let result = service.delete_task(&owner_id, &task_id).await;
        assert!(result.is_ok());
    }
}
