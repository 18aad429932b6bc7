use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::task::errors::TaskIdError;
use crate::task::errors::TaskTitleError;

/// Task aggregate entity.
///
/// Owned by exactly one user; every operation on a task is filtered by
/// `owner_id`, so a task is never visible to or mutable by a non-owner.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub owner_id: UserId,
    pub title: TaskTitle,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Ensures the title is non-empty and at most 500 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    const MAX_LENGTH: usize = 500;

    /// Create a new valid task title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 500 characters
    pub fn new(title: String) -> Result<Self, TaskTitleError> {
        if title.trim().is_empty() {
            return Err(TaskTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(TaskTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new task with domain types
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub owner_id: UserId,
    pub title: TaskTitle,
}

impl CreateTaskCommand {
    /// Construct a new create task command.
    ///
    /// # Arguments
    /// * `owner_id` - Authenticated owner of the task
    /// * `title` - Validated task title
    pub fn new(owner_id: UserId, title: TaskTitle) -> Self {
        Self { owner_id, title }
    }
}
