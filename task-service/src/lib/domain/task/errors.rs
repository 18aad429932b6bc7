use thiserror::Error;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TaskTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskTitleError {
    #[error("Task title must not be empty")]
    Empty,

    #[error("Task title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(#[from] TaskIdError),

    #[error("Invalid task title: {0}")]
    InvalidTitle(#[from] TaskTitleError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for TaskError {
    fn from(err: anyhow::Error) -> Self {
        TaskError::Unknown(err.to_string())
    }
}
