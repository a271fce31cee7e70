//! Repository port for the canonical orchestration task collection.

use crate::orchestration::domain::{OrchestrationTask, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task collection contract.
///
/// Implementations own identity and sort order: `list` must return the
/// full collection ordered by creation time, newest first.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &OrchestrationTask) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status, timestamps, history).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &OrchestrationTask) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; absence is not an
    /// error.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<OrchestrationTask>>;

    /// Returns a snapshot of every task, ordered by `created_at`
    /// descending. Side-effect-free.
    async fn list(&self) -> TaskRepositoryResult<Vec<OrchestrationTask>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
