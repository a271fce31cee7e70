//! Service layer for listing, inspecting, creating, and mutating tasks.
//!
//! This service is the only sanctioned way to read or mutate tasks; it
//! enforces audit-logging and timestamp discipline around repository
//! access. Missing tasks are reported as `Ok(None)`, never as errors:
//! callers must treat absence as "nothing to show".

use crate::orchestration::{
    domain::{OrchestrationDomainError, OrchestrationTask, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating an orchestration task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request from operator-supplied fields.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Service-level errors for console operations.
#[derive(Debug, Error)]
pub enum TaskConsoleError {
    /// Domain validation or state-machine rule failed.
    #[error(transparent)]
    Domain(#[from] OrchestrationDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for console service operations.
pub type TaskConsoleResult<T> = Result<T, TaskConsoleError>;

/// Orchestration task console service.
#[derive(Clone)]
pub struct TaskConsoleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskConsoleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new console service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task, newest first.
    ///
    /// The returned tasks are owned copies; mutating them does not affect
    /// the canonical collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConsoleError::Repository`] when the listing fails.
    pub async fn list_tasks(&self) -> TaskConsoleResult<Vec<OrchestrationTask>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves one task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConsoleError::Repository`] when the lookup fails.
    pub async fn retrieve_task(&self, id: TaskId) -> TaskConsoleResult<Option<OrchestrationTask>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates a new task from the operator's name and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConsoleError::Domain`] when either field is empty
    /// after trimming, or [`TaskConsoleError::Repository`] when the store
    /// rejects the insert.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> TaskConsoleResult<OrchestrationTask> {
        let CreateTaskRequest { name, description } = request;
        let task = OrchestrationTask::create(name, description, &*self.clock)?;
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Sets a task's status, refreshing `updated_at` and appending one
    /// `status-update` history entry.
    ///
    /// The status is applied without consulting the transition graph:
    /// agent-driven progress events arrive through this operation from
    /// outside this subsystem. Returns `Ok(None)` when the id is unknown,
    /// leaving the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConsoleError::Repository`] when the store fails.
    pub async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        message: Option<&str>,
    ) -> TaskConsoleResult<Option<OrchestrationTask>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        task.update_status(status, message, &*self.clock);
        self.repository.update(&task).await?;
        Ok(Some(task))
    }

    /// Records the operator's approval of a task awaiting review.
    ///
    /// Returns `Ok(None)` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConsoleError::Domain`] when the task is not awaiting
    /// review, or [`TaskConsoleError::Repository`] when the store fails.
    pub async fn approve_task(&self, id: TaskId) -> TaskConsoleResult<Option<OrchestrationTask>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        task.approve(&*self.clock)?;
        self.repository.update(&task).await?;
        Ok(Some(task))
    }

    /// Records the operator's veto of a task awaiting review.
    ///
    /// Returns `Ok(None)` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConsoleError::Domain`] when the task is not awaiting
    /// review, or [`TaskConsoleError::Repository`] when the store fails.
    pub async fn veto_task(&self, id: TaskId) -> TaskConsoleResult<Option<OrchestrationTask>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        task.veto(&*self.clock)?;
        self.repository.update(&task).await?;
        Ok(Some(task))
    }
}
