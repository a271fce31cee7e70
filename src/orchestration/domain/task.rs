//! Orchestration task aggregate root and its status state machine.

use super::{
    AgentRoster, ContainerId, HandoverEntry, HandoverLog, OrchestrationDomainError,
    ParseTaskStatusError, TaskId, TemplateSelection, WorkflowPlan,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity recorded for actions taken through the console.
pub const HUMAN_OPERATOR: &str = "Human Operator";

/// History message recorded when a task is approved.
const APPROVE_MESSAGE: &str = "Task approved and completed by human operator.";

/// History message recorded when a task is vetoed.
const VETO_MESSAGE: &str = "Task vetoed by human operator.";

/// Task lifecycle status.
///
/// The nominal path is `pending -> in_progress -> awaiting_review ->
/// {completed | vetoed}`; `failed` is reachable from every non-terminal
/// status. `completed`, `failed`, and `vetoed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but agents have not started.
    Pending,
    /// Agents are progressing the task.
    InProgress,
    /// Task is blocked on the human review decision.
    AwaitingReview,
    /// Task was approved and completed.
    Completed,
    /// Task failed.
    Failed,
    /// Task was vetoed by the human operator.
    Vetoed,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::AwaitingReview => "awaiting_review",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Vetoed => "vetoed",
        }
    }

    /// Returns `true` when no further transitions are defined.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Vetoed)
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress)
                | (Self::InProgress, Self::AwaitingReview)
                | (Self::AwaitingReview, Self::Completed | Self::Vetoed)
                | (
                    Self::Pending | Self::InProgress | Self::AwaitingReview,
                    Self::Failed
                )
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, ParseTaskStatusError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "awaiting_review" => Ok(Self::AwaitingReview),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "vetoed" => Ok(Self::Vetoed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Orchestration task aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationTask {
    id: TaskId,
    name: String,
    description: String,
    prompt: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    container_id: ContainerId,
    operator: String,
    chosen_templates: TemplateSelection,
    agents: AgentRoster,
    workflow: WorkflowPlan,
    history: HandoverLog,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: String,
    /// Persisted task description.
    pub description: String,
    /// Persisted orchestration prompt.
    pub prompt: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted container reference.
    pub container_id: ContainerId,
    /// Persisted owning identity.
    pub operator: String,
    /// Persisted template selection.
    pub chosen_templates: TemplateSelection,
    /// Persisted agent roster.
    pub agents: AgentRoster,
    /// Persisted workflow plan.
    pub workflow: WorkflowPlan,
    /// Persisted handover log.
    pub history: HandoverLog,
}

impl OrchestrationTask {
    /// Creates a new task from operator-supplied name and description.
    ///
    /// The new task starts `pending` with an idle roster, the initial
    /// single-step workflow, a freshly generated container reference, the
    /// prompt set equal to the description, placeholder templates, and one
    /// `create` history entry.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationDomainError::EmptyTaskName`] or
    /// [`OrchestrationDomainError::EmptyTaskDescription`] when either field
    /// is empty after trimming.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, OrchestrationDomainError> {
        let task_name = name.into();
        let task_description = description.into();
        if task_name.trim().is_empty() {
            return Err(OrchestrationDomainError::EmptyTaskName);
        }
        if task_description.trim().is_empty() {
            return Err(OrchestrationDomainError::EmptyTaskDescription);
        }

        let timestamp = clock.utc();
        let mut history = HandoverLog::empty();
        history.record(
            HandoverEntry::recorded_at("create", HUMAN_OPERATOR, timestamp)
                .with_message("Task created."),
        );

        Ok(Self {
            id: TaskId::new(),
            prompt: task_description.clone(),
            name: task_name,
            description: task_description,
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
            container_id: ContainerId::generate(),
            operator: HUMAN_OPERATOR.to_owned(),
            chosen_templates: TemplateSelection::placeholder(),
            agents: AgentRoster::idle(),
            workflow: WorkflowPlan::initial(),
            history,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            prompt: data.prompt,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            container_id: data.container_id,
            operator: data.operator,
            chosen_templates: data.chosen_templates,
            agents: data.agents,
            workflow: data.workflow,
            history: data.history,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the orchestration prompt.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the sandbox container reference.
    #[must_use]
    pub const fn container_id(&self) -> &ContainerId {
        &self.container_id
    }

    /// Returns the owning identity.
    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Returns the technology template selection.
    #[must_use]
    pub const fn chosen_templates(&self) -> &TemplateSelection {
        &self.chosen_templates
    }

    /// Returns the agent roster.
    #[must_use]
    pub const fn agents(&self) -> &AgentRoster {
        &self.agents
    }

    /// Returns the workflow plan.
    #[must_use]
    pub const fn workflow(&self) -> &WorkflowPlan {
        &self.workflow
    }

    /// Returns the handover log.
    #[must_use]
    pub const fn history(&self) -> &HandoverLog {
        &self.history
    }

    /// Sets the task status without consulting the transition graph.
    ///
    /// This is the permissive mutation surface used by the status-update
    /// operation: agent-driven progress arrives through it from outside
    /// this subsystem. Refreshes `updated_at` and appends exactly one
    /// `status-update` history entry; `message` defaults to
    /// `Task status updated to <status>.`
    pub fn update_status(
        &mut self,
        status: TaskStatus,
        message: Option<&str>,
        clock: &impl Clock,
    ) {
        let timestamp = clock.utc();
        let entry_message = message.map_or_else(
            || format!("Task status updated to {status}."),
            str::to_owned,
        );
        self.status = status;
        self.updated_at = timestamp;
        self.history.record(
            HandoverEntry::recorded_at("status-update", HUMAN_OPERATOR, timestamp)
                .with_message(entry_message),
        );
    }

    /// Sets the task status after validating it against the transition
    /// graph.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationDomainError::InvalidStatusTransition`] when
    /// the current status does not permit the target; the task is left
    /// unchanged.
    pub fn transition_to(
        &mut self,
        status: TaskStatus,
        message: Option<&str>,
        clock: &impl Clock,
    ) -> Result<(), OrchestrationDomainError> {
        if !self.status.can_transition_to(status) {
            return Err(OrchestrationDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: status,
            });
        }
        self.update_status(status, message, clock);
        Ok(())
    }

    /// Records the human operator's approval, completing the task.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationDomainError::InvalidStatusTransition`] when
    /// the task is not awaiting review.
    pub fn approve(&mut self, clock: &impl Clock) -> Result<(), OrchestrationDomainError> {
        self.transition_to(TaskStatus::Completed, Some(APPROVE_MESSAGE), clock)
    }

    /// Records the human operator's veto.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationDomainError::InvalidStatusTransition`] when
    /// the task is not awaiting review.
    pub fn veto(&mut self, clock: &impl Clock) -> Result<(), OrchestrationDomainError> {
        self.transition_to(TaskStatus::Vetoed, Some(VETO_MESSAGE), clock)
    }
}
