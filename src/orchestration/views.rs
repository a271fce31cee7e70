//! Presentation projections consumed by the console UI.
//!
//! Pure read-side mappings: a compact row for the summary list and a full
//! record for the detail view. The detail projection is where the
//! handover log flips to newest-first display order and where the human
//! review controls are gated.

use crate::orchestration::domain::{
    AgentState, HandoverEntry, OrchestrationTask, TaskId, TaskStatus, TemplateSelection,
    WorkflowStep,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the task summary list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Roster entries in canonical order.
    pub agents: Vec<AgentState>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskSummary {
    /// Projects a task onto its summary row.
    #[must_use]
    pub fn from_task(task: &OrchestrationTask) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_owned(),
            status: task.status(),
            agents: task.agents().entries().to_vec(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Projects a listing onto summary rows, preserving the listing order.
#[must_use]
pub fn summarise(tasks: &[OrchestrationTask]) -> Vec<TaskSummary> {
    tasks.iter().map(TaskSummary::from_task).collect()
}

/// Full task record for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDetail {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Orchestration prompt.
    pub prompt: String,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Sandbox container reference.
    pub container_id: String,
    /// Owning identity.
    pub operator: String,
    /// Technology template selection.
    pub chosen_templates: TemplateSelection,
    /// Roster entries in canonical order.
    pub agents: Vec<AgentState>,
    /// Planned workflow steps in execution order.
    pub workflow: Vec<WorkflowStep>,
    /// Handover entries in display order, newest first.
    pub history: Vec<HandoverEntry>,
    /// Whether the approve/veto controls apply.
    pub review_available: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskDetail {
    /// Projects a task onto its detail record.
    #[must_use]
    pub fn from_task(task: &OrchestrationTask) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_owned(),
            description: task.description().to_owned(),
            prompt: task.prompt().to_owned(),
            status: task.status(),
            container_id: task.container_id().as_str().to_owned(),
            operator: task.operator().to_owned(),
            chosen_templates: task.chosen_templates().clone(),
            agents: task.agents().entries().to_vec(),
            workflow: task.workflow().steps().to_vec(),
            history: task.history().newest_first().cloned().collect(),
            review_available: task.status() == TaskStatus::AwaitingReview,
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}
