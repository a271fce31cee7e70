//! Supervisor analysis service.
//!
//! Renders the briefing sent to the external analysis collaborator from a
//! task's current state and full handover history, and relays the
//! collaborator's free-text answer. The service never mutates task state;
//! collaborator failure is surfaced as a typed error for the caller to
//! display.

use crate::orchestration::{
    domain::{HandoverEntry, OrchestrationTask, TaskId},
    ports::{SupervisorAnalyst, SupervisorError},
};
use minijinja::Environment;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Briefing template sent to the analysis collaborator.
const BRIEFING_TEMPLATE: &str = "\
You are a cross-domain AI orchestration supervisor. Given the following task details and handover history, provide a concise summary and a recommended next action for the human operator. Format your response clearly.

Task Name: {{ name }}
Status: {{ status }}
Prompt: {{ prompt }}
Container ID: {{ container_id }}
Operator: {{ operator }}

Handover History:
{{ history }}

Your analysis:";

/// Service-level errors for supervisor analysis.
#[derive(Debug, Error)]
pub enum SupervisorServiceError {
    /// The briefing could not be rendered from the task.
    #[error("failed to render analysis briefing for task {task_id}: {reason}")]
    Briefing {
        /// Identifier of the task being analysed.
        task_id: TaskId,
        /// Render failure description.
        reason: String,
    },
    /// The analysis collaborator failed.
    #[error(transparent)]
    Analyst(#[from] SupervisorError),
}

/// Result type for supervisor analysis operations.
pub type SupervisorServiceResult<T> = Result<T, SupervisorServiceError>;

/// Stateless analysis relay over the supervisor port.
#[derive(Clone)]
pub struct SupervisorService<S>
where
    S: SupervisorAnalyst,
{
    analyst: Arc<S>,
}

impl<S> SupervisorService<S>
where
    S: SupervisorAnalyst,
{
    /// Creates a new supervisor service.
    #[must_use]
    pub const fn new(analyst: Arc<S>) -> Self {
        Self { analyst }
    }

    /// Requests a summary and recommended next action for the task.
    ///
    /// # Errors
    ///
    /// Returns [`SupervisorServiceError::Briefing`] when the briefing
    /// cannot be rendered, or [`SupervisorServiceError::Analyst`] when the
    /// collaborator call fails. The task is left unchanged either way.
    pub async fn analyse_task(
        &self,
        task: &OrchestrationTask,
    ) -> SupervisorServiceResult<String> {
        let briefing = render_briefing(task)?;
        Ok(self.analyst.analyse(&briefing).await?)
    }
}

/// Renders the collaborator briefing from task state and history.
fn render_briefing(task: &OrchestrationTask) -> Result<String, SupervisorServiceError> {
    let history = task
        .history()
        .entries()
        .iter()
        .map(|entry| render_history_line(task.id(), entry))
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    let environment = Environment::new();
    environment
        .render_str(BRIEFING_TEMPLATE, briefing_context(task, history))
        .map_err(|error| SupervisorServiceError::Briefing {
            task_id: task.id(),
            reason: error.to_string(),
        })
}

/// Formats one history entry as a briefing line.
fn render_history_line(
    task_id: TaskId,
    entry: &HandoverEntry,
) -> Result<String, SupervisorServiceError> {
    let details =
        serde_json::to_string(entry.details()).map_err(|error| {
            SupervisorServiceError::Briefing {
                task_id,
                reason: error.to_string(),
            }
        })?;
    Ok(format!(
        "- [{}] {}: {} - {}",
        entry.at().to_rfc3339(),
        entry.by(),
        entry.action(),
        details
    ))
}

fn briefing_context(task: &OrchestrationTask, history: String) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert("name".to_owned(), Value::String(task.name().to_owned()));
    context.insert(
        "status".to_owned(),
        Value::String(task.status().as_str().to_owned()),
    );
    context.insert("prompt".to_owned(), Value::String(task.prompt().to_owned()));
    context.insert(
        "container_id".to_owned(),
        Value::String(task.container_id().as_str().to_owned()),
    );
    context.insert(
        "operator".to_owned(),
        Value::String(task.operator().to_owned()),
    );
    context.insert("history".to_owned(), Value::String(history));
    context
}
