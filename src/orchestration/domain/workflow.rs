//! Planned execution path for a task.
//!
//! The workflow is a static display plan: an ordered list of named steps,
//! each attributed to one agent. It is append-only; no execution or
//! validation logic attaches to it.

use super::{AgentId, OrchestrationDomainError};
use serde::{Deserialize, Serialize};

/// One planned unit of work attributed to a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    step: String,
    agent: AgentId,
}

impl WorkflowStep {
    /// Creates a validated workflow step.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationDomainError::EmptyWorkflowStep`] when the
    /// step name is empty after trimming.
    pub fn new(
        step: impl Into<String>,
        agent: AgentId,
    ) -> Result<Self, OrchestrationDomainError> {
        let step_name = step.into();
        if step_name.trim().is_empty() {
            return Err(OrchestrationDomainError::EmptyWorkflowStep);
        }
        Ok(Self {
            step: step_name,
            agent,
        })
    }

    /// Returns the step name.
    #[must_use]
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Returns the agent the step is attributed to.
    #[must_use]
    pub const fn agent(&self) -> AgentId {
        self.agent
    }
}

/// Ordered, append-only sequence of workflow steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowPlan(Vec<WorkflowStep>);

impl WorkflowPlan {
    /// Creates the single-step plan every task starts with.
    #[must_use]
    pub fn initial() -> Self {
        Self(vec![WorkflowStep {
            step: "parse_prompt".to_owned(),
            agent: AgentId::Taskflow,
        }])
    }

    /// Reconstructs a plan from persisted steps.
    #[must_use]
    pub const fn from_steps(steps: Vec<WorkflowStep>) -> Self {
        Self(steps)
    }

    /// Appends a step to the end of the plan.
    pub fn append(&mut self, step: WorkflowStep) {
        self.0.push(step);
    }

    /// Returns the planned steps in order.
    #[must_use]
    pub fn steps(&self) -> &[WorkflowStep] {
        &self.0
    }

    /// Returns the number of planned steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the plan has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
