//! Port for the external AI analysis collaborator.
//!
//! The detail view can request a free-text summary and recommended next
//! action for a task. The collaborator is stateless: it receives a
//! rendered briefing and returns plain text or a failure, and it never
//! mutates task state.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for supervisor analysis calls.
pub type SupervisorResult<T> = Result<T, SupervisorError>;

/// Stateless analysis contract.
#[async_trait]
pub trait SupervisorAnalyst: Send + Sync {
    /// Produces a free-text analysis for the given briefing.
    ///
    /// # Errors
    ///
    /// Returns [`SupervisorError`] when the collaborator is unreachable or
    /// its backend fails; callers must surface the failure without
    /// touching task state.
    async fn analyse(&self, briefing: &str) -> SupervisorResult<String>;
}

/// Errors returned by supervisor analyst adapters.
#[derive(Debug, Clone, Error)]
pub enum SupervisorError {
    /// The collaborator could not be reached or is not configured.
    #[error("analysis collaborator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator's backend reported a failure.
    #[error("analysis backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl SupervisorError {
    /// Wraps a backend error from the analyst adapter.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
