//! In-memory integration tests for the supervisor analysis flow.

use std::sync::Arc;

use atrium::orchestration::{
    domain::OrchestrationTask,
    ports::{SupervisorAnalyst, SupervisorError, SupervisorResult},
    seed,
    services::{SupervisorService, SupervisorServiceError},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

/// Analyst stub returning a canned recommendation.
#[derive(Debug)]
struct CannedAnalyst;

#[async_trait]
impl SupervisorAnalyst for CannedAnalyst {
    async fn analyse(&self, briefing: &str) -> SupervisorResult<String> {
        assert!(briefing.contains("Handover History:"));
        Ok("The task is parked on human review; approve to proceed.".to_owned())
    }
}

/// Analyst stub standing in for a collaborator outage.
#[derive(Debug)]
struct OutageAnalyst;

#[async_trait]
impl SupervisorAnalyst for OutageAnalyst {
    async fn analyse(&self, _briefing: &str) -> SupervisorResult<String> {
        Err(SupervisorError::Unavailable("connection refused".to_owned()))
    }
}

#[fixture]
fn review_task() -> OrchestrationTask {
    seed::demo_tasks(&DefaultClock)
        .expect("demo fixtures should build")
        .into_iter()
        .next()
        .expect("demo fixtures should not be empty")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analysis_returns_the_collaborator_text(review_task: OrchestrationTask) {
    let service = SupervisorService::new(Arc::new(CannedAnalyst));

    let analysis = service
        .analyse_task(&review_task)
        .await
        .expect("analysis should succeed");

    assert_eq!(
        analysis,
        "The task is parked on human review; approve to proceed."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analysis_outage_is_non_fatal_and_leaves_the_task_unchanged(
    review_task: OrchestrationTask,
) {
    let service = SupervisorService::new(Arc::new(OutageAnalyst));
    let before = review_task.clone();

    let result = service.analyse_task(&review_task).await;

    assert!(matches!(
        result,
        Err(SupervisorServiceError::Analyst(
            SupervisorError::Unavailable(_)
        ))
    ));
    assert_eq!(review_task, before);
}
