//! In-memory integration tests for the task console lifecycle.

use std::sync::Arc;

use atrium::orchestration::{
    adapters::memory::InMemoryTaskRepository,
    domain::{OrchestrationTask, TaskId, TaskStatus},
    seed,
    services::{CreateTaskRequest, TaskConsoleError, TaskConsoleService},
    views::TaskDetail,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskConsoleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskConsoleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Console service backed by the demo fixture collection.
fn seeded_service() -> TestService {
    let clock = DefaultClock;
    let tasks = seed::demo_tasks(&clock).expect("demo fixtures should build");
    TaskConsoleService::new(
        Arc::new(InMemoryTaskRepository::seeded(tasks)),
        Arc::new(clock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_review_lifecycle_ends_in_completed(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new(
            "Ship release notes",
            "Draft and publish the 2.4 release notes",
        ))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Pending);

    service
        .update_task_status(
            created.id(),
            TaskStatus::InProgress,
            Some("TaskflowAgent parsed the prompt."),
        )
        .await
        .expect("update should succeed")
        .expect("task should exist");
    service
        .update_task_status(created.id(), TaskStatus::AwaitingReview, None)
        .await
        .expect("update should succeed")
        .expect("task should exist");

    let approved = service
        .approve_task(created.id())
        .await
        .expect("approval should succeed")
        .expect("task should exist");

    assert_eq!(approved.status(), TaskStatus::Completed);
    assert_eq!(approved.history().len(), 4);
    let actions: Vec<&str> = approved
        .history()
        .entries()
        .iter()
        .map(|entry| entry.action())
        .collect();
    assert_eq!(
        actions,
        vec!["create", "status-update", "status-update", "status-update"]
    );
    assert!(approved.updated_at() >= approved.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn veto_lifecycle_ends_in_vetoed(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new(
            "Rebuild billing pipeline",
            "Replace the nightly billing batch with streaming",
        ))
        .await
        .expect("task creation should succeed");
    service
        .update_task_status(created.id(), TaskStatus::InProgress, None)
        .await
        .expect("update should succeed");
    service
        .update_task_status(created.id(), TaskStatus::AwaitingReview, None)
        .await
        .expect("update should succeed");

    let vetoed = service
        .veto_task(created.id())
        .await
        .expect("veto should succeed")
        .expect("task should exist");

    assert_eq!(vetoed.status(), TaskStatus::Vetoed);
    let latest = vetoed.history().latest().expect("history entry appended");
    assert_eq!(latest.message(), Some("Task vetoed by human operator."));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_actions_reject_tasks_outside_awaiting_review(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Too early", "Still pending"))
        .await
        .expect("task creation should succeed");

    let approve_result = service.approve_task(created.id()).await;
    assert!(matches!(
        approve_result,
        Err(TaskConsoleError::Domain(_))
    ));

    let veto_result = service.veto_task(created.id()).await;
    assert!(matches!(veto_result, Err(TaskConsoleError::Domain(_))));

    let stored = service
        .retrieve_task(created.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::Pending);
    assert_eq!(stored.history().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_tasks_are_reported_as_absence(service: TestService) {
    let fetched = service
        .retrieve_task(TaskId::new())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());

    let updated = service
        .update_task_status(TaskId::new(), TaskStatus::Failed, None)
        .await
        .expect("update should succeed");
    assert!(updated.is_none());

    let approved = service
        .approve_task(TaskId::new())
        .await
        .expect("approval should succeed");
    assert!(approved.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn seeded_collection_lists_newest_first_and_renders_detail() {
    let service = seeded_service();

    let listed = service.list_tasks().await.expect("listing should succeed");
    let names: Vec<&str> = listed.iter().map(OrchestrationTask::name).collect();
    assert_eq!(
        names,
        vec!["Propagate Security Patch KB-0345", "Build fancy to-do app"]
    );
    for window in listed.windows(2) {
        let [newer, older] = window else {
            continue;
        };
        assert!(newer.created_at() >= older.created_at());
    }

    let review_task = listed
        .iter()
        .find(|task| task.status() == TaskStatus::AwaitingReview)
        .expect("one demo task awaits review");
    let detail = TaskDetail::from_task(review_task);
    assert!(detail.review_available);
    assert_eq!(detail.history.len(), 4);
    let newest = detail.history.first().expect("history present");
    assert_eq!(newest.action(), "system-event");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_review_task_can_be_approved(#[values(true, false)] approve: bool) {
    let service = seeded_service();
    let listed = service.list_tasks().await.expect("listing should succeed");
    let review_task = listed
        .iter()
        .find(|task| task.status() == TaskStatus::AwaitingReview)
        .expect("one demo task awaits review");

    let decided = if approve {
        service.approve_task(review_task.id()).await
    } else {
        service.veto_task(review_task.id()).await
    }
    .expect("review decision should succeed")
    .expect("task should exist");

    let expected = if approve {
        TaskStatus::Completed
    } else {
        TaskStatus::Vetoed
    };
    assert_eq!(decided.status(), expected);
    assert_eq!(decided.history().len(), review_task.history().len() + 1);
}
