//! Unit tests for orchestration domain types and creation semantics.

use crate::orchestration::domain::{
    AgentDomain, AgentId, AgentRoster, AgentStatus, HandoverEntry, HandoverLog, HUMAN_OPERATOR,
    OrchestrationDomainError, OrchestrationTask, ParseAgentStatusError, ParseTaskStatusError,
    TaskStatus, TemplateSelection, WorkflowPlan, WorkflowStep,
};
use crate::orchestration::tests::support::SteppingClock;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn clock() -> SteppingClock {
    SteppingClock::new()
}

#[rstest]
fn create_produces_the_documented_initial_state(clock: SteppingClock) {
    let task = OrchestrationTask::create("Sync docs", "Sync Q4 docs", &clock)
        .expect("creation should succeed");

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.operator(), HUMAN_OPERATOR);
    assert_eq!(task.prompt(), "Sync Q4 docs");
    assert_eq!(task.created_at(), task.updated_at());
    assert!(task.container_id().as_str().starts_with("container_"));
    assert_eq!(task.chosen_templates(), &TemplateSelection::placeholder());

    assert!(task.agents().all_idle());
    assert_eq!(task.agents().entries().len(), 3);

    assert_eq!(task.workflow().len(), 1);
    let first_step = task.workflow().steps().first().expect("one planned step");
    assert_eq!(first_step.step(), "parse_prompt");
    assert_eq!(first_step.agent(), AgentId::Taskflow);

    assert_eq!(task.history().len(), 1);
    let entry = task.history().latest().expect("one history entry");
    assert_eq!(entry.action(), "create");
    assert_eq!(entry.by(), HUMAN_OPERATOR);
    assert_eq!(entry.message(), Some("Task created."));
}

#[rstest]
fn create_generates_distinct_ids(clock: SteppingClock) {
    let first = OrchestrationTask::create("One", "First task", &clock)
        .expect("creation should succeed");
    let second = OrchestrationTask::create("Two", "Second task", &clock)
        .expect("creation should succeed");

    assert_ne!(first.id(), second.id());
    assert_ne!(first.container_id(), second.container_id());
}

#[rstest]
#[case("", "A description", OrchestrationDomainError::EmptyTaskName)]
#[case("   ", "A description", OrchestrationDomainError::EmptyTaskName)]
#[case("A name", "", OrchestrationDomainError::EmptyTaskDescription)]
#[case("A name", "  \t ", OrchestrationDomainError::EmptyTaskDescription)]
fn create_rejects_blank_required_fields(
    clock: SteppingClock,
    #[case] name: &str,
    #[case] description: &str,
    #[case] expected: OrchestrationDomainError,
) {
    let result = OrchestrationTask::create(name, description, &clock);
    assert_eq!(result, Err(expected));
}

#[rstest]
fn update_status_appends_default_message(clock: SteppingClock) {
    let mut task = OrchestrationTask::create("Status test", "Check default messages", &clock)
        .expect("creation should succeed");

    task.update_status(TaskStatus::InProgress, None, &clock);

    let entry = task.history().latest().expect("entry appended");
    assert_eq!(entry.action(), "status-update");
    assert_eq!(entry.by(), HUMAN_OPERATOR);
    assert_eq!(entry.message(), Some("Task status updated to in_progress."));
}

#[rstest]
fn update_status_prefers_caller_message(clock: SteppingClock) {
    let mut task = OrchestrationTask::create("Status test", "Check custom messages", &clock)
        .expect("creation should succeed");

    task.update_status(TaskStatus::Failed, Some("Container crashed."), &clock);

    let entry = task.history().latest().expect("entry appended");
    assert_eq!(entry.message(), Some("Container crashed."));
}

#[rstest]
fn history_is_append_only_across_updates(clock: SteppingClock) {
    let mut task = OrchestrationTask::create("Audit test", "Exercise the log", &clock)
        .expect("creation should succeed");
    let original: Vec<_> = task.history().entries().to_vec();

    let updates = [
        TaskStatus::InProgress,
        TaskStatus::AwaitingReview,
        TaskStatus::Completed,
    ];
    for status in updates {
        task.update_status(status, None, &clock);
    }

    let entries = task.history().entries();
    assert_eq!(entries.len(), original.len() + updates.len());
    // Original entries survive as a prefix, in order.
    assert_eq!(entries.get(..original.len()), Some(original.as_slice()));
    // New entries carry strictly increasing timestamps in call order.
    for window in entries.windows(2) {
        let [earlier, later] = window else {
            continue;
        };
        assert!(earlier.at() < later.at());
    }
}

#[test]
fn task_status_wire_names_round_trip() {
    for status in [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::AwaitingReview,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::Vetoed,
    ] {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
    assert_eq!(
        TaskStatus::try_from("archived"),
        Err(ParseTaskStatusError("archived".to_owned()))
    );
}

#[test]
fn agent_status_wire_names_round_trip() {
    for status in [
        AgentStatus::Idle,
        AgentStatus::Processing,
        AgentStatus::AwaitingInput,
        AgentStatus::Succeeded,
        AgentStatus::Error,
    ] {
        assert_eq!(AgentStatus::try_from(status.as_str()), Ok(status));
    }
    assert_eq!(
        AgentStatus::try_from("sleeping"),
        Err(ParseAgentStatusError("sleeping".to_owned()))
    );
}

#[test]
fn roster_is_fixed_and_ordered() {
    let roster = AgentRoster::idle();
    let identities: Vec<_> = roster.entries().iter().map(|entry| entry.id()).collect();
    assert_eq!(identities, AgentId::ALL.to_vec());

    assert_eq!(AgentId::Taskflow.domain(), AgentDomain::Both);
    assert_eq!(AgentId::Alpha.domain(), AgentDomain::Alpha);
    assert_eq!(AgentId::Bravo.domain(), AgentDomain::Bravo);
}

#[test]
fn roster_status_updates_touch_only_the_named_agent() {
    let mut roster = AgentRoster::idle();
    roster.set_status(AgentId::Bravo, AgentStatus::Processing);

    assert_eq!(roster.get(AgentId::Bravo).status(), AgentStatus::Processing);
    assert_eq!(roster.get(AgentId::Taskflow).status(), AgentStatus::Idle);
    assert_eq!(roster.get(AgentId::Alpha).status(), AgentStatus::Idle);
    assert!(!roster.all_idle());
}

#[test]
fn workflow_steps_validate_and_append_in_order() {
    let mut plan = WorkflowPlan::initial();
    let step =
        WorkflowStep::new("build_ui", AgentId::Alpha).expect("non-empty step should be valid");
    plan.append(step);

    let names: Vec<_> = plan.steps().iter().map(WorkflowStep::step).collect();
    assert_eq!(names, vec!["parse_prompt", "build_ui"]);

    assert_eq!(
        WorkflowStep::new("  ", AgentId::Bravo),
        Err(OrchestrationDomainError::EmptyWorkflowStep)
    );
}

#[rstest]
fn handover_entries_carry_open_detail_maps(clock: SteppingClock) {
    let entry = HandoverEntry::new("communication", AgentId::Alpha.as_str(), &clock)
        .with_detail("to", json!("BravoAgent"))
        .with_detail("attempt", json!(2))
        .with_message("I am parsing the patch notes now.");

    assert_eq!(entry.action(), "communication");
    assert_eq!(entry.by(), "AlphaAgent");
    assert_eq!(entry.details().len(), 3);
    assert_eq!(entry.message(), Some("I am parsing the patch notes now."));

    let mut log = HandoverLog::empty();
    assert!(log.is_empty());
    log.record(entry.clone());
    assert_eq!(log.latest(), Some(&entry));
    assert_eq!(log.newest_first().count(), 1);
}
