//! Demo fixtures for the console.
//!
//! Reproduces the two seeded tasks the console ships with so the list and
//! detail views have something to show before any task is created.

use crate::orchestration::domain::{
    AgentId, AgentRoster, AgentStatus, ContainerId, HandoverEntry, HandoverLog,
    OrchestrationDomainError, OrchestrationTask, PersistedTaskData, TaskId, TaskStatus,
    TemplateSelection, WorkflowPlan, WorkflowStep,
};
use chrono::Duration;
use mockable::Clock;
use serde_json::json;

/// Builds the demo task collection, timestamped relative to the clock.
///
/// # Errors
///
/// Returns [`OrchestrationDomainError`] when a fixture workflow step fails
/// validation; the fixtures are static, so this signals a defect in the
/// fixture data itself.
pub fn demo_tasks(clock: &impl Clock) -> Result<Vec<OrchestrationTask>, OrchestrationDomainError> {
    Ok(vec![todo_app_task(clock)?, security_patch_task(clock)?])
}

/// Multi-agent build task parked on human review.
fn todo_app_task(clock: &impl Clock) -> Result<OrchestrationTask, OrchestrationDomainError> {
    let now = clock.utc();
    let created_at = now - Duration::seconds(86_400);
    let description = "Build fancy to-do app with React + Tailwind + IndexedDB";

    let workflow = WorkflowPlan::from_steps(vec![
        WorkflowStep::new("parse_prompt", AgentId::Taskflow)?,
        WorkflowStep::new("match_registry", AgentId::Taskflow)?,
        WorkflowStep::new("create_container", AgentId::Taskflow)?,
        WorkflowStep::new("build_ui", AgentId::Alpha)?,
        WorkflowStep::new("setup_services", AgentId::Bravo)?,
        WorkflowStep::new("datastore_integration", AgentId::Bravo)?,
        WorkflowStep::new("finalize_handover", AgentId::Taskflow)?,
    ]);

    let history = HandoverLog::from_entries(vec![
        HandoverEntry::recorded_at("create", AgentId::Taskflow.as_str(), created_at)
            .with_detail("container", json!("initialized")),
        HandoverEntry::recorded_at(
            "ui-update",
            AgentId::Alpha.as_str(),
            now - Duration::seconds(85_000),
        )
        .with_detail("template_used", json!("REACT"))
        .with_detail("components_added", json!(["ToDoList", "GlassCard"]))
        .with_detail("notes", json!("Applied Tailwind glassmorphism.")),
        HandoverEntry::recorded_at(
            "service-setup",
            AgentId::Bravo.as_str(),
            now - Duration::seconds(84_000),
        )
        .with_detail("service", json!("NODE_EXPRESS"))
        .with_detail("endpoint", json!("/api/tasks"))
        .with_detail("notes", json!("Express server created.")),
        HandoverEntry::recorded_at("system-event", "System", now - Duration::seconds(3_600))
            .with_message("Awaiting human review before datastore integration."),
    ]);

    Ok(OrchestrationTask::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        name: "Build fancy to-do app".to_owned(),
        description: description.to_owned(),
        prompt: description.to_owned(),
        status: TaskStatus::AwaitingReview,
        created_at,
        updated_at: now - Duration::seconds(3_600),
        container_id: ContainerId::new("container_a1b2c3d4"),
        operator: "andoy".to_owned(),
        chosen_templates: TemplateSelection::new("REACT", vec!["TAILWIND".to_owned()], "IndexedDB"),
        agents: AgentRoster::idle()
            .with_status(AgentId::Taskflow, AgentStatus::Succeeded)
            .with_status(AgentId::Alpha, AgentStatus::Succeeded)
            .with_status(AgentId::Bravo, AgentStatus::AwaitingInput),
        workflow,
        history,
    }))
}

/// Documentation fan-out task still in progress.
fn security_patch_task(
    clock: &impl Clock,
) -> Result<OrchestrationTask, OrchestrationDomainError> {
    let now = clock.utc();
    let created_at = now - Duration::seconds(7_200);

    let workflow = WorkflowPlan::from_steps(vec![
        WorkflowStep::new("parse_prompt", AgentId::Taskflow)?,
        WorkflowStep::new("scan_docs_alpha", AgentId::Alpha)?,
        WorkflowStep::new("scan_docs_bravo", AgentId::Bravo)?,
        WorkflowStep::new("apply_patch_notes", AgentId::Taskflow)?,
    ]);

    let history = HandoverLog::from_entries(vec![
        HandoverEntry::recorded_at("create", "Human Operator", created_at)
            .with_detail("priority", json!("high")),
        HandoverEntry::recorded_at(
            "communication",
            AgentId::Alpha.as_str(),
            now - Duration::seconds(600),
        )
        .with_detail("to", json!(AgentId::Bravo.as_str()))
        .with_detail("message", json!("I am parsing the patch notes now.")),
        HandoverEntry::recorded_at(
            "communication",
            AgentId::Bravo.as_str(),
            now - Duration::seconds(500),
        )
        .with_detail("to", json!(AgentId::Alpha.as_str()))
        .with_detail(
            "message",
            json!("Acknowledged. I am scanning Domain B for affected documentation."),
        ),
    ]);

    Ok(OrchestrationTask::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        name: "Propagate Security Patch KB-0345".to_owned(),
        description: "Distribute knowledge base article for security patch KB-0345 to all \
                      relevant system documentation."
            .to_owned(),
        prompt: "Distribute knowledge base article for security patch KB-0345".to_owned(),
        status: TaskStatus::InProgress,
        created_at,
        updated_at: now - Duration::seconds(600),
        container_id: ContainerId::new("container_e5f6g7h8"),
        operator: "system".to_owned(),
        chosen_templates: TemplateSelection::new("DOCS", Vec::new(), "NONE"),
        agents: AgentRoster::idle()
            .with_status(AgentId::Taskflow, AgentStatus::Succeeded)
            .with_status(AgentId::Alpha, AgentStatus::Processing)
            .with_status(AgentId::Bravo, AgentStatus::Processing),
        workflow,
        history,
    }))
}
