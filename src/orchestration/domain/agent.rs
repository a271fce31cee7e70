//! Fixed agent roster and per-agent processing status.
//!
//! The roster is a closed enumeration: every task carries exactly the
//! three known agent identities, each with an independent status. No
//! dynamic roster growth or shrinkage is representable.

use super::ParseAgentStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cooperating agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    /// Coordinator that parses prompts and finalises handovers.
    #[serde(rename = "TaskflowAgent")]
    Taskflow,
    /// Specialist for the Alpha domain.
    #[serde(rename = "AlphaAgent")]
    Alpha,
    /// Specialist for the Bravo domain.
    #[serde(rename = "BravoAgent")]
    Bravo,
}

impl AgentId {
    /// All agent identities in canonical roster order.
    pub const ALL: [Self; 3] = [Self::Taskflow, Self::Alpha, Self::Bravo];

    /// Returns the canonical agent name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Taskflow => "TaskflowAgent",
            Self::Alpha => "AlphaAgent",
            Self::Bravo => "BravoAgent",
        }
    }

    /// Returns the informational domain tag for this agent.
    ///
    /// The tag is display-only; no routing logic keys off it.
    #[must_use]
    pub const fn domain(self) -> AgentDomain {
        match self {
            Self::Taskflow => AgentDomain::Both,
            Self::Alpha => AgentDomain::Alpha,
            Self::Bravo => AgentDomain::Bravo,
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Informational domain tag attached to each agent identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentDomain {
    /// The Alpha domain.
    Alpha,
    /// The Bravo domain.
    Bravo,
    /// Both domains.
    Both,
}

impl AgentDomain {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::Bravo => "Bravo",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for AgentDomain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Processing status of a single agent, independent of the task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// Agent has no work assigned.
    Idle,
    /// Agent is actively working.
    Processing,
    /// Agent is blocked on external input.
    AwaitingInput,
    /// Agent finished its work successfully.
    Succeeded,
    /// Agent encountered an error.
    Error,
}

impl AgentStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::AwaitingInput => "awaiting_input",
            Self::Succeeded => "succeeded",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AgentStatus {
    type Error = ParseAgentStatusError;

    fn try_from(value: &str) -> Result<Self, ParseAgentStatusError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "idle" => Ok(Self::Idle),
            "processing" => Ok(Self::Processing),
            "awaiting_input" => Ok(Self::AwaitingInput),
            "succeeded" => Ok(Self::Succeeded),
            "error" => Ok(Self::Error),
            _ => Err(ParseAgentStatusError(value.to_owned())),
        }
    }
}

/// Roster entry pairing one agent identity with its current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    id: AgentId,
    status: AgentStatus,
}

impl AgentState {
    /// Creates an idle roster entry for the given agent.
    #[must_use]
    pub const fn idle(id: AgentId) -> Self {
        Self {
            id,
            status: AgentStatus::Idle,
        }
    }

    /// Creates a roster entry with an explicit status.
    #[must_use]
    pub const fn with_status(id: AgentId, status: AgentStatus) -> Self {
        Self { id, status }
    }

    /// Returns the agent identity.
    #[must_use]
    pub const fn id(self) -> AgentId {
        self.id
    }

    /// Returns the agent's current status.
    #[must_use]
    pub const fn status(self) -> AgentStatus {
        self.status
    }

    /// Returns the informational domain tag for this agent.
    #[must_use]
    pub const fn domain(self) -> AgentDomain {
        self.id.domain()
    }
}

/// Fixed three-member agent roster carried by every task.
///
/// Holding one field per identity makes the roster invariant structural:
/// a roster with missing, duplicated, or extra agents cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRoster {
    taskflow: AgentState,
    alpha: AgentState,
    bravo: AgentState,
}

impl AgentRoster {
    /// Creates the default roster with all agents idle.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            taskflow: AgentState::idle(AgentId::Taskflow),
            alpha: AgentState::idle(AgentId::Alpha),
            bravo: AgentState::idle(AgentId::Bravo),
        }
    }

    /// Returns the roster entry for the given agent.
    #[must_use]
    pub const fn get(&self, id: AgentId) -> AgentState {
        match id {
            AgentId::Taskflow => self.taskflow,
            AgentId::Alpha => self.alpha,
            AgentId::Bravo => self.bravo,
        }
    }

    /// Replaces the status of the given agent.
    pub const fn set_status(&mut self, id: AgentId, status: AgentStatus) {
        let entry = AgentState::with_status(id, status);
        match id {
            AgentId::Taskflow => self.taskflow = entry,
            AgentId::Alpha => self.alpha = entry,
            AgentId::Bravo => self.bravo = entry,
        }
    }

    /// Builder-style variant of [`Self::set_status`] for seeding rosters.
    #[must_use]
    pub const fn with_status(mut self, id: AgentId, status: AgentStatus) -> Self {
        self.set_status(id, status);
        self
    }

    /// Returns the roster entries in canonical order.
    #[must_use]
    pub const fn entries(&self) -> [AgentState; 3] {
        [self.taskflow, self.alpha, self.bravo]
    }

    /// Returns `true` when every agent is idle.
    #[must_use]
    pub fn all_idle(&self) -> bool {
        self.entries()
            .iter()
            .all(|entry| entry.status() == AgentStatus::Idle)
    }
}

impl Default for AgentRoster {
    fn default() -> Self {
        Self::idle()
    }
}
