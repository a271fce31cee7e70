//! Port contracts for orchestration task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the
//! orchestration services.

pub mod repository;
pub mod supervisor;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use supervisor::{SupervisorAnalyst, SupervisorError, SupervisorResult};
