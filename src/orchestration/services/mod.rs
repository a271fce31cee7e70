//! Application services for the orchestration console.

mod analysis;
mod console;

pub use analysis::{SupervisorService, SupervisorServiceError, SupervisorServiceResult};
pub use console::{CreateTaskRequest, TaskConsoleError, TaskConsoleResult, TaskConsoleService};
