//! In-memory adapter implementations.
//!
//! These adapters stand in for a real backend: simple, thread-safe
//! collections suitable for the console's mock data layer and for unit
//! testing without database dependencies.

mod task;

pub use task::InMemoryTaskRepository;
