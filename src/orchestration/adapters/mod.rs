//! Adapter implementations of the orchestration ports.

pub mod memory;
