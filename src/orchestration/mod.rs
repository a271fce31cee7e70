//! Orchestration task management for Atrium.
//!
//! This module implements the multi-agent orchestration resource of the
//! management console: listing, inspecting, creating, and mutating tasks,
//! the status state machine gated by human review, the fixed agent
//! roster and planned workflow, and the append-only handover audit
//! trail. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Presentation projections in [`views`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
