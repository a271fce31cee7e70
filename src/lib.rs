//! Atrium: management console core for an AI-platform API.
//!
//! This crate provides the orchestration-task subsystem of the console:
//! creating and inspecting multi-agent tasks, driving their status state
//! machine through human review, and keeping the append-only handover
//! audit trail that the detail view renders.
//!
//! # Architecture
//!
//! Atrium follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, etc.)
//!
//! The peer resource subsystems of the console (fine-tuning jobs, vector
//! stores, sandbox containers) share this interface shape; containers
//! appear here only as opaque id references.
//!
//! # Modules
//!
//! - [`orchestration`]: Multi-agent task lifecycle, review, and audit trail

pub mod orchestration;
