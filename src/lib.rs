//! Taskboard: client-side core of a project and task dashboard.
//!
//! The crate reads organization, project and task snapshots from a remote
//! API, decides which task status changes to offer, submits them, and
//! derives the metrics a dashboard renders: overdue flags, completion
//! percentages, priority weights, colour tokens, status counts and
//! filtered views.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Snapshot types and closed status enumerations
//! - **Ports**: Abstract gateway traits for the remote API
//! - **Adapters**: In-memory gateways and the JSON wire codec
//! - **Services**: Orchestration of fetches, policy checks and metrics
//!
//! # Modules
//!
//! - [`organization`]: Tenants and their slugs
//! - [`project`]: Project snapshots and the organization overview
//! - [`task`]: Task snapshots, the status transition table, and the board
//! - [`metrics`]: Pure derived metrics over snapshots

pub mod metrics;
pub mod organization;
pub mod project;
pub mod task;
