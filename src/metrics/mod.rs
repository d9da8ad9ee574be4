//! Derived view-model metrics.
//!
//! Pure, deterministic functions computing per-entity flags (overdue,
//! completion percentage, priority weight, colour tokens) and collection
//! aggregates (status counts, completion rates, filtered lists) from raw
//! snapshots. Nothing here reads a clock, logs, or mutates its input: the
//! caller samples "now" once per operation and passes it in.

mod affordance;
mod aggregate;
mod color;
mod completion;
mod config;
mod filter;
mod overdue;
mod priority;
mod stats;
mod status;

pub use affordance::{can_add_tasks, can_be_completed};
pub use aggregate::{StatusCounts, count_by_status};
pub use color::{
    ColorToken, priority_color_token, progress_color_token, project_status_color,
    status_color_token, task_status_color,
};
pub use completion::{completion_percentage, completion_rate};
pub use config::{MetricsConfig, PriorityHorizon, ProgressThresholds};
pub use filter::{EntityFilter, filter_by_predicates};
pub use overdue::{entity_is_overdue, is_overdue};
pub use priority::{most_urgent_first, priority_weight, suggested_priority};
pub use stats::{ProjectStats, TaskStats};
pub use status::{LifecycleStatus, Tracked};

#[cfg(test)]
mod tests;
