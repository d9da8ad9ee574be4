//! Domain model for project snapshots.
//!
//! Projects group tasks within an organization. Snapshots carry the task
//! counters reported by the remote API alongside the lifecycle status.

mod error;
mod ids;
mod project;
mod status;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::{Project, ProjectSnapshotData};
pub use status::ProjectStatus;
