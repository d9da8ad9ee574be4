//! Domain model for task snapshots.
//!
//! Tasks are read-only snapshots of records owned by the remote API. The
//! domain provides the closed status and priority enumerations and
//! validated snapshot construction; it never mutates a fetched task.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskPriority, TaskStatus};
pub use task::{Task, TaskSnapshotData};
