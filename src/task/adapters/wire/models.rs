//! Serde records mirroring the remote task API payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Task object as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier.
    pub id: Uuid,
    /// Owning project reference.
    pub project: ProjectRef,
    /// Task title.
    pub title: String,
    /// Description; the API sends `null` or omits it when empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Status string such as `IN_PROGRESS`.
    pub status: String,
    /// Priority string such as `HIGH`.
    pub priority: String,
    /// Assignee identifier.
    #[serde(default)]
    pub assignee_email: Option<String>,
    /// Deadline.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Comment count, absent on older payloads.
    #[serde(default)]
    pub comment_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Nested `{ "id": ... }` reference.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProjectRef {
    /// Referenced project identifier.
    pub id: Uuid,
}

/// Mutation envelope for `updateTaskStatus`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskMutationRecord {
    /// Whether the server applied the change.
    pub success: bool,
    /// Server-side error messages.
    #[serde(default)]
    pub errors: Vec<String>,
    /// The mutated task, present on success.
    #[serde(default)]
    pub task: Option<TaskRecord>,
}
