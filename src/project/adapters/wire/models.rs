//! Serde records mirroring the remote project API payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Organization object as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRecord {
    /// Organization identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Number of projects.
    #[serde(default)]
    pub project_count: u32,
    /// Number of projects in `ACTIVE`.
    #[serde(default)]
    pub active_project_count: u32,
}

/// Project object as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Project identifier.
    pub id: Uuid,
    /// Owning organization reference.
    pub organization: OrganizationRef,
    /// Project name.
    pub name: String,
    /// Description; `null` or omitted when empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Status string such as `ON_HOLD`.
    pub status: String,
    /// Calendar deadline without a time of day.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Number of tasks.
    #[serde(default)]
    pub task_count: u32,
    /// Number of tasks in `DONE`.
    #[serde(default)]
    pub completed_task_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Nested `{ "id": ... }` reference.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrganizationRef {
    /// Referenced organization identifier.
    pub id: Uuid,
}
