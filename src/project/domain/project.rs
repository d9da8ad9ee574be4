//! Project snapshot as fetched from the remote API.

use super::{ProjectDomainError, ProjectId, ProjectStatus};
use crate::organization::domain::OrganizationId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable, point-in-time copy of a project and its task counters.
///
/// The counters come straight from the remote API. A snapshot whose
/// `completed_task_count` exceeds `task_count` is accepted as-is; derived
/// metrics clamp such values instead of rejecting the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    organization_id: OrganizationId,
    name: String,
    description: String,
    status: ProjectStatus,
    due_date: Option<DateTime<Utc>>,
    task_count: u32,
    completed_task_count: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for building a project snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshotData {
    /// Project identifier.
    pub id: ProjectId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Project name.
    pub name: String,
    /// Free-form description, empty when absent.
    pub description: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Number of tasks in the project.
    pub task_count: u32,
    /// Number of tasks in `DONE`.
    pub completed_task_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ProjectSnapshotData {
    /// Creates snapshot data for an empty active project.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            organization_id,
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::Active,
            due_date: None,
            task_count: 0,
            completed_task_count: 0,
            created_at,
            updated_at: created_at,
        }
    }

    /// Sets the project identifier.
    #[must_use]
    pub const fn with_id(mut self, id: ProjectId) -> Self {
        self.id = id;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets both task counters.
    #[must_use]
    pub const fn with_task_counts(mut self, task_count: u32, completed_task_count: u32) -> Self {
        self.task_count = task_count;
        self.completed_task_count = completed_task_count;
        self
    }
}

impl Project {
    /// Builds a validated project snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the name is blank.
    pub fn from_snapshot(data: ProjectSnapshotData) -> Result<Self, ProjectDomainError> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }

        Ok(Self {
            id: data.id,
            organization_id: data.organization_id,
            name: name.to_owned(),
            description: data.description.trim().to_owned(),
            status: data.status,
            due_date: data.due_date,
            task_count: data.task_count,
            completed_task_count: data.completed_task_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning organization identifier.
    #[must_use]
    pub const fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the number of tasks in the project.
    #[must_use]
    pub const fn task_count(&self) -> u32 {
        self.task_count
    }

    /// Returns the number of completed tasks as reported upstream.
    #[must_use]
    pub const fn completed_task_count(&self) -> u32 {
        self.completed_task_count
    }

    /// Returns `true` when upstream reported more completed tasks than tasks.
    #[must_use]
    pub const fn has_count_anomaly(&self) -> bool {
        self.completed_task_count > self.task_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
