//! Task snapshot as fetched from the remote API.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable, point-in-time copy of a task.
///
/// Snapshots are only ever produced by the remote API (or a gateway standing
/// in for it). Nothing in this crate mutates a snapshot after construction;
/// a changed task is observed by fetching a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    assignee_email: Option<String>,
    due_date: Option<DateTime<Utc>>,
    comment_count: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for building a task snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshotData {
    /// Task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Free-form description, empty when absent.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Assignee identifier, if any.
    pub assignee_email: Option<String>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Number of comments attached to the task.
    pub comment_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskSnapshotData {
    /// Creates snapshot data for a fresh `TODO` task with medium priority.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            project_id,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignee_email: None,
            due_date: None,
            comment_count: 0,
            created_at,
            updated_at: created_at,
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
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
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_email: impl Into<String>) -> Self {
        self.assignee_email = Some(assignee_email.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the comment count.
    #[must_use]
    pub const fn with_comment_count(mut self, comment_count: u32) -> Self {
        self.comment_count = comment_count;
        self
    }
}

impl Task {
    /// Builds a validated task snapshot.
    ///
    /// The title and description are trimmed. A blank assignee is treated as
    /// unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn from_snapshot(data: TaskSnapshotData) -> Result<Self, TaskDomainError> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let assignee_email = data
            .assignee_email
            .map(|email| email.trim().to_owned())
            .filter(|email| !email.is_empty());

        Ok(Self {
            id: data.id,
            project_id: data.project_id,
            title: title.to_owned(),
            description: data.description.trim().to_owned(),
            status: data.status,
            priority: data.priority,
            assignee_email,
            due_date: data.due_date,
            comment_count: data.comment_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Decomposes the snapshot back into its parameter object.
    #[must_use]
    pub fn into_snapshot(self) -> TaskSnapshotData {
        TaskSnapshotData {
            id: self.id,
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            assignee_email: self.assignee_email,
            due_date: self.due_date,
            comment_count: self.comment_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignee identifier, if any.
    #[must_use]
    pub fn assignee_email(&self) -> Option<&str> {
        self.assignee_email.as_deref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the number of comments on the task.
    #[must_use]
    pub const fn comment_count(&self) -> u32 {
        self.comment_count
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
