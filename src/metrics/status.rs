//! Traits tying task and project snapshots to the shared derivations.

use super::color::{ColorToken, project_status_color, task_status_color};
use crate::project::domain::{Project, ProjectStatus};
use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::Hash;

/// A closed lifecycle enumeration.
pub trait LifecycleStatus: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every member of the enumeration, in display order.
    const ALL: &'static [Self];

    /// Returns `true` for statuses that end the entity's lifecycle.
    fn is_terminal(self) -> bool;

    /// Returns the presentation colour for the status.
    fn color_token(self) -> ColorToken;
}

impl LifecycleStatus for TaskStatus {
    const ALL: &'static [Self] = &Self::ALL;

    fn is_terminal(self) -> bool {
        Self::is_terminal(self)
    }

    fn color_token(self) -> ColorToken {
        task_status_color(self)
    }
}

impl LifecycleStatus for ProjectStatus {
    const ALL: &'static [Self] = &Self::ALL;

    fn is_terminal(self) -> bool {
        Self::is_terminal(self)
    }

    fn color_token(self) -> ColorToken {
        project_status_color(self)
    }
}

/// An entity snapshot with a lifecycle status and searchable text.
pub trait Tracked {
    /// The entity's status enumeration.
    type Status: LifecycleStatus;

    /// Returns the current status.
    fn status(&self) -> Self::Status;

    /// Returns the deadline, if any.
    fn due_date(&self) -> Option<DateTime<Utc>>;

    /// Returns the name or title matched by free-text search.
    fn label(&self) -> &str;

    /// Returns the description matched by free-text search.
    fn description(&self) -> &str;

    /// Returns the assignee identifier, if the entity kind has one.
    fn assignee(&self) -> Option<&str> {
        None
    }

    /// Returns the priority, if the entity kind has one.
    fn priority(&self) -> Option<TaskPriority> {
        None
    }
}

impl Tracked for Task {
    type Status = TaskStatus;

    fn status(&self) -> TaskStatus {
        Self::status(self)
    }

    fn due_date(&self) -> Option<DateTime<Utc>> {
        Self::due_date(self)
    }

    fn label(&self) -> &str {
        self.title()
    }

    fn description(&self) -> &str {
        Self::description(self)
    }

    fn assignee(&self) -> Option<&str> {
        self.assignee_email()
    }

    fn priority(&self) -> Option<TaskPriority> {
        Some(Self::priority(self))
    }
}

impl Tracked for Project {
    type Status = ProjectStatus;

    fn status(&self) -> ProjectStatus {
        Self::status(self)
    }

    fn due_date(&self) -> Option<DateTime<Utc>> {
        Self::due_date(self)
    }

    fn label(&self) -> &str {
        self.name()
    }

    fn description(&self) -> &str {
        Self::description(self)
    }
}
