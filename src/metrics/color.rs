//! Presentation colour tables.

use super::config::ProgressThresholds;
use super::status::LifecycleStatus;
use crate::project::domain::ProjectStatus;
use crate::task::domain::{TaskPriority, TaskStatus};
use serde::Serialize;
use std::fmt;

/// Semantic colour tag consumed by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Positive or finished.
    Success,
    /// Delivered, emphasised.
    Primary,
    /// In motion.
    Info,
    /// Needs watching.
    Warning,
    /// Needs attention soon.
    Caution,
    /// Stopped or failing.
    Danger,
    /// No emphasis.
    Neutral,
}

impl ColorToken {
    /// Returns the token name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the colour for a task status.
#[must_use]
pub const fn task_status_color(status: TaskStatus) -> ColorToken {
    match status {
        TaskStatus::Todo => ColorToken::Neutral,
        TaskStatus::InProgress => ColorToken::Info,
        TaskStatus::Done => ColorToken::Success,
        TaskStatus::Blocked => ColorToken::Danger,
    }
}

/// Returns the colour for a project status.
#[must_use]
pub const fn project_status_color(status: ProjectStatus) -> ColorToken {
    match status {
        ProjectStatus::Active => ColorToken::Success,
        ProjectStatus::Completed => ColorToken::Primary,
        ProjectStatus::OnHold => ColorToken::Warning,
        ProjectStatus::Cancelled => ColorToken::Danger,
    }
}

/// Returns the colour for any lifecycle status.
#[must_use]
pub fn status_color_token<S: LifecycleStatus>(status: S) -> ColorToken {
    status.color_token()
}

/// Returns the colour for a task priority.
#[must_use]
pub const fn priority_color_token(priority: TaskPriority) -> ColorToken {
    match priority {
        TaskPriority::Low => ColorToken::Success,
        TaskPriority::Medium => ColorToken::Warning,
        TaskPriority::High => ColorToken::Caution,
        TaskPriority::Urgent => ColorToken::Danger,
    }
}

/// Returns the colour for a completion percentage.
#[must_use]
pub const fn progress_color_token(percentage: u8, thresholds: ProgressThresholds) -> ColorToken {
    if percentage >= thresholds.success {
        ColorToken::Success
    } else if percentage >= thresholds.warning {
        ColorToken::Warning
    } else if percentage >= thresholds.caution {
        ColorToken::Caution
    } else {
        ColorToken::Danger
    }
}
