//! Aggregate statistics panels for tasks and projects.

use super::aggregate::count_by_status;
use super::completion::{completion_percentage, completion_rate};
use super::overdue::entity_is_overdue;
use crate::project::domain::{Project, ProjectStatus};
use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of a task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks in `TODO`.
    pub todo: usize,
    /// Tasks in `IN_PROGRESS`.
    pub in_progress: usize,
    /// Tasks in `DONE`.
    pub done: usize,
    /// Tasks in `BLOCKED`.
    pub blocked: usize,
    /// Tasks whose deadline has passed.
    pub overdue: usize,
    /// Percentage of tasks in `DONE`.
    pub completion_rate: f64,
}

impl TaskStats {
    /// Summarises `tasks` as observed at `now`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let counts = count_by_status(tasks);
        Self {
            total: counts.total(),
            todo: counts.get(TaskStatus::Todo),
            in_progress: counts.get(TaskStatus::InProgress),
            done: counts.get(TaskStatus::Done),
            blocked: counts.get(TaskStatus::Blocked),
            overdue: tasks.iter().filter(|task| entity_is_overdue(*task, now)).count(),
            completion_rate: completion_rate(tasks, |task| task.status() == TaskStatus::Done),
        }
    }
}

/// Summary of a project collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStats {
    /// Number of projects.
    pub total: usize,
    /// Projects in `ACTIVE`.
    pub active: usize,
    /// Projects in `COMPLETED`.
    pub completed: usize,
    /// Projects in `ON_HOLD`.
    pub on_hold: usize,
    /// Projects in `CANCELLED`.
    pub cancelled: usize,
    /// Projects whose deadline has passed.
    pub overdue: usize,
    /// Percentage of projects in `COMPLETED`.
    pub completion_rate: f64,
    /// Mean of the per-project completion percentages, `0.0` when empty.
    pub mean_task_completion: f64,
}

impl ProjectStats {
    /// Summarises `projects` as observed at `now`.
    #[must_use]
    pub fn from_projects(projects: &[Project], now: DateTime<Utc>) -> Self {
        let counts = count_by_status(projects);
        Self {
            total: counts.total(),
            active: counts.get(ProjectStatus::Active),
            completed: counts.get(ProjectStatus::Completed),
            on_hold: counts.get(ProjectStatus::OnHold),
            cancelled: counts.get(ProjectStatus::Cancelled),
            overdue: projects
                .iter()
                .filter(|project| entity_is_overdue(*project, now))
                .count(),
            completion_rate: completion_rate(projects, |project| {
                project.status() == ProjectStatus::Completed
            }),
            mean_task_completion: mean_task_completion(projects),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the mean is presented as an unrounded floating-point percentage"
)]
fn mean_task_completion(projects: &[Project]) -> f64 {
    if projects.is_empty() {
        return 0.0;
    }
    let sum: u64 = projects
        .iter()
        .map(|project| {
            u64::from(completion_percentage(
                project.completed_task_count(),
                project.task_count(),
            ))
        })
        .sum();
    sum as f64 / projects.len() as f64
}
