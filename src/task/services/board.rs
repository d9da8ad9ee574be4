//! Service layer assembling the task board view.

use crate::metrics::{
    ColorToken, EntityFilter, MetricsConfig, TaskStats, filter_by_predicates, is_overdue,
    priority_color_token, priority_weight, suggested_priority, task_status_color,
};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskPriority, TaskStatus},
    policy,
    ports::{TaskGateway, TaskGatewayError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Selection of tasks shown on a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardQuery {
    project_id: Option<ProjectId>,
    filter: EntityFilter<TaskStatus>,
}

impl BoardQuery {
    /// Creates a query over every task with no filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the board to one project.
    #[must_use]
    pub const fn for_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Applies a predicate filter to the fetched tasks.
    #[must_use]
    pub fn with_filter(mut self, filter: EntityFilter<TaskStatus>) -> Self {
        self.filter = filter;
        self
    }
}

/// A task together with everything the board derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    /// Underlying snapshot.
    pub task: Task,
    /// Deadline has passed and the task is not done.
    pub is_overdue: bool,
    /// The task may move to `IN_PROGRESS`.
    pub can_start: bool,
    /// The task is `DONE`.
    pub is_completed: bool,
    /// Numeric urgency, 0 for `LOW` up to 3 for `URGENT`.
    pub priority_weight: u8,
    /// Colour of the status badge.
    pub status_color: ColorToken,
    /// Colour of the priority badge.
    pub priority_color: ColorToken,
    /// Statuses offered in the card's status menu.
    pub allowed_next: &'static [TaskStatus],
    /// Priority suggested by the deadline, if one is set.
    pub suggested_priority: Option<TaskPriority>,
}

impl TaskCard {
    /// Derives a card for `task` as of `now`.
    #[must_use]
    pub fn new(task: Task, now: DateTime<Utc>, config: &MetricsConfig) -> Self {
        let status = task.status();
        let priority = task.priority();
        Self {
            is_overdue: is_overdue(task.due_date(), status, now),
            can_start: policy::start_allowed(status),
            is_completed: status == TaskStatus::Done,
            priority_weight: priority_weight(priority),
            status_color: task_status_color(status),
            priority_color: priority_color_token(priority),
            allowed_next: policy::allowed_next_statuses(status),
            suggested_priority: suggested_priority(task.due_date(), now, config.priority_horizon),
            task,
        }
    }
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    /// Status shared by every card in the column.
    pub status: TaskStatus,
    /// Colour of the column header.
    pub color: ColorToken,
    /// Cards in the order the API listed them.
    pub cards: Vec<TaskCard>,
}

/// Board view of a task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBoard {
    /// Instant every derived flag was computed against.
    pub generated_at: DateTime<Utc>,
    /// Columns in `TODO`, `IN_PROGRESS`, `DONE`, `BLOCKED` order.
    pub columns: Vec<BoardColumn>,
    /// Statistics over the cards on the board.
    pub stats: TaskStats,
}

impl TaskBoard {
    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }
}

/// Service-level errors for board assembly.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Gateway operation failed.
    #[error(transparent)]
    Gateway(#[from] TaskGatewayError),
}

/// Builds task boards from the latest remote snapshots.
#[derive(Clone)]
pub struct TaskBoardService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    config: MetricsConfig,
}

impl<G, C> TaskBoardService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    /// Creates a board service with the default metrics configuration.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            clock,
            config: MetricsConfig::default(),
        }
    }

    /// Replaces the metrics configuration.
    #[must_use]
    pub const fn with_config(mut self, config: MetricsConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetches tasks and arranges them into status columns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Gateway`] when the fetch fails.
    pub async fn load_board(&self, query: &BoardQuery) -> Result<TaskBoard, TaskBoardError> {
        let tasks = self.gateway.fetch_tasks(query.project_id).await?;
        let now = self.clock.utc();

        let visible: Vec<Task> = filter_by_predicates(&tasks, &query.filter)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            fetched = tasks.len(),
            visible = visible.len(),
            "assembling task board"
        );

        let stats = TaskStats::from_tasks(&visible, now);
        let mut columns: Vec<BoardColumn> = TaskStatus::ALL
            .iter()
            .map(|&status| BoardColumn {
                status,
                color: task_status_color(status),
                cards: Vec::new(),
            })
            .collect();
        for task in visible {
            let card = TaskCard::new(task, now, &self.config);
            if let Some(column) = columns
                .iter_mut()
                .find(|column| column.status == card.task.status())
            {
                column.cards.push(card);
            }
        }

        Ok(TaskBoard {
            generated_at: now,
            columns,
            stats,
        })
    }
}
