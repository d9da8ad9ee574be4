//! Service layer for submitting task status changes.

use crate::task::{
    domain::{ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskStatus},
    policy,
    ports::{TaskGateway, TaskGatewayError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for moving a task to another status.
///
/// The target arrives as the raw wire string (for example `"IN_PROGRESS"`)
/// and is parsed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTaskStatusRequest {
    task_id: TaskId,
    target_status: String,
}

impl ChangeTaskStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
        }
    }

    /// Returns the task being changed.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the raw target status.
    #[must_use]
    pub fn target_status(&self) -> &str {
        &self.target_status
    }
}

/// Service-level errors for status changes.
#[derive(Debug, Error)]
pub enum TaskStatusError {
    /// The transition is not offered from the task's current status.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The target status string is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The task does not exist remotely.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// The remote API refused the change.
    #[error("task {task_id} status change rejected: {}", errors.join("; "))]
    RemoteRejected {
        /// Task whose change was refused.
        task_id: TaskId,
        /// Error messages reported by the remote API.
        errors: Vec<String>,
    },
    /// Gateway operation failed.
    #[error(transparent)]
    Gateway(#[from] TaskGatewayError),
}

/// Result type for status change operations.
pub type TaskStatusResult<T> = Result<T, TaskStatusError>;

/// Orchestrates a status change against the remote task API.
///
/// The local transition table only decides which changes are offered. The
/// remote API has the final word, and the returned snapshot is always a
/// fresh fetch taken after the API accepted the change.
#[derive(Clone)]
pub struct TaskStatusService<G>
where
    G: TaskGateway,
{
    gateway: Arc<G>,
}

impl<G> TaskStatusService<G>
where
    G: TaskGateway,
{
    /// Creates a new status service.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Lists the statuses a task may currently move to.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::NotFound`] when the task does not exist
    /// or [`TaskStatusError::Gateway`] when the fetch fails.
    pub async fn allowed_next(&self, task_id: TaskId) -> TaskStatusResult<&'static [TaskStatus]> {
        let task = self.fetch_existing(task_id).await?;
        Ok(policy::allowed_next_statuses(task.status()))
    }

    /// Moves a task to the requested status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::InvalidStatus`] for an unknown target,
    /// [`TaskStatusError::Domain`] when the transition is not offered from
    /// the current status, [`TaskStatusError::RemoteRejected`] when the API
    /// refuses the change, and [`TaskStatusError::NotFound`] or
    /// [`TaskStatusError::Gateway`] for lookup failures.
    pub async fn change_status(&self, request: ChangeTaskStatusRequest) -> TaskStatusResult<Task> {
        let task_id = request.task_id;
        let target = TaskStatus::try_from(request.target_status.as_str())?;
        let current = self.fetch_existing(task_id).await?;
        let from = current.status();

        if !policy::can_transition(from, target) {
            debug!(%task_id, %from, to = %target, "status transition not offered");
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id,
                from,
                to: target,
            }
            .into());
        }

        debug!(%task_id, %from, to = %target, "submitting status transition");
        let response = self.gateway.update_status(task_id, target).await?;
        if !response.is_success() {
            let errors = response.into_errors();
            warn!(%task_id, ?errors, "remote API rejected status transition");
            return Err(TaskStatusError::RemoteRejected { task_id, errors });
        }

        self.fetch_existing(task_id).await
    }

    async fn fetch_existing(&self, task_id: TaskId) -> TaskStatusResult<Task> {
        self.gateway
            .fetch_task(task_id)
            .await?
            .ok_or(TaskStatusError::NotFound(task_id))
    }
}
