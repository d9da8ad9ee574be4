//! Gateway port for fetching task snapshots and submitting status changes.

use super::MutationResponse;
use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Remote task API contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches the latest snapshot of a task.
    ///
    /// Returns `None` when the task does not exist.
    async fn fetch_task(&self, id: TaskId) -> TaskGatewayResult<Option<Task>>;

    /// Fetches the latest snapshots of every task, optionally restricted to
    /// one project, in the order the API lists them.
    async fn fetch_tasks(&self, project_id: Option<ProjectId>) -> TaskGatewayResult<Vec<Task>>;

    /// Submits a status change.
    ///
    /// Business-rule refusals arrive as a rejected [`MutationResponse`];
    /// `Err` is reserved for transport and decoding failures.
    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskGatewayResult<MutationResponse<Task>>;
}

/// Errors returned by task gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The remote payload could not be decoded into a snapshot.
    #[error("undecodable task payload: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote API could not be reached or answered with a fault.
    #[error("task transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGatewayError {
    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
