//! In-memory stand-in for the remote task API.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{MutationResponse, TaskGateway, TaskGatewayError, TaskGatewayResult},
};

/// Thread-safe in-memory task gateway.
///
/// Status updates are re-validated with the remote API's own rules, which
/// are looser than the client-side transition table: completed tasks cannot
/// be reopened and blocked tasks may only return to `TODO`. A rejection can
/// also be primed with [`InMemoryTaskGateway::reject_next_update`] to model a
/// server that disagrees with a stale client.
#[derive(Debug)]
pub struct InMemoryTaskGateway<C: Clock + Send + Sync> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

impl<C: Clock + Send + Sync> Clone for InMemoryTaskGateway<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    primed_rejection: Option<Vec<String>>,
}

impl<C: Clock + Send + Sync> InMemoryTaskGateway<C> {
    /// Creates an empty gateway stamping updates with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Adds or replaces a task snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Transport`] when the state lock is
    /// poisoned.
    pub fn insert(&self, task: Task) -> TaskGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(existing) = state
            .tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
        {
            *existing = task;
            return Ok(());
        }
        state.tasks.push(task);
        Ok(())
    }

    /// Makes the next status update fail with `errors`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Transport`] when the state lock is
    /// poisoned.
    pub fn reject_next_update(
        &self,
        errors: impl IntoIterator<Item = String>,
    ) -> TaskGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.primed_rejection = Some(errors.into_iter().collect());
        Ok(())
    }
}

fn lock_error(err: impl ToString) -> TaskGatewayError {
    TaskGatewayError::transport(std::io::Error::other(err.to_string()))
}

/// Remote-side status rules; `None` means the change is accepted.
fn remote_rejection(current: TaskStatus, requested: TaskStatus) -> Option<&'static str> {
    match current {
        TaskStatus::Done if requested != TaskStatus::Done => Some("Cannot reopen completed tasks."),
        TaskStatus::Blocked if !matches!(requested, TaskStatus::Blocked | TaskStatus::Todo) => {
            Some("Blocked tasks must be unblocked before changing status.")
        }
        _ => None,
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskGateway for InMemoryTaskGateway<C> {
    async fn fetch_task(&self, id: TaskId) -> TaskGatewayResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn fetch_tasks(&self, project_id: Option<ProjectId>) -> TaskGatewayResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| project_id.is_none_or(|id| task.project_id() == id))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskGatewayResult<MutationResponse<Task>> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(errors) = state.primed_rejection.take() {
            return Ok(MutationResponse::rejected(errors));
        }

        let Some(slot) = state.tasks.iter_mut().find(|task| task.id() == id) else {
            return Ok(MutationResponse::rejected(["Task not found".to_owned()]));
        };
        if let Some(reason) = remote_rejection(slot.status(), status) {
            return Ok(MutationResponse::rejected([reason.to_owned()]));
        }

        let mut data = slot.clone().into_snapshot();
        data.status = status;
        data.updated_at = self.clock.utc();
        let updated = Task::from_snapshot(data).map_err(TaskGatewayError::decode)?;
        *slot = updated.clone();
        Ok(MutationResponse::succeeded(updated))
    }
}
