//! Shared world state for task status transition BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{SteppingClock, reference_now};
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskGateway,
    domain::Task,
    services::{TaskStatusError, TaskStatusService},
};

/// Gateway type used by the BDD world.
pub type TestGateway = InMemoryTaskGateway<SteppingClock>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub clock: Arc<SteppingClock>,
    pub gateway: Arc<TestGateway>,
    pub service: TaskStatusService<TestGateway>,
    pub task: Option<Task>,
    pub last_change_result: Option<Result<Task, TaskStatusError>>,
}

impl TaskStatusWorld {
    /// Creates a world with an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(SteppingClock::at(reference_now()));
        let gateway = Arc::new(InMemoryTaskGateway::new(Arc::clone(&clock)));
        Self {
            clock,
            service: TaskStatusService::new(Arc::clone(&gateway)),
            gateway,
            task: None,
            last_change_result: None,
        }
    }

    /// Returns the task seeded by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been seeded yet.
    pub fn seeded_task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing seeded task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
