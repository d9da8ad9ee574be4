//! In-memory integration tests for task status changes and the board.

use std::sync::Arc;

use crate::test_helpers::{SteppingClock, reference_now};
use chrono::Duration;
use rstest::{fixture, rstest};
use taskboard::{
    project::domain::ProjectId,
    task::{
        adapters::memory::InMemoryTaskGateway,
        domain::{Task, TaskSnapshotData, TaskStatus},
        ports::TaskGateway,
        services::{
            BoardQuery, ChangeTaskStatusRequest, TaskBoardService, TaskStatusError,
            TaskStatusService,
        },
    },
};

type Gateway = InMemoryTaskGateway<SteppingClock>;

struct Harness {
    clock: Arc<SteppingClock>,
    gateway: Arc<Gateway>,
    status: TaskStatusService<Gateway>,
    board: TaskBoardService<Gateway, SteppingClock>,
    project_id: ProjectId,
}

impl Harness {
    fn seed(&self, title: &str, status: TaskStatus) -> eyre::Result<Task> {
        let task = Task::from_snapshot(
            TaskSnapshotData::new(self.project_id, title, reference_now()).with_status(status),
        )?;
        self.gateway.insert(task.clone())?;
        Ok(task)
    }
}

#[fixture]
fn harness() -> Harness {
    let clock = Arc::new(SteppingClock::at(reference_now()));
    let gateway = Arc::new(InMemoryTaskGateway::new(Arc::clone(&clock)));
    Harness {
        status: TaskStatusService::new(Arc::clone(&gateway)),
        board: TaskBoardService::new(Arc::clone(&gateway), Arc::clone(&clock)),
        clock,
        gateway,
        project_id: ProjectId::new(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_the_happy_path_to_done(harness: Harness) -> eyre::Result<()> {
    let task = harness.seed("Publish changelog", TaskStatus::Todo)?;

    harness.clock.advance(Duration::minutes(5));
    let started = harness
        .status
        .change_status(ChangeTaskStatusRequest::new(task.id(), "IN_PROGRESS"))
        .await?;
    harness.clock.advance(Duration::minutes(5));
    let finished = harness
        .status
        .change_status(ChangeTaskStatusRequest::new(task.id(), "DONE"))
        .await?;

    eyre::ensure!(started.status() == TaskStatus::InProgress);
    eyre::ensure!(started.updated_at() == reference_now() + Duration::minutes(5));
    eyre::ensure!(finished.status() == TaskStatus::Done);
    eyre::ensure!(finished.updated_at() == reference_now() + Duration::minutes(10));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remote_rejection_leaves_the_snapshot_untouched(harness: Harness) -> eyre::Result<()> {
    let task = harness.seed("Contested", TaskStatus::Todo)?;
    harness
        .gateway
        .reject_next_update(["Task was modified by another user".to_owned()])?;

    let result = harness
        .status
        .change_status(ChangeTaskStatusRequest::new(task.id(), "IN_PROGRESS"))
        .await;
    let stored = harness.gateway.fetch_task(task.id()).await?;

    eyre::ensure!(
        matches!(result, Err(TaskStatusError::RemoteRejected { ref errors, .. })
            if errors == &["Task was modified by another user".to_owned()]),
        "expected a remote rejection, got {result:?}"
    );
    eyre::ensure!(stored == Some(task), "snapshot must not change");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_reflects_changes_after_refetch(harness: Harness) -> eyre::Result<()> {
    let task = harness.seed("Triage inbox", TaskStatus::Todo)?;
    harness.seed("Sit idle", TaskStatus::Blocked)?;
    let query = BoardQuery::new().for_project(harness.project_id);

    let before = harness.board.load_board(&query).await?;
    harness
        .status
        .change_status(ChangeTaskStatusRequest::new(task.id(), "IN_PROGRESS"))
        .await?;
    let after = harness.board.load_board(&query).await?;

    let count = |board: &taskboard::task::services::TaskBoard, status| {
        board.column(status).map_or(0, |column| column.cards.len())
    };
    eyre::ensure!(count(&before, TaskStatus::Todo) == 1);
    eyre::ensure!(count(&after, TaskStatus::Todo) == 0);
    eyre::ensure!(count(&after, TaskStatus::InProgress) == 1);
    eyre::ensure!(after.stats.blocked == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadline_passing_flips_the_overdue_flag(harness: Harness) -> eyre::Result<()> {
    let task = Task::from_snapshot(
        TaskSnapshotData::new(harness.project_id, "Renew certificate", reference_now())
            .with_due_date(reference_now() + Duration::hours(2)),
    )?;
    harness.gateway.insert(task)?;
    let query = BoardQuery::new();

    let before = harness.board.load_board(&query).await?;
    harness.clock.advance(Duration::hours(3));
    let after = harness.board.load_board(&query).await?;

    eyre::ensure!(before.stats.overdue == 0);
    eyre::ensure!(after.stats.overdue == 1);
    eyre::ensure!(after.generated_at == reference_now() + Duration::hours(3));
    Ok(())
}
