//! Given steps for task status transition BDD scenarios.

use super::world::TaskStatusWorld;
use crate::test_helpers::reference_now;
use chrono::Duration;
use rstest_bdd_macros::given;
use taskboard::{
    project::domain::ProjectId,
    task::domain::{Task, TaskSnapshotData, TaskStatus},
};

#[given(r#"a task "{title}" with status "{status}""#)]
fn task_with_status(
    world: &mut TaskStatusWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid seed status in scenario: {err}"))?;
    let task = Task::from_snapshot(
        TaskSnapshotData::new(ProjectId::new(), title, reference_now()).with_status(parsed),
    )?;
    world.gateway.insert(task.clone())?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the remote API will reject the next change with "{message}""#)]
fn remote_will_reject(world: &mut TaskStatusWorld, message: String) -> Result<(), eyre::Report> {
    world.gateway.reject_next_update([message])?;
    Ok(())
}

#[given("{hours:i64} hours pass")]
fn hours_pass(world: &mut TaskStatusWorld, hours: i64) {
    world.clock.advance(Duration::hours(hours));
}
