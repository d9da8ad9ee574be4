//! Given steps for project progress BDD scenarios.

use super::world::ProjectProgressWorld;
use chrono::Duration;
use rstest_bdd_macros::given;
use taskboard::{
    organization::domain::{Organization, OrganizationId, OrganizationSlug},
    project::domain::{Project, ProjectSnapshotData, ProjectStatus},
};

fn parse_status(status: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid project status in scenario: {err}"))
}

fn seed(world: &ProjectProgressWorld, data: ProjectSnapshotData) -> Result<(), eyre::Report> {
    world.gateway.insert_project(Project::from_snapshot(data)?)?;
    Ok(())
}

#[given(r#"an organization named "{name}""#)]
fn organization_named(world: &mut ProjectProgressWorld, name: String) -> Result<(), eyre::Report> {
    let slug = OrganizationSlug::from_name(&name)?;
    let organization = Organization::new(OrganizationId::new(), name, slug)?;
    world.gateway.insert_organization(organization.clone())?;
    world.organization = Some(organization);
    Ok(())
}

#[given(r#"an "{status}" project "{name}" with {completed:u32} of {total:u32} tasks done"#)]
fn project_with_counts(
    world: &mut ProjectProgressWorld,
    status: String,
    name: String,
    completed: u32,
    total: u32,
) -> Result<(), eyre::Report> {
    let organization_id = world.organization()?.id();
    let data = ProjectSnapshotData::new(organization_id, name, world.clock_now())
        .with_status(parse_status(&status)?)
        .with_task_counts(total, completed);
    seed(world, data)
}

#[given(r#"an "{status}" project "{name}" due {days:i64} days ago"#)]
fn open_project_due(
    world: &mut ProjectProgressWorld,
    status: String,
    name: String,
    days: i64,
) -> Result<(), eyre::Report> {
    project_due(world, &status, name, days)
}

#[given(r#"a "{status}" project "{name}" due {days:i64} days ago"#)]
fn closed_project_due(
    world: &mut ProjectProgressWorld,
    status: String,
    name: String,
    days: i64,
) -> Result<(), eyre::Report> {
    project_due(world, &status, name, days)
}

fn project_due(
    world: &ProjectProgressWorld,
    status: &str,
    name: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let organization_id = world.organization()?.id();
    let now = world.clock_now();
    let data = ProjectSnapshotData::new(organization_id, name, now)
        .with_status(parse_status(status)?)
        .with_due_date(now - Duration::days(days));
    seed(world, data)
}
