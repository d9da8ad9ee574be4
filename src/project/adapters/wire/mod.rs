//! JSON codec for the remote project API.
//!
//! Project deadlines are calendar dates. A project due on day `D` stays on
//! time for the whole of `D`, so the date decodes to the first instant of
//! `D + 1` in UTC and the strict "before now" overdue rule applies
//! unchanged.

pub mod models;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::organization::domain::{Organization, OrganizationId, OrganizationSlug};
use crate::project::{
    domain::{Project, ProjectId, ProjectSnapshotData, ProjectStatus},
    ports::{ProjectGatewayError, ProjectGatewayResult},
};
use models::{OrganizationRecord, ProjectRecord};

/// A calendar deadline with no representable following day.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("project due date {0} is out of range")]
pub struct DueDateOutOfRange(pub NaiveDate);

/// Decodes an organization object.
///
/// # Errors
///
/// Returns [`ProjectGatewayError::Decode`] when the payload is malformed or
/// its name or slug is invalid.
pub fn decode_organization(body: &str) -> ProjectGatewayResult<Organization> {
    let OrganizationRecord {
        id,
        name,
        slug: wire_slug,
        project_count,
        active_project_count,
    } = serde_json::from_str(body).map_err(ProjectGatewayError::decode)?;

    let slug = OrganizationSlug::new(wire_slug).map_err(ProjectGatewayError::decode)?;
    let organization = Organization::new(OrganizationId::from_uuid(id), name, slug)
        .map_err(ProjectGatewayError::decode)?;
    Ok(organization.with_project_counts(project_count, active_project_count))
}

/// Decodes a single project object.
///
/// # Errors
///
/// Returns [`ProjectGatewayError::Decode`] when the payload is malformed or
/// carries values the domain rejects.
pub fn decode_project(body: &str) -> ProjectGatewayResult<Project> {
    let record =
        serde_json::from_str::<ProjectRecord>(body).map_err(ProjectGatewayError::decode)?;
    record_to_project(record)
}

/// Decodes a JSON array of project objects, preserving order.
///
/// # Errors
///
/// Returns [`ProjectGatewayError::Decode`] when any element fails to decode.
pub fn decode_projects(body: &str) -> ProjectGatewayResult<Vec<Project>> {
    let records =
        serde_json::from_str::<Vec<ProjectRecord>>(body).map_err(ProjectGatewayError::decode)?;
    records.into_iter().map(record_to_project).collect()
}

/// Converts a calendar deadline into the instant it lapses.
///
/// # Errors
///
/// Returns [`DueDateOutOfRange`] for the last representable date.
pub fn due_date_deadline(date: NaiveDate) -> Result<DateTime<Utc>, DueDateOutOfRange> {
    date.succ_opt()
        .map(|next| next.and_time(NaiveTime::MIN).and_utc())
        .ok_or(DueDateOutOfRange(date))
}

fn record_to_project(record: ProjectRecord) -> ProjectGatewayResult<Project> {
    let ProjectRecord {
        id,
        organization,
        name,
        description,
        status: wire_status,
        due_date: calendar_due_date,
        task_count,
        completed_task_count,
        created_at,
        updated_at,
    } = record;

    let status =
        ProjectStatus::try_from(wire_status.as_str()).map_err(ProjectGatewayError::decode)?;
    let due_date = calendar_due_date
        .map(due_date_deadline)
        .transpose()
        .map_err(ProjectGatewayError::decode)?;

    let data = ProjectSnapshotData {
        id: ProjectId::from_uuid(id),
        organization_id: OrganizationId::from_uuid(organization.id),
        name,
        description: description.unwrap_or_default(),
        status,
        due_date,
        task_count,
        completed_task_count,
        created_at,
        updated_at,
    };
    Project::from_snapshot(data).map_err(ProjectGatewayError::decode)
}
