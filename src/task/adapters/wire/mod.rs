//! JSON codec for the remote task API.
//!
//! The functions here translate between the API's camelCase payloads and
//! validated domain snapshots. Status and priority strings are parsed with
//! the domain `TryFrom` implementations, so an unknown value surfaces as
//! [`TaskGatewayError::Decode`] rather than a silently defaulted field.

pub mod models;

use serde_json::{Value, json};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskId, TaskPriority, TaskSnapshotData, TaskStatus},
    ports::{MutationResponse, TaskGatewayError, TaskGatewayResult},
};
use models::{TaskMutationRecord, TaskRecord};

/// Decodes a single task object.
///
/// # Errors
///
/// Returns [`TaskGatewayError::Decode`] when the payload is malformed or
/// carries values the domain rejects.
pub fn decode_task(body: &str) -> TaskGatewayResult<Task> {
    let record =
        serde_json::from_str::<TaskRecord>(body).map_err(TaskGatewayError::decode)?;
    record_to_task(record)
}

/// Decodes a JSON array of task objects, preserving order.
///
/// # Errors
///
/// Returns [`TaskGatewayError::Decode`] when any element fails to decode.
pub fn decode_tasks(body: &str) -> TaskGatewayResult<Vec<Task>> {
    let records =
        serde_json::from_str::<Vec<TaskRecord>>(body).map_err(TaskGatewayError::decode)?;
    records.into_iter().map(record_to_task).collect()
}

/// Decodes an `updateTaskStatus` mutation envelope.
///
/// # Errors
///
/// Returns [`TaskGatewayError::Decode`] when the envelope or its embedded
/// task fails to decode.
pub fn decode_task_mutation(body: &str) -> TaskGatewayResult<MutationResponse<Task>> {
    let TaskMutationRecord {
        success,
        errors,
        task,
    } = serde_json::from_str(body).map_err(TaskGatewayError::decode)?;
    let entity = task.map(record_to_task).transpose()?;
    Ok(MutationResponse::from_parts(success, errors, entity))
}

/// Builds the variables object for an `updateTaskStatus` mutation.
#[must_use]
pub fn encode_status_update(id: TaskId, status: TaskStatus) -> Value {
    json!({
        "taskId": id.to_string(),
        "status": status.as_str(),
    })
}

fn record_to_task(record: TaskRecord) -> TaskGatewayResult<Task> {
    let TaskRecord {
        id,
        project,
        title,
        description,
        status: wire_status,
        priority: wire_priority,
        assignee_email,
        due_date,
        comment_count,
        created_at,
        updated_at,
    } = record;

    let status = TaskStatus::try_from(wire_status.as_str()).map_err(TaskGatewayError::decode)?;
    let priority =
        TaskPriority::try_from(wire_priority.as_str()).map_err(TaskGatewayError::decode)?;

    let data = TaskSnapshotData {
        id: TaskId::from_uuid(id),
        project_id: ProjectId::from_uuid(project.id),
        title,
        description: description.unwrap_or_default(),
        status,
        priority,
        assignee_email,
        due_date,
        comment_count,
        created_at,
        updated_at,
    };
    Task::from_snapshot(data).map_err(TaskGatewayError::decode)
}
