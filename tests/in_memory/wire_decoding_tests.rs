//! Integration tests feeding decoded API payloads through the services.

use std::sync::Arc;

use crate::test_helpers::{SteppingClock, reference_now};
use rstest::rstest;
use serde_json::json;
use taskboard::task::{
    adapters::{
        memory::InMemoryTaskGateway,
        wire::{decode_task_mutation, decode_tasks},
    },
    domain::{TaskPriority, TaskStatus},
    services::{BoardQuery, TaskBoardService},
};

fn task_payload(id: &str, title: &str, status: &str, priority: &str) -> serde_json::Value {
    json!({
        "id": id,
        "project": { "id": "3f9b8e2d-1a4c-4d5e-8f70-9a1b2c3d4e5f" },
        "title": title,
        "status": status,
        "priority": priority,
        "dueDate": "2025-03-12T08:00:00Z",
        "createdAt": "2025-03-01T08:00:00Z",
        "updatedAt": "2025-03-01T08:00:00Z"
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn decoded_tasks_render_on_the_board() -> eyre::Result<()> {
    let body = json!([
        task_payload("7d2a1c4e-0f6b-4f3a-9c1d-2b8e5a6f7c01", "Fix payroll", "TODO", "URGENT"),
        task_payload("9e8d7c6b-5a49-4838-a726-150f4e3d2c1b", "Close books", "DONE", "LOW"),
    ]);
    let clock = Arc::new(SteppingClock::at(reference_now()));
    let gateway = Arc::new(InMemoryTaskGateway::new(Arc::clone(&clock)));
    for task in decode_tasks(&body.to_string())? {
        gateway.insert(task)?;
    }
    let service = TaskBoardService::new(gateway, clock);

    let board = service.load_board(&BoardQuery::new()).await?;

    let todo = board
        .column(TaskStatus::Todo)
        .and_then(|column| column.cards.first())
        .ok_or_else(|| eyre::eyre!("missing todo card"))?;
    eyre::ensure!(todo.is_overdue);
    eyre::ensure!(todo.task.priority() == TaskPriority::Urgent);
    eyre::ensure!(board.stats.overdue == 1);
    eyre::ensure!(board.stats.done == 1);
    Ok(())
}

#[rstest]
fn rejected_envelope_decodes_to_rejection() -> eyre::Result<()> {
    let body = json!({
        "success": false,
        "errors": ["Blocked tasks must be unblocked before changing status."],
        "task": null
    });

    let response = decode_task_mutation(&body.to_string())?;

    eyre::ensure!(!response.is_success());
    eyre::ensure!(response.entity().is_none());
    eyre::ensure!(response.errors().len() == 1);
    Ok(())
}
