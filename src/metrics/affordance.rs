//! Project affordance flags.

use crate::project::domain::ProjectStatus;

/// Returns `true` when tasks may still be added to a project in `status`.
#[must_use]
pub const fn can_add_tasks(status: ProjectStatus) -> bool {
    !status.is_terminal()
}

/// Returns `true` when a project may be marked completed.
///
/// The project must be open with no task left undone. A project without
/// tasks qualifies. The raw counters are compared, never the rounded
/// percentage.
#[must_use]
pub const fn can_be_completed(
    status: ProjectStatus,
    completed_task_count: u32,
    task_count: u32,
) -> bool {
    !status.is_terminal() && completed_task_count >= task_count
}
