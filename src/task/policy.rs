//! Client-side task status transition policy.
//!
//! A single lookup table decides which status changes the dashboard offers.
//! The remote API re-validates every submitted change, so this table is an
//! affordance guard and never the source of truth.

use super::domain::TaskStatus;

/// Returns the statuses a task may move to from `current`.
///
/// `Done` yields an empty slice.
#[must_use]
pub const fn allowed_next_statuses(current: TaskStatus) -> &'static [TaskStatus] {
    match current {
        TaskStatus::Todo => &[TaskStatus::InProgress, TaskStatus::Blocked],
        TaskStatus::InProgress => &[TaskStatus::Done, TaskStatus::Blocked, TaskStatus::Todo],
        TaskStatus::Blocked => &[TaskStatus::Todo],
        TaskStatus::Done => &[],
    }
}

/// Returns `true` when moving from `current` to `proposed` is permitted.
///
/// Moving to the same status is not a transition and is always rejected.
#[must_use]
pub fn can_transition(current: TaskStatus, proposed: TaskStatus) -> bool {
    proposed != current && allowed_next_statuses(current).contains(&proposed)
}

/// Returns `true` when a task in `current` may be started.
#[must_use]
pub fn start_allowed(current: TaskStatus) -> bool {
    can_transition(current, TaskStatus::InProgress)
}
