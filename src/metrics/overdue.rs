//! Deadline derivations.

use super::status::{LifecycleStatus, Tracked};
use chrono::{DateTime, Utc};

/// Returns `true` when a deadline has strictly passed for a non-terminal
/// entity.
///
/// `now` is supplied by the caller so that every derivation made while
/// rendering one view observes the same instant.
#[must_use]
pub fn is_overdue<S: LifecycleStatus>(
    due_date: Option<DateTime<Utc>>,
    status: S,
    now: DateTime<Utc>,
) -> bool {
    !status.is_terminal() && due_date.is_some_and(|due| due < now)
}

/// Returns `true` when `entity` is overdue at `now`.
#[must_use]
pub fn entity_is_overdue<E: Tracked>(entity: &E, now: DateTime<Utc>) -> bool {
    is_overdue(entity.due_date(), entity.status(), now)
}
