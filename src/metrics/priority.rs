//! Priority ordering and deadline-based suggestions.

use super::config::PriorityHorizon;
use crate::task::domain::TaskPriority;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Returns the sort weight of a priority: `LOW` 0 through `URGENT` 3.
#[must_use]
pub const fn priority_weight(priority: TaskPriority) -> u8 {
    match priority {
        TaskPriority::Low => 0,
        TaskPriority::Medium => 1,
        TaskPriority::High => 2,
        TaskPriority::Urgent => 3,
    }
}

/// Orders priorities from most to least urgent.
#[must_use]
pub fn most_urgent_first(left: TaskPriority, right: TaskPriority) -> Ordering {
    priority_weight(right).cmp(&priority_weight(left))
}

/// Suggests a priority from how many calendar days remain until `due_date`.
///
/// Deadlines on an earlier calendar day suggest `URGENT`; otherwise the
/// horizon decides between `HIGH`, `MEDIUM` and `LOW`, with today counting
/// as zero days. A deadline that passed earlier today therefore suggests
/// `HIGH` even though the entity is already overdue. Returns `None` without
/// a deadline.
#[must_use]
pub fn suggested_priority(
    due_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    horizon: PriorityHorizon,
) -> Option<TaskPriority> {
    let due = due_date?;
    let days_until_due = (due.date_naive() - now.date_naive()).num_days();
    let priority = if days_until_due < 0 {
        TaskPriority::Urgent
    } else if days_until_due <= horizon.high_within_days {
        TaskPriority::High
    } else if days_until_due <= horizon.medium_within_days {
        TaskPriority::Medium
    } else {
        TaskPriority::Low
    };
    Some(priority)
}
