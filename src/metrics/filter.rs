//! Predicate filtering of entity collections.

use super::status::{LifecycleStatus, Tracked};
use crate::task::domain::TaskPriority;

/// Optional predicates combined with logical AND.
///
/// Absent predicates pass every entity through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFilter<S: LifecycleStatus> {
    status: Option<S>,
    search_text: Option<String>,
    assignee: Option<String>,
    priority: Option<TaskPriority>,
}

impl<S: LifecycleStatus> Default for EntityFilter<S> {
    fn default() -> Self {
        Self {
            status: None,
            search_text: None,
            assignee: None,
            priority: None,
        }
    }
}

impl<S: LifecycleStatus> EntityFilter<S> {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps entities whose status equals `status`.
    #[must_use]
    pub const fn with_status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    /// Keeps entities whose label or description contains `text`,
    /// case-insensitively.
    ///
    /// The text is trimmed first; blank text leaves search disabled.
    #[must_use]
    pub fn with_search_text(mut self, text: &str) -> Self {
        let needle = text.trim();
        self.search_text = (!needle.is_empty()).then(|| needle.to_lowercase());
        self
    }

    /// Keeps entities whose assignee equals `assignee` exactly.
    ///
    /// An empty string leaves the assignee predicate disabled.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        let value = assignee.into();
        self.assignee = (!value.is_empty()).then_some(value);
        self
    }

    /// Keeps entities with exactly this priority.
    ///
    /// Entity kinds without a priority never match.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when no predicate is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.search_text.is_none()
            && self.assignee.is_none()
            && self.priority.is_none()
    }

    /// Returns `true` when `entity` satisfies every active predicate.
    #[must_use]
    pub fn matches<E: Tracked<Status = S>>(&self, entity: &E) -> bool {
        self.status.is_none_or(|status| entity.status() == status)
            && self.priority.is_none_or(|priority| entity.priority() == Some(priority))
            && self
                .assignee
                .as_deref()
                .is_none_or(|assignee| entity.assignee() == Some(assignee))
            && self
                .search_text
                .as_deref()
                .is_none_or(|needle| contains_ignoring_case(entity, needle))
    }
}

fn contains_ignoring_case<E: Tracked>(entity: &E, needle: &str) -> bool {
    entity.label().to_lowercase().contains(needle)
        || entity.description().to_lowercase().contains(needle)
}

/// Returns the entities matching `filter`, preserving their relative order.
#[must_use]
pub fn filter_by_predicates<'a, E: Tracked>(
    entities: &'a [E],
    filter: &EntityFilter<E::Status>,
) -> Vec<&'a E> {
    entities
        .iter()
        .filter(|entity| filter.matches(*entity))
        .collect()
}
