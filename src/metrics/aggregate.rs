//! Per-status counting over entity collections.

use super::status::{LifecycleStatus, Tracked};

/// Number of entities in each status of an enumeration.
///
/// Every status is present, zero-filled, in the enumeration's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: LifecycleStatus> {
    counts: Vec<(S, usize)>,
}

impl<S: LifecycleStatus> StatusCounts<S> {
    fn zeroed() -> Self {
        Self {
            counts: S::ALL.iter().map(|status| (*status, 0)).collect(),
        }
    }

    fn increment(&mut self, status: S) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(s, _)| *s == status) {
            *count += 1;
        }
    }

    /// Returns the count for `status`.
    #[must_use]
    pub fn get(&self, status: S) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, count)| *count)
    }

    /// Returns the sum over every status.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Iterates over `(status, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().copied()
    }
}

/// Counts `entities` by status.
///
/// The result contains every status of the enumeration and its values sum
/// to `entities.len()`.
#[must_use]
pub fn count_by_status<E: Tracked>(entities: &[E]) -> StatusCounts<E::Status> {
    entities
        .iter()
        .fold(StatusCounts::zeroed(), |mut counts, entity| {
            counts.increment(entity.status());
            counts
        })
}
