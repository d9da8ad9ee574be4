//! Tunable thresholds for derived metrics.

/// Day thresholds used when suggesting a priority from a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityHorizon {
    /// Deadlines at most this many days away suggest `HIGH`.
    pub high_within_days: i64,
    /// Deadlines at most this many days away suggest `MEDIUM`.
    pub medium_within_days: i64,
}

impl Default for PriorityHorizon {
    fn default() -> Self {
        Self {
            high_within_days: 1,
            medium_within_days: 3,
        }
    }
}

/// Completion percentage cut-offs for progress colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressThresholds {
    /// At or above this percentage progress renders as success.
    pub success: u8,
    /// At or above this percentage progress renders as warning.
    pub warning: u8,
    /// At or above this percentage progress renders as caution.
    pub caution: u8,
}

impl Default for ProgressThresholds {
    fn default() -> Self {
        Self {
            success: 75,
            warning: 50,
            caution: 25,
        }
    }
}

/// Configuration for derived metrics.
///
/// # Examples
///
/// ```
/// use taskboard::metrics::{MetricsConfig, ProgressThresholds};
///
/// let config = MetricsConfig::default();
/// assert_eq!(config.progress_thresholds.success, 75);
///
/// let custom = MetricsConfig::default().with_progress_thresholds(ProgressThresholds {
///     success: 90,
///     warning: 60,
///     caution: 30,
/// });
/// assert_eq!(custom.progress_thresholds.success, 90);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Thresholds for deadline-based priority suggestions.
    pub priority_horizon: PriorityHorizon,
    /// Thresholds for progress colouring.
    pub progress_thresholds: ProgressThresholds,
}

impl MetricsConfig {
    /// Creates a lenient configuration.
    ///
    /// Deadlines escalate later and progress turns green sooner.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            priority_horizon: PriorityHorizon {
                high_within_days: 0,
                medium_within_days: 2,
            },
            progress_thresholds: ProgressThresholds {
                success: 60,
                warning: 40,
                caution: 20,
            },
        }
    }

    /// Creates a strict configuration.
    ///
    /// Deadlines escalate a week out and only near-complete work is green.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            priority_horizon: PriorityHorizon {
                high_within_days: 3,
                medium_within_days: 7,
            },
            progress_thresholds: ProgressThresholds {
                success: 90,
                warning: 70,
                caution: 40,
            },
        }
    }

    /// Replaces the priority horizon.
    #[must_use]
    pub const fn with_priority_horizon(mut self, horizon: PriorityHorizon) -> Self {
        self.priority_horizon = horizon;
        self
    }

    /// Replaces the progress thresholds.
    #[must_use]
    pub const fn with_progress_thresholds(mut self, thresholds: ProgressThresholds) -> Self {
        self.progress_thresholds = thresholds;
        self
    }
}
