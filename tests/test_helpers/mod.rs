//! Shared clock and snapshot builders for integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, RwLock};

/// Clock that stays put until a test moves it.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl SteppingClock {
    /// Creates a clock frozen at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        if let Ok(mut now) = self.now.write() {
            *now += step;
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.read().map_or_else(|poisoned| **poisoned.get_ref(), |now| *now)
    }
}

/// Reference instant: 2025-03-12 09:30 UTC.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 9, 30, 0)
        .single()
        .unwrap_or_default()
}
