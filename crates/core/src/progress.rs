use std::time::Duration;

/// Fixed delay between simulated load ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How long the finished loading screen is held before the page mounts.
pub const COMPLETION_HOLD: Duration = Duration::from_millis(500);

/// Smallest amount a single tick may add.
pub const MIN_TICK_INCREMENT: u8 = 1;

/// Largest amount a single tick may add.
pub const MAX_TICK_INCREMENT: u8 = 15;

/// Worst case: every tick lands at `MIN_TICK_INCREMENT`.
pub const MAX_TICKS_TO_COMPLETE: u32 = 100;

/// Simulated load progress as a percentage, clamped to `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadProgress(u8);

impl LoadProgress {
    pub const COMPLETE: Self = Self(100);

    #[must_use]
    pub fn zero() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }

    fn advanced_by(self, increment: u8) -> Self {
        Self(self.0.saturating_add(increment).min(100))
    }
}

/// What a single tick did to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved but has not reached the terminal value.
    Advanced,
    /// Progress reached 100 on this tick. Reported exactly once; the driver
    /// must stop ticking when it sees this.
    Completed,
    /// The simulation was already complete. A well-behaved driver never
    /// observes this.
    Saturated,
}

/// The loading screen's progress counter.
///
/// Progress is monotonically non-decreasing and terminal at 100. The caller
/// supplies increments (random in production, fixed in tests) and owns the
/// tick cadence.
#[derive(Debug, Clone, Default)]
pub struct ProgressSimulation {
    progress: LoadProgress,
    completed: bool,
}

impl ProgressSimulation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn progress(&self) -> LoadProgress {
        self.progress
    }

    /// Advance by `increment`, clamped to the allowed per-tick range.
    pub fn tick(&mut self, increment: u8) -> TickOutcome {
        if self.completed {
            return TickOutcome::Saturated;
        }
        let increment = increment.clamp(MIN_TICK_INCREMENT, MAX_TICK_INCREMENT);
        self.progress = self.progress.advanced_by(increment);
        if self.progress.is_complete() {
            self.completed = true;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }
}
