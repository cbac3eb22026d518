use folio_core::progress::{MAX_TICK_INCREMENT, MIN_TICK_INCREMENT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the random per-tick increments that drive the load simulation.
///
/// Kept out of `folio-core` so the simulation itself stays deterministic;
/// tests seed the driver instead of stubbing a timer.
#[derive(Debug, Clone)]
pub struct ProgressDriver<R = StdRng> {
    rng: R,
}

impl ProgressDriver<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ProgressDriver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ProgressDriver<R> {
    /// Next increment, always within the simulation's per-tick range.
    pub fn next_increment(&mut self) -> u8 {
        self.rng.random_range(MIN_TICK_INCREMENT..=MAX_TICK_INCREMENT)
    }
}
