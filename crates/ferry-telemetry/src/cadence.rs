//! Static-report cadence.
//!
//! Each vessel counts the ticks on which it produced a position.  When the
//! count reaches its threshold the static report is due, the count restarts
//! at zero and a fresh threshold is drawn.  Thresholds fall between 50 and
//! 70 ticks so the fleet's static reports do not line up.

use ferry_core::{VesselId, VesselRng};

/// Centre of the threshold range.
pub const BASE_THRESHOLD: u32 = 60;

/// Largest deviation from [`BASE_THRESHOLD`].
pub const THRESHOLD_JITTER: i32 = 10;

/// Per-vessel counter deciding when to send a static report.
#[derive(Clone, Debug)]
pub struct StaticReportCadence {
    counter:   u32,
    threshold: u32,
    rng:       VesselRng,
}

impl StaticReportCadence {
    /// Seed the cadence of `vessel` from the run's global seed and draw the
    /// first threshold.
    pub fn new(seed: u64, vessel: VesselId) -> Self {
        let mut rng = VesselRng::new(seed, vessel);
        let threshold = draw_threshold(&mut rng);
        Self { counter: 0, threshold, rng }
    }

    /// Record one positioned tick.  Returns `true` when the static report is
    /// due on this tick.
    pub fn record_position(&mut self) -> bool {
        self.counter += 1;
        if self.counter < self.threshold {
            return false;
        }
        self.counter = 0;
        self.threshold = draw_threshold(&mut self.rng);
        true
    }

    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

fn draw_threshold(rng: &mut VesselRng) -> u32 {
    let offset: i32 = rng.gen_range(-THRESHOLD_JITTER..=THRESHOLD_JITTER);
    BASE_THRESHOLD.saturating_add_signed(offset)
}
