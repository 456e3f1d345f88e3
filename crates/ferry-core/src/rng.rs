//! Deterministic per-vessel RNG.
//!
//! Each vessel gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vessel_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vessel ids across the seed space.  Vessels never
//! share RNG state, and adding vessels at the end of the fleet leaves the
//! draws of existing vessels unchanged.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VesselId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-vessel deterministic RNG.
#[derive(Clone, Debug)]
pub struct VesselRng(SmallRng);

impl VesselRng {
    /// Seed deterministically from the run's global seed and a vessel id.
    pub fn new(global_seed: u64, vessel: VesselId) -> Self {
        let seed = global_seed ^ (vessel.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VesselRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
