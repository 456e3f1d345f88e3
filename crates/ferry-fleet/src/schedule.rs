//! Repeating departure schedules.

/// The offsets, in seconds past simulated midnight, at which a vessel begins
/// a round trip.  The same offsets apply on every simulated day.
///
/// Offsets keep the order in which they were defined.  The position engine
/// scans them in that order and the first departure whose trip window
/// contains the current second wins, so a schedule with overlapping trips
/// resolves deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepartureSchedule {
    offsets: Vec<u64>,
}

impl DepartureSchedule {
    pub fn new(offsets: Vec<u64>) -> Self {
        Self { offsets }
    }

    /// `count` departures starting at `start_min` past midnight, one every
    /// `interval_min` minutes.
    pub fn every(start_min: u64, interval_min: u64, count: usize) -> Self {
        let offsets = (0..count as u64)
            .map(|i| (start_min + i * interval_min) * 60)
            .collect();
        Self { offsets }
    }

    #[inline]
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
