//! The engine's output for one vessel at one second.

use std::fmt;

use ferry_core::{Coordinate, RouteId, SimSecond, VesselId};
use ferry_network::{Leg, Network};

/// Which way along its route a vessel is travelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Index-ascending: first stop towards last stop.
    Forward,
    /// Index-descending: last stop back towards first stop.
    Backward,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward  => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed state of one vessel at one simulated second.
///
/// Produced fresh each tick and consumed immediately by the ETA deriver and
/// the encoders.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionSample {
    pub vessel:      VesselId,
    pub route:       RouteId,
    pub at:          SimSecond,
    pub coord:       Coordinate,
    pub direction:   Direction,
    /// The leg being sailed.
    pub leg:         Leg,
    /// Progress along `leg`, in `[0, 1]`.
    pub t:           f64,
    /// Initial bearing of the leg, in `[0, 360)`.
    pub heading_deg: f64,
    /// Mean speed over the leg, metres per second.
    pub speed_mps:   f64,
}

impl PositionSample {
    /// `"From->To"` label of the current leg.
    pub fn segment(&self, network: &Network) -> String {
        format!("{}->{}", network.stop_name(self.leg.from), network.stop_name(self.leg.to))
    }
}
