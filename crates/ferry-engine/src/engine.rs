//! Schedule-driven position engine.

use ferry_core::{SECONDS_PER_DAY, SimSecond, VesselId};
use ferry_fleet::{Fleet, Vessel};
use ferry_network::{Leg, Network};

use crate::{Direction, PositionSample};

/// Read-only view over the network and fleet that answers "where is vessel
/// `v` at second `s`".
///
/// Holds no mutable state, so one engine can be shared across threads.
#[derive(Copy, Clone)]
pub struct PositionEngine<'a> {
    network: &'a Network,
    fleet:   &'a Fleet,
}

impl<'a> PositionEngine<'a> {
    pub fn new(network: &'a Network, fleet: &'a Fleet) -> Self {
        Self { network, fleet }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn fleet(&self) -> &'a Fleet {
        self.fleet
    }

    /// Position of `vessel` at `at`, or `None` while it is not on a trip.
    pub fn position(&self, vessel: VesselId, at: SimSecond) -> Option<PositionSample> {
        position_of(self.network, self.fleet.vessel(vessel), at)
    }

    /// Every vessel on a trip at `at`, in fleet order.
    pub fn positions(&self, at: SimSecond) -> Vec<PositionSample> {
        self.fleet
            .iter()
            .filter_map(|v| position_of(self.network, v, at))
            .collect()
    }
}

/// Position of `vessel` at the absolute second `at`.
///
/// Schedules repeat every simulated day.  Each offset is tried as today's
/// departure and then as yesterday's, so a trip that sails past midnight is
/// still evaluated on the un-wrapped counter.  The first departure in
/// schedule order whose round trip covers `at` wins.
pub fn position_of(network: &Network, vessel: &Vessel, at: SimSecond) -> Option<PositionSample> {
    let route   = network.route(vessel.route);
    let forward = i64::from(route.forward_secs());
    let full    = i64::from(route.round_trip_secs());

    let today     = at.0 - u64::from(at.second_of_day());
    let yesterday = today.checked_sub(SECONDS_PER_DAY);

    for &offset in vessel.schedule.offsets() {
        let instances = std::iter::once(today).chain(yesterday).map(|day| day.saturating_add(offset));
        for departure in instances {
            let elapsed = at.signed_since(departure);
            if elapsed < 0 || elapsed > full {
                continue;
            }

            let found = if elapsed <= forward {
                locate(network.forward_legs(route), elapsed, Direction::Forward)
            } else {
                locate(network.backward_legs(route), elapsed - forward, Direction::Backward)
            };

            if let Some((leg, t, direction)) = found {
                return Some(sample(network, vessel, at, leg, t, direction));
            }
        }
    }
    None
}

/// Find the leg containing `elapsed` seconds into a one-way traversal and
/// the fraction of it already sailed.
fn locate(
    legs:      impl Iterator<Item = Leg>,
    elapsed:   i64,
    direction: Direction,
) -> Option<(Leg, f64, Direction)> {
    let mut acc = 0i64;
    for leg in legs {
        let secs = i64::from(leg.secs);
        if elapsed <= acc + secs {
            let t = (elapsed - acc) as f64 / secs as f64;
            return Some((leg, t.clamp(0.0, 1.0), direction));
        }
        acc += secs;
    }
    None
}

fn sample(
    network:   &Network,
    vessel:    &Vessel,
    at:        SimSecond,
    leg:       Leg,
    t:         f64,
    direction: Direction,
) -> PositionSample {
    let from = network.coord(leg.from);
    let to   = network.coord(leg.to);
    PositionSample {
        vessel: vessel.id,
        route: vessel.route,
        at,
        coord: from.interpolate(to, t),
        direction,
        leg,
        t,
        heading_deg: from.bearing_deg(to),
        speed_mps: from.distance_m(to) / f64::from(leg.secs),
    }
}
