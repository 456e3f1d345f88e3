//! Remaining time and trip terminal for a [`PositionSample`].

use ferry_network::Network;

use crate::{Direction, PositionSample};

/// Seconds until the vessel reaches the terminal stop of its current one-way
/// trip, or `None` when the current leg has zero length.
///
/// Progress inside the leg is measured by distance from the leg start, so
/// the result tracks the reported coordinate rather than the clock.  The
/// sailed part of the leg is rounded down, which keeps the remainder within
/// `[0, leg.secs]`.
pub fn eta_secs(network: &Network, sample: &PositionSample) -> Option<u32> {
    let leg  = sample.leg;
    let from = network.coord(leg.from);
    let seg  = from.distance_m(network.coord(leg.to));
    if seg <= 0.0 {
        return None;
    }

    let frac   = (from.distance_m(sample.coord) / seg).clamp(0.0, 1.0);
    let sailed = ((f64::from(leg.secs) * frac).floor() as u32).min(leg.secs);
    let on_leg = leg.secs - sailed;

    let route = network.route(sample.route);
    let after: u32 = match sample.direction {
        Direction::Forward => network
            .forward_legs(route)
            .filter(|l| l.from_pos >= leg.to_pos)
            .map(|l| l.secs)
            .sum(),
        Direction::Backward => network
            .backward_legs(route)
            .filter(|l| l.from_pos <= leg.to_pos)
            .map(|l| l.secs)
            .sum(),
    };

    Some(on_leg + after)
}

/// Name of the stop the current one-way trip ends at: the route's last stop
/// going forward, its first stop coming back.
pub fn destination<'n>(network: &'n Network, sample: &PositionSample) -> &'n str {
    let route = network.route(sample.route);
    let stop = match sample.direction {
        Direction::Forward  => route.last_stop(),
        Direction::Backward => route.first_stop(),
    };
    network.stop_name(stop)
}
