//! Unit tests for ferry-engine.

use approx::assert_abs_diff_eq;

use ferry_core::{Coordinate, Mmsi, SimSecond, VesselId};
use ferry_fleet::{DepartureSchedule, Fleet, FleetBuilder, VesselSpec};
use ferry_network::{Network, NetworkBuilder};

use crate::{Direction, PositionEngine};

// ── Helpers ───────────────────────────────────────────────────────────────────

const A: Coordinate = Coordinate::new(-74.00, 40.60);
const B: Coordinate = Coordinate::new(-74.00, 40.62);
const C: Coordinate = Coordinate::new(-73.98, 40.62);

/// Route "A-B-C": A→B 240 s, B→C 180 s, same on the way back.
/// One-way 420 s, round trip 840 s.
fn abc_network() -> Network {
    let mut b = NetworkBuilder::new();
    b.add_stop("A", A).unwrap();
    b.add_stop("B", B).unwrap();
    b.add_stop("C", C).unwrap();
    b.add_crossing("A", "B", 240).unwrap();
    b.add_crossing("B", "C", 180).unwrap();
    b.add_route("A-B-C", &["A", "B", "C"]).unwrap();
    b.build().unwrap()
}

fn fleet_with(network: &Network, schedules: &[&[u64]]) -> Fleet {
    let mut b = FleetBuilder::new(network);
    for (i, offsets) in schedules.iter().enumerate() {
        b.add(VesselSpec {
            name:     format!("Vessel {i}"),
            mmsi:     Mmsi::new(100 + i as u32).unwrap(),
            route:    "A-B-C".to_owned(),
            profile:  None,
            schedule: DepartureSchedule::new(offsets.to_vec()),
        })
        .unwrap();
    }
    b.build()
}

const V0: VesselId = VesselId(0);

// ── Position engine ───────────────────────────────────────────────────────────

#[cfg(test)]
mod position {
    use super::*;

    #[test]
    fn midway_along_first_leg() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        let engine = PositionEngine::new(&net, &fleet);

        let s = engine.position(V0, SimSecond(120)).unwrap();
        assert_eq!(s.segment(&net), "A->B");
        assert_eq!(s.direction, Direction::Forward);
        assert_abs_diff_eq!(s.t, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.coord.lon, -74.00, epsilon = 1e-9);
        assert_abs_diff_eq!(s.coord.lat, 40.61, epsilon = 1e-9);
    }

    #[test]
    fn second_leg_fraction() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        let engine = PositionEngine::new(&net, &fleet);

        let s = engine.position(V0, SimSecond(300)).unwrap();
        assert_eq!(s.segment(&net), "B->C");
        assert_abs_diff_eq!(s.t, 60.0 / 180.0, epsilon = 1e-12);
    }

    #[test]
    fn trip_start_is_inclusive() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[1_000]]);
        let engine = PositionEngine::new(&net, &fleet);

        assert!(engine.position(V0, SimSecond(999)).is_none());
        let s = engine.position(V0, SimSecond(1_000)).unwrap();
        assert_eq!(s.t, 0.0);
        assert_eq!(s.coord, A);
    }

    #[test]
    fn trip_end_is_inclusive() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[1_000]]);
        let engine = PositionEngine::new(&net, &fleet);

        let s = engine.position(V0, SimSecond(1_840)).unwrap();
        assert_eq!(s.direction, Direction::Backward);
        assert_eq!(s.segment(&net), "B->A");
        assert_eq!(s.coord, A);
        assert!(engine.position(V0, SimSecond(1_841)).is_none());
    }

    #[test]
    fn turnaround_belongs_to_forward_leg() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        let engine = PositionEngine::new(&net, &fleet);

        let at_c = engine.position(V0, SimSecond(420)).unwrap();
        assert_eq!(at_c.direction, Direction::Forward);
        assert_eq!(at_c.segment(&net), "B->C");
        assert_eq!(at_c.coord, C);

        let leaving = engine.position(V0, SimSecond(421)).unwrap();
        assert_eq!(leaving.direction, Direction::Backward);
        assert_eq!(leaving.segment(&net), "C->B");
    }

    #[test]
    fn heading_and_speed_follow_the_leg() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        let engine = PositionEngine::new(&net, &fleet);

        let north = engine.position(V0, SimSecond(10)).unwrap();
        assert_abs_diff_eq!(north.heading_deg, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(north.speed_mps, A.distance_m(B) / 240.0, epsilon = 1e-9);

        let east = engine.position(V0, SimSecond(300)).unwrap();
        assert_abs_diff_eq!(east.heading_deg, 90.0, epsilon = 0.01);

        let south = engine.position(V0, SimSecond(800)).unwrap();
        assert_abs_diff_eq!(south.heading_deg, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn first_listed_departure_wins() {
        let net = abc_network();
        // Overlapping trips, listed out of time order.
        let fleet = fleet_with(&net, &[&[500, 0]]);
        let engine = PositionEngine::new(&net, &fleet);

        let s = engine.position(V0, SimSecond(600)).unwrap();
        assert_eq!(s.segment(&net), "A->B");
        assert_abs_diff_eq!(s.t, 100.0 / 240.0, epsilon = 1e-12);
    }

    #[test]
    fn schedule_repeats_every_day() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[600]]);
        let engine = PositionEngine::new(&net, &fleet);

        assert!(engine.position(V0, SimSecond(86_400 + 599)).is_none());
        let s = engine.position(V0, SimSecond(86_400 + 600 + 120)).unwrap();
        assert_eq!(s.segment(&net), "A->B");
        assert_abs_diff_eq!(s.t, 0.5, epsilon = 1e-12);

        let s = engine.position(V0, SimSecond(2 * 86_400 + 600 + 300)).unwrap();
        assert_eq!(s.segment(&net), "B->C");
        assert_eq!(s.at, SimSecond(2 * 86_400 + 900));
    }

    #[test]
    fn trip_crossing_midnight_keeps_sailing() {
        let net = abc_network();
        let d = 86_400 - 100;
        let fleet = fleet_with(&net, &[&[d]]);
        let engine = PositionEngine::new(&net, &fleet);

        // Nothing departed "yesterday" on day 0.
        assert!(engine.position(V0, SimSecond(20)).is_none());

        let s = engine.position(V0, SimSecond(86_400 + 20)).unwrap();
        assert_eq!(s.segment(&net), "A->B");
        assert_abs_diff_eq!(s.t, 0.5, epsilon = 1e-12);
        assert_eq!(s.at.second_of_day(), 20);

        assert!(engine.position(V0, SimSecond(d + 840)).is_some());
        assert!(engine.position(V0, SimSecond(d + 841)).is_none());
    }

    #[test]
    fn positions_are_in_fleet_order() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0], &[5_000], &[60]]);
        let engine = PositionEngine::new(&net, &fleet);

        let ids: Vec<_> = engine.positions(SimSecond(100)).iter().map(|s| s.vessel).collect();
        assert_eq!(ids, vec![VesselId(0), VesselId(2)]);
    }

    #[test]
    fn built_in_fleet_stays_in_range_all_day() {
        let net = ferry_network::nyc::network().unwrap();
        let fleet = ferry_fleet::nyc::fleet(&net).unwrap();
        let engine = PositionEngine::new(&net, &fleet);

        let mut seen = 0;
        for s in (0..86_400).step_by(37) {
            for p in engine.positions(SimSecond(s)) {
                assert!((0.0..360.0).contains(&p.heading_deg), "heading {}", p.heading_deg);
                assert!(p.speed_mps >= 0.0);
                assert!((0.0..=1.0).contains(&p.t));
                seen += 1;
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Backward.as_str(), "backward");
    }
}

// ── ETA / destination ─────────────────────────────────────────────────────────

#[cfg(test)]
mod eta {
    use super::*;
    use crate::{destination, eta_secs};

    fn at(net: &Network, fleet: &Fleet, second: u64) -> crate::PositionSample {
        PositionEngine::new(net, fleet).position(V0, SimSecond(second)).unwrap()
    }

    #[test]
    fn full_one_way_at_departure() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        assert_eq!(eta_secs(&net, &at(&net, &fleet, 0)), Some(420));
    }

    #[test]
    fn arrival_at_intermediate_stop_leaves_only_later_legs() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        assert_eq!(eta_secs(&net, &at(&net, &fleet, 240)), Some(180));
    }

    #[test]
    fn zero_at_terminal_both_ways() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        assert_eq!(eta_secs(&net, &at(&net, &fleet, 420)), Some(0));
        assert_eq!(eta_secs(&net, &at(&net, &fleet, 840)), Some(0));
    }

    #[test]
    fn backward_counts_legs_towards_first_stop() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        // One second out of C on the way back: ~179 s to B, then 240 s to A.
        let eta = eta_secs(&net, &at(&net, &fleet, 421)).unwrap();
        assert!((418..=420).contains(&eta), "eta {eta}");
    }

    #[test]
    fn never_exceeds_one_way_time() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        let engine = PositionEngine::new(&net, &fleet);
        for s in 0..=840 {
            let sample = engine.position(V0, SimSecond(s)).unwrap();
            let eta = eta_secs(&net, &sample).unwrap();
            assert!(eta <= 420, "second {s}: eta {eta}");
        }
    }

    #[test]
    fn destination_is_route_terminal() {
        let net = abc_network();
        let fleet = fleet_with(&net, &[&[0]]);
        assert_eq!(destination(&net, &at(&net, &fleet, 100)), "C");
        assert_eq!(destination(&net, &at(&net, &fleet, 500)), "A");
    }

    #[test]
    fn zero_length_leg_is_unavailable() {
        let mut b = NetworkBuilder::new();
        b.add_stop("Slip 1", A).unwrap();
        b.add_stop("Slip 2", A).unwrap();
        b.add_crossing("Slip 1", "Slip 2", 60).unwrap();
        b.add_route("A-B-C", &["Slip 1", "Slip 2"]).unwrap();
        let net = b.build().unwrap();
        let fleet = fleet_with(&net, &[&[0]]);
        let sample = at(&net, &fleet, 30);
        assert_eq!(sample.speed_mps, 0.0);
        assert_eq!(eta_secs(&net, &sample), None);
    }
}
