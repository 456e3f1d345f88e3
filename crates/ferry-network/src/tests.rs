//! Unit tests for ferry-network.

use ferry_core::{Coordinate, StopId};

use crate::{Network, NetworkBuilder, NetworkError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Route "A-B-C" with A→B 240 s, B→C 180 s, and asymmetric return legs.
fn abc_builder() -> NetworkBuilder {
    let mut b = NetworkBuilder::new();
    b.add_stop("A", Coordinate::new(-74.00, 40.60)).unwrap();
    b.add_stop("B", Coordinate::new(-74.00, 40.62)).unwrap();
    b.add_stop("C", Coordinate::new(-73.98, 40.62)).unwrap();
    b.add_duration("A", "B", 240).unwrap();
    b.add_duration("B", "A", 300).unwrap();
    b.add_duration("B", "C", 180).unwrap();
    b.add_duration("C", "B", 200).unwrap();
    b
}

fn abc_network() -> Network {
    let mut b = abc_builder();
    b.add_route("A-B-C", &["A", "B", "C"]).unwrap();
    b.build().unwrap()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn duplicate_stop_rejected() {
        let mut b = abc_builder();
        let err = b.add_stop("A", Coordinate::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStop(name) if name == "A"));
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let mut b = NetworkBuilder::new();
        let err = b.add_stop("X", Coordinate::new(200.0, 0.0)).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidCoordinate { .. }));
    }

    #[test]
    fn unknown_stop_in_route_rejected() {
        let mut b = abc_builder();
        let err = b.add_route("bad", &["A", "Z"]).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownStop(name) if name == "Z"));
    }

    #[test]
    fn unknown_stop_in_duration_rejected() {
        let mut b = abc_builder();
        assert!(matches!(
            b.add_duration("A", "nowhere", 10),
            Err(NetworkError::UnknownStop(_))
        ));
    }

    #[test]
    fn round_trip_longer_than_u32_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", Coordinate::new(-74.0, 40.60)).unwrap();
        b.add_stop("B", Coordinate::new(-74.0, 40.62)).unwrap();
        b.add_crossing("A", "B", 3_000_000_000).unwrap();
        b.add_route("long", &["A", "B"]).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::DurationOverflow(name)) if name == "long"));
    }

    #[test]
    fn one_way_longer_than_u32_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", Coordinate::new(-74.0, 40.60)).unwrap();
        b.add_stop("B", Coordinate::new(-74.0, 40.62)).unwrap();
        b.add_stop("C", Coordinate::new(-74.0, 40.64)).unwrap();
        b.add_crossing("A", "B", u32::MAX).unwrap();
        b.add_crossing("B", "C", 1).unwrap();
        b.add_route("long", &["A", "B", "C"]).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::DurationOverflow(_))));
    }

    #[test]
    fn largest_round_trip_that_fits_is_accepted() {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", Coordinate::new(-74.0, 40.60)).unwrap();
        b.add_stop("B", Coordinate::new(-74.0, 40.62)).unwrap();
        b.add_duration("A", "B", u32::MAX - 1).unwrap();
        b.add_duration("B", "A", 1).unwrap();
        b.add_route("edge", &["A", "B"]).unwrap();
        let net = b.build().unwrap();
        assert_eq!(net.route(net.route_id("edge").unwrap()).round_trip_secs(), u32::MAX);
    }

    #[test]
    fn single_stop_route_rejected() {
        let mut b = abc_builder();
        b.add_route("lonely", &["A"]).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::RouteTooShort(_))));
    }

    #[test]
    fn repeated_adjacent_stop_rejected() {
        let mut b = abc_builder();
        b.add_route("stutter", &["A", "A", "B"]).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::RepeatedStop { .. })));
    }

    #[test]
    fn missing_reverse_duration_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", Coordinate::new(0.0, 0.0)).unwrap();
        b.add_stop("B", Coordinate::new(0.0, 0.1)).unwrap();
        b.add_duration("A", "B", 60).unwrap();
        b.add_route("one-way", &["A", "B"]).unwrap();
        match b.build() {
            Err(NetworkError::MissingDuration { from, to, .. }) => {
                assert_eq!((from.as_str(), to.as_str()), ("B", "A"));
            }
            other => panic!("expected MissingDuration, got {other:?}"),
        }
    }

    #[test]
    fn zero_duration_rejected() {
        let mut b = abc_builder();
        b.add_duration("B", "C", 0).unwrap();
        b.add_route("A-B-C", &["A", "B", "C"]).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::ZeroDuration { .. })));
    }

    #[test]
    fn duplicate_route_rejected() {
        let mut b = abc_builder();
        b.add_route("r", &["A", "B"]).unwrap();
        assert!(matches!(
            b.add_route("r", &["B", "C"]),
            Err(NetworkError::DuplicateRoute(_))
        ));
    }

    #[test]
    fn unused_stops_need_no_durations() {
        let mut b = abc_builder();
        b.add_stop("Island", Coordinate::new(-74.1, 40.5)).unwrap();
        b.add_route("A-B", &["A", "B"]).unwrap();
        assert!(b.build().is_ok());
    }
}

// ── Lookups and totals ────────────────────────────────────────────────────────

#[cfg(test)]
mod lookups {
    use super::*;

    #[test]
    fn travel_secs_is_directed() {
        let net = abc_network();
        assert_eq!(net.travel_secs_by_name("A", "B"), 240);
        assert_eq!(net.travel_secs_by_name("B", "A"), 300);
    }

    #[test]
    fn absent_travel_secs_is_zero() {
        let net = abc_network();
        assert_eq!(net.travel_secs_by_name("A", "C"), 0);
        assert_eq!(net.travel_secs_by_name("A", "nowhere"), 0);
    }

    #[test]
    fn route_totals() {
        let net = abc_network();
        let route = net.route(net.route_id("A-B-C").unwrap());
        assert_eq!(route.forward_secs(), 420);
        assert_eq!(route.backward_secs(), 500);
        assert_eq!(route.round_trip_secs(), 920);
        assert_eq!(net.total_forward_secs(route), 420);
        assert_eq!(net.total_backward_secs(route), 500);
    }

    #[test]
    fn forward_legs_ascend() {
        let net = abc_network();
        let route = net.route(net.route_id("A-B-C").unwrap());
        let legs: Vec<_> = net.forward_legs(route).map(|l| (l.from_pos, l.to_pos, l.secs)).collect();
        assert_eq!(legs, vec![(0, 1, 240), (1, 2, 180)]);
    }

    #[test]
    fn backward_legs_descend() {
        let net = abc_network();
        let route = net.route(net.route_id("A-B-C").unwrap());
        let legs: Vec<_> = net.backward_legs(route).map(|l| (l.from_pos, l.to_pos, l.secs)).collect();
        assert_eq!(legs, vec![(2, 1, 200), (1, 0, 300)]);
    }

    #[test]
    fn first_and_last_stop() {
        let net = abc_network();
        let route = net.route(net.route_id("A-B-C").unwrap());
        assert_eq!(net.stop_name(route.first_stop()), "A");
        assert_eq!(net.stop_name(route.last_stop()), "C");
    }

    #[test]
    fn stop_ids_are_sequential() {
        let net = abc_network();
        assert_eq!(net.stop_id("A"), Some(StopId(0)));
        assert_eq!(net.stop_id("C"), Some(StopId(2)));
        assert_eq!(net.stop_id("Z"), None);
    }
}

// ── Built-in network ──────────────────────────────────────────────────────────

#[cfg(test)]
mod nyc {
    use crate::nyc;

    #[test]
    fn builds_and_validates() {
        let net = nyc::network().unwrap();
        assert_eq!(net.route_count(), 4);
        assert_eq!(net.stop_count(), 17);
        assert_eq!(net.duration_count(), 28);
    }

    #[test]
    fn staten_island_round_trip_is_fifty_minutes() {
        let net = nyc::network().unwrap();
        let route = net.route(net.route_id(nyc::STATEN_ISLAND_MANHATTAN).unwrap());
        assert_eq!(route.forward_secs(), 25 * 60);
        assert_eq!(route.round_trip_secs(), 50 * 60);
    }

    #[test]
    fn governors_island_forward_is_seven_minutes() {
        let net = nyc::network().unwrap();
        let route = net.route(net.route_id(nyc::GOVERNORS_ISLAND_MANHATTAN).unwrap());
        assert_eq!(route.forward_secs(), 7 * 60);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use approx::assert_abs_diff_eq;

    use crate::{NetworkError, load_network_dir, load_network_readers};

    const STOPS: &str = "name,lon,lat\nA,-74.00,40.60\nB,-74.00,40.62\nC,-73.98,40.62\n";
    const DURATIONS: &str = "from,to,secs\nA,B,240\nB,A,240\nB,C,180\nC,B,180\n";
    // Deliberately out of seq order.
    const ROUTES: &str = "route,seq,stop\nA-B-C,2,C\nA-B-C,0,A\nA-B-C,1,B\n";

    #[test]
    fn loads_from_readers() {
        let net = load_network_readers(
            Cursor::new(STOPS),
            Cursor::new(DURATIONS),
            Cursor::new(ROUTES),
        )
        .unwrap();
        let route = net.route(net.route_id("A-B-C").unwrap());
        let names: Vec<_> = route.stops.iter().map(|&s| net.stop_name(s)).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(route.round_trip_secs(), 840);
        assert_abs_diff_eq!(net.coord(route.last_stop()).lon, -73.98);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let err = load_network_readers(
            Cursor::new("name,lon,lat\nA,west,40.6\n"),
            Cursor::new("from,to,secs\n"),
            Cursor::new("route,seq,stop\n"),
        )
        .unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn duplicate_seq_rejected() {
        let err = load_network_readers(
            Cursor::new(STOPS),
            Cursor::new(DURATIONS),
            Cursor::new("route,seq,stop\nr,0,A\nr,0,B\n"),
        )
        .unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("stops.csv"), STOPS).unwrap();
        std::fs::write(dir.path().join("durations.csv"), DURATIONS).unwrap();
        std::fs::write(dir.path().join("routes.csv"), ROUTES).unwrap();
        let net = load_network_dir(dir.path()).unwrap();
        assert_eq!(net.route_count(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(matches!(load_network_dir(dir.path()), Err(NetworkError::Io(_))));
    }
}
