//! Unit tests for ferry-core primitives.

#[cfg(test)]
mod ids {
    use crate::{Mmsi, StopId, VesselId};

    #[test]
    fn index_roundtrip() {
        let id = VesselId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VesselId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
    }

    #[test]
    fn mmsi_parses_nine_digits() {
        let mmsi: Mmsi = "367587740".parse().unwrap();
        assert_eq!(mmsi.into_inner(), 367_587_740);
        assert_eq!(mmsi.to_string(), "367587740");
    }

    #[test]
    fn mmsi_rejects_garbage() {
        assert!("".parse::<Mmsi>().is_err());
        assert!("36758774X".parse::<Mmsi>().is_err());
        assert!("1234567890".parse::<Mmsi>().is_err());
        assert!(Mmsi::new(1_000_000_000).is_err());
    }

    #[test]
    fn mmsi_display_is_zero_padded() {
        assert_eq!(Mmsi::new(42).unwrap().to_string(), "000000042");
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_abs_diff_eq;

    use crate::Coordinate;

    const STATEN_ISLAND: Coordinate = Coordinate::new(-74.07185247730308, 40.64372599586143);
    const MANHATTAN_SOUTH: Coordinate = Coordinate::new(-74.01183111812227, 40.70094075584476);

    #[test]
    fn zero_distance() {
        assert_eq!(STATEN_ISLAND.distance_m(STATEN_ISLAND), 0.0);
    }

    #[test]
    fn one_degree_latitude() {
        let a = Coordinate::new(-74.0, 40.0);
        let b = Coordinate::new(-74.0, 41.0);
        assert_abs_diff_eq!(a.distance_m(b), 111_195.0, epsilon = 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(
            STATEN_ISLAND.distance_m(MANHATTAN_SOUTH),
            MANHATTAN_SOUTH.distance_m(STATEN_ISLAND),
        );
    }

    #[test]
    fn harbour_crossing_is_about_eight_km() {
        let d = STATEN_ISLAND.distance_m(MANHATTAN_SOUTH);
        assert!((7_500.0..8_500.0).contains(&d), "got {d}");
    }

    #[test]
    fn cardinal_bearings() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_abs_diff_eq!(origin.bearing_deg(Coordinate::new(0.0, 1.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing_deg(Coordinate::new(1.0, 0.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing_deg(Coordinate::new(0.0, -1.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing_deg(Coordinate::new(-1.0, 0.0)), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn bearing_is_in_range() {
        let b = MANHATTAN_SOUTH.bearing_deg(STATEN_ISLAND);
        assert!((0.0..360.0).contains(&b));
        assert!(b > 180.0, "south-west leg, got {b}");
    }

    #[test]
    fn bearing_of_identical_points_is_zero() {
        assert_eq!(STATEN_ISLAND.bearing_deg(STATEN_ISLAND), 0.0);
    }

    #[test]
    fn interpolate_endpoints_are_exact() {
        let start = STATEN_ISLAND.interpolate(MANHATTAN_SOUTH, 0.0);
        let end = STATEN_ISLAND.interpolate(MANHATTAN_SOUTH, 1.0);
        assert_abs_diff_eq!(start.lon, STATEN_ISLAND.lon, epsilon = 1e-9);
        assert_abs_diff_eq!(start.lat, STATEN_ISLAND.lat, epsilon = 1e-9);
        assert_abs_diff_eq!(end.lon, MANHATTAN_SOUTH.lon, epsilon = 1e-9);
        assert_abs_diff_eq!(end.lat, MANHATTAN_SOUTH.lat, epsilon = 1e-9);
    }

    #[test]
    fn interpolate_clamps_out_of_range() {
        assert_eq!(STATEN_ISLAND.interpolate(MANHATTAN_SOUTH, -0.5), STATEN_ISLAND);
        assert_eq!(STATEN_ISLAND.interpolate(MANHATTAN_SOUTH, 1.5), MANHATTAN_SOUTH);
    }

    #[test]
    fn interpolate_midpoint() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(2.0, 4.0);
        assert_eq!(a.interpolate(b, 0.5), Coordinate::new(1.0, 2.0));
    }
}

#[cfg(test)]
mod time {
    use chrono::{Datelike, NaiveDate, Timelike};

    use crate::{SimClock, SimConfig, SimSecond};

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn second_of_day_wraps() {
        assert_eq!(SimSecond(86_399).second_of_day(), 86_399);
        assert_eq!(SimSecond(86_400).second_of_day(), 0);
        assert_eq!(SimSecond(90_061).second_of_day(), 3_661);
    }

    #[test]
    fn hms_and_display() {
        assert_eq!(SimSecond(3_661).hms(), (1, 1, 1));
        assert_eq!(SimSecond(43_200).to_string(), "12:00:00");
        assert_eq!(SimSecond(86_400 + 59).to_string(), "00:00:59");
    }

    #[test]
    fn signed_since() {
        assert_eq!(SimSecond(100).signed_since(40), 60);
        assert_eq!(SimSecond(40).signed_since(100), -60);
    }

    #[test]
    fn clock_advances_one_second_per_tick() {
        let mut clock = SimClock::new(epoch(), SimSecond(10));
        clock.advance();
        clock.advance();
        assert_eq!(clock.current, SimSecond(12));
        assert_eq!(clock.elapsed_ticks(), 2);
    }

    #[test]
    fn date_time_crosses_midnight() {
        let clock = SimClock::new(epoch(), SimSecond(0));
        let dt = clock.date_time_at(SimSecond(86_000), 1_000);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 10);
    }

    #[test]
    fn config_end_second() {
        let cfg = SimConfig {
            start_second: SimConfig::NOON,
            total_ticks:  Some(60),
            seed:         42,
            epoch_date:   epoch(),
        };
        assert_eq!(cfg.end_second(), Some(SimSecond(43_260)));
        assert_eq!(cfg.make_clock().current, SimSecond(43_200));

        let unbounded = SimConfig { total_ticks: None, ..cfg };
        assert_eq!(unbounded.end_second(), None);
    }
}

#[cfg(test)]
mod rng {
    use crate::{VesselId, VesselRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = VesselRng::new(12345, VesselId(0));
        let mut r2 = VesselRng::new(12345, VesselId(0));
        for _ in 0..100 {
            let a: i32 = r1.gen_range(-10..=10);
            let b: i32 = r2.gen_range(-10..=10);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_vessels_differ() {
        let mut r0 = VesselRng::new(1, VesselId(0));
        let mut r1 = VesselRng::new(1, VesselId(1));
        let a: Vec<u64> = (0..8).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent vessels should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = VesselRng::new(0, VesselId(0));
        for _ in 0..1000 {
            let v: i32 = rng.gen_range(-10..=10);
            assert!((-10..=10).contains(&v));
        }
    }
}
