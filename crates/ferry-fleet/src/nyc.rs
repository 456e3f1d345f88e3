//! The built-in harbour fleet: two vessels per route of
//! [`ferry_network::nyc`], staggered by half an interval.

use ferry_core::Mmsi;
use ferry_network::{Network, nyc as routes};

use crate::{DepartureSchedule, Fleet, FleetBuilder, FleetResult, HullDimensions, VesselProfile, VesselSpec};

struct Row {
    name:       &'static str,
    mmsi:       u32,
    call_sign:  &'static str,
    draught_m:  f64,
    dims:       [u16; 4],
    route:      &'static str,
    /// `(first departure minute, interval minutes, departures)`
    departures: (u64, u64, usize),
}

const FLEET: &[Row] = &[
    Row {
        name: "MV Gov. Alfred E. Smith", mmsi: 367_587_740, call_sign: "WDI6910",
        draught_m: 4.2, dims: [12, 8, 7, 7],
        route: routes::STATEN_ISLAND_MANHATTAN, departures: (0, 60, 24),
    },
    Row {
        name: "MV John F. Kennedy", mmsi: 367_587_580, call_sign: "WDI6901",
        draught_m: 3.8, dims: [10, 9, 6, 6],
        route: routes::STATEN_ISLAND_MANHATTAN, departures: (30, 60, 24),
    },
    Row {
        name: "MV Sally", mmsi: 368_710_000, call_sign: "WDI6920",
        draught_m: 4.0, dims: [11, 8, 7, 7],
        route: routes::WALL_STREET_BROOKLYN_ARMY_TERMINAL, departures: (15, 60, 24),
    },
    Row {
        name: "MV Mischief", mmsi: 368_710_001, call_sign: "WDI6921",
        draught_m: 3.9, dims: [10, 9, 6, 6],
        route: routes::WALL_STREET_BROOKLYN_ARMY_TERMINAL, departures: (45, 60, 24),
    },
    Row {
        name: "MV Hallets Point", mmsi: 368_710_002, call_sign: "WDI6922",
        draught_m: 4.1, dims: [12, 8, 7, 7],
        route: routes::QUEENS_EAST_34TH, departures: (0, 60, 24),
    },
    Row {
        name: "MV Soundview", mmsi: 368_710_003, call_sign: "WDI6923",
        draught_m: 3.8, dims: [10, 9, 6, 6],
        route: routes::QUEENS_EAST_34TH, departures: (30, 60, 24),
    },
    Row {
        name: "MV Governor", mmsi: 367_587_682, call_sign: "WDI6909",
        draught_m: 4.2, dims: [11, 9, 7, 7],
        route: routes::GOVERNORS_ISLAND_MANHATTAN, departures: (0, 40, 36),
    },
    Row {
        name: "MV American Legion", mmsi: 367_587_683, call_sign: "WDI6911",
        draught_m: 3.9, dims: [10, 8, 6, 6],
        route: routes::GOVERNORS_ISLAND_MANHATTAN, departures: (20, 40, 36),
    },
];

/// Build the built-in fleet against `network` (normally
/// [`ferry_network::nyc::network`]).
pub fn fleet(network: &Network) -> FleetResult<Fleet> {
    let mut builder = FleetBuilder::new(network);
    for row in FLEET {
        let [to_bow, to_stern, to_port, to_starboard] = row.dims;
        let (start, interval, count) = row.departures;
        builder.add(VesselSpec {
            name:     row.name.to_owned(),
            mmsi:     Mmsi::new(row.mmsi)?,
            route:    row.route.to_owned(),
            profile:  Some(VesselProfile::passenger(
                row.call_sign,
                row.draught_m,
                HullDimensions { to_bow, to_stern, to_port, to_starboard },
            )),
            schedule: DepartureSchedule::every(start, interval, count),
        })?;
    }
    Ok(builder.build())
}
