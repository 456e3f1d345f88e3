//! The built-in New York harbour network.
//!
//! Four routes between terminals, with intermediate waypoints that keep the
//! straight-line legs on the water.  Waypoints are ordinary stops.

use ferry_core::Coordinate;

use crate::{Network, NetworkBuilder, NetworkResult};

pub const STATEN_ISLAND_MANHATTAN: &str = "Staten Island - Manhattan";
pub const WALL_STREET_BROOKLYN_ARMY_TERMINAL: &str = "Wall Street - Brooklyn Army Terminal";
pub const QUEENS_EAST_34TH: &str = "Queens - East 34th";
pub const GOVERNORS_ISLAND_MANHATTAN: &str = "Governors Island - Manhattan";

const STOPS: &[(&str, f64, f64)] = &[
    ("Staten Island", -74.07185247730308, 40.64372599586143),
    ("Manhattan South", -74.01183111812227, 40.70094075584476),
    ("Waypoint_SI_1", -74.065, 40.660),
    ("Waypoint_SI_2", -74.030, 40.670),
    ("Waypoint_SI_3", -74.015, 40.685),
    ("Wall Street Pier 11", -74.0055, 40.7032),
    ("Brooklyn Army Terminal", -74.0263199814677, 40.646481073821555),
    ("Waypoint_BK_1", -74.010, 40.685),
    ("Waypoint_BK_3", -74.00990862168231, 40.688724040690865),
    ("Waypoint_BK_4", -74.02479978200442, 40.678026368045664),
    ("Waypoint_BK_5", -74.03164629249736, 40.65440590684508),
    ("Astoria Dock", -73.935718, 40.771726),
    ("Roosevelt Island Pier", -73.949, 40.762),
    ("Long Island City Pier", -73.961, 40.748),
    ("East 34th", -73.97064262198204, 40.743945191164066),
    ("Governors Island Dock", -74.015167, 40.686489),
    ("Waypoint_GI_1", -74.013, 40.690),
];

/// Symmetric crossings `(a, b, minutes)`.
const CROSSINGS: &[(&str, &str, u32)] = &[
    ("Staten Island", "Waypoint_SI_1", 9),
    ("Waypoint_SI_1", "Waypoint_SI_2", 7),
    ("Waypoint_SI_2", "Waypoint_SI_3", 5),
    ("Waypoint_SI_3", "Manhattan South", 4),
    ("Wall Street Pier 11", "Waypoint_BK_3", 4),
    ("Waypoint_BK_3", "Waypoint_BK_1", 3),
    ("Waypoint_BK_1", "Waypoint_BK_4", 3),
    ("Waypoint_BK_4", "Waypoint_BK_5", 3),
    ("Waypoint_BK_5", "Brooklyn Army Terminal", 4),
    ("Astoria Dock", "Roosevelt Island Pier", 7),
    ("Roosevelt Island Pier", "Long Island City Pier", 6),
    ("Long Island City Pier", "East 34th", 8),
    ("Governors Island Dock", "Waypoint_GI_1", 3),
    ("Waypoint_GI_1", "Manhattan South", 4),
];

const ROUTES: &[(&str, &[&str])] = &[
    (
        STATEN_ISLAND_MANHATTAN,
        &["Staten Island", "Waypoint_SI_1", "Waypoint_SI_2", "Waypoint_SI_3", "Manhattan South"],
    ),
    (
        WALL_STREET_BROOKLYN_ARMY_TERMINAL,
        &[
            "Wall Street Pier 11",
            "Waypoint_BK_3",
            "Waypoint_BK_1",
            "Waypoint_BK_4",
            "Waypoint_BK_5",
            "Brooklyn Army Terminal",
        ],
    ),
    (
        QUEENS_EAST_34TH,
        &["Astoria Dock", "Roosevelt Island Pier", "Long Island City Pier", "East 34th"],
    ),
    (
        GOVERNORS_ISLAND_MANHATTAN,
        &["Governors Island Dock", "Waypoint_GI_1", "Manhattan South"],
    ),
];

/// Build the built-in harbour network.
pub fn network() -> NetworkResult<Network> {
    let mut b = NetworkBuilder::new();
    for &(name, lon, lat) in STOPS {
        b.add_stop(name, Coordinate::new(lon, lat))?;
    }
    for &(a, z, minutes) in CROSSINGS {
        b.add_crossing(a, z, minutes * 60)?;
    }
    for &(name, stops) in ROUTES {
        b.add_route(name, stops)?;
    }
    b.build()
}
