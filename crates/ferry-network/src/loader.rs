//! CSV network loader.
//!
//! # CSV format
//!
//! Three files, each with a header row.
//!
//! `stops.csv`: one row per stop:
//!
//! ```csv
//! name,lon,lat
//! Staten Island,-74.0718,40.6437
//! Manhattan South,-74.0118,40.7009
//! ```
//!
//! `durations.csv`: one row per **directed** leg:
//!
//! ```csv
//! from,to,secs
//! Staten Island,Manhattan South,1500
//! Manhattan South,Staten Island,1500
//! ```
//!
//! `routes.csv`: one row per stop visit, `seq` ascending in forward order:
//!
//! ```csv
//! route,seq,stop
//! Staten Island - Manhattan,0,Staten Island
//! Staten Island - Manhattan,1,Manhattan South
//! ```
//!
//! Routes receive `RouteId`s in order of first appearance in `routes.csv`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ferry_core::Coordinate;

use crate::{Network, NetworkBuilder, NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    name: String,
    lon:  f64,
    lat:  f64,
}

#[derive(Deserialize)]
struct DurationRecord {
    from: String,
    to:   String,
    secs: u32,
}

#[derive(Deserialize)]
struct RouteRecord {
    route: String,
    seq:   u32,
    stop:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `stops.csv`, `durations.csv`, and `routes.csv` from `dir`.
pub fn load_network_dir(dir: &Path) -> NetworkResult<Network> {
    let stops = std::fs::File::open(dir.join("stops.csv"))?;
    let durations = std::fs::File::open(dir.join("durations.csv"))?;
    let routes = std::fs::File::open(dir.join("routes.csv"))?;
    load_network_readers(stops, durations, routes)
}

/// Like [`load_network_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or embedded data.
pub fn load_network_readers<S: Read, D: Read, R: Read>(
    stops:     S,
    durations: D,
    routes:    R,
) -> NetworkResult<Network> {
    let mut builder = NetworkBuilder::new();

    let mut stop_rdr = csv::Reader::from_reader(stops);
    for row in stop_rdr.deserialize::<StopRecord>() {
        let row = row.map_err(parse_err)?;
        builder.add_stop(row.name.trim(), Coordinate::new(row.lon, row.lat))?;
    }

    let mut duration_rdr = csv::Reader::from_reader(durations);
    for row in duration_rdr.deserialize::<DurationRecord>() {
        let row = row.map_err(parse_err)?;
        builder.add_duration(row.from.trim(), row.to.trim(), row.secs)?;
    }

    // Group stop visits by route, keeping first-appearance order.
    let mut grouped: Vec<(String, Vec<(u32, String)>)> = Vec::new();
    let mut route_rdr = csv::Reader::from_reader(routes);
    for row in route_rdr.deserialize::<RouteRecord>() {
        let row = row.map_err(parse_err)?;
        let name = row.route.trim();
        match grouped.iter_mut().find(|(r, _)| r.as_str() == name) {
            Some((_, visits)) => visits.push((row.seq, row.stop.trim().to_owned())),
            None => grouped.push((name.to_owned(), vec![(row.seq, row.stop.trim().to_owned())])),
        }
    }

    for (name, mut visits) in grouped {
        visits.sort_by_key(|(seq, _)| *seq);
        if let Some(pair) = visits.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(NetworkError::Parse(format!(
                "route {name:?} has two stops with seq {}",
                pair[0].0
            )));
        }
        let stops: Vec<&str> = visits.iter().map(|(_, s)| s.as_str()).collect();
        builder.add_route(&name, &stops)?;
    }

    builder.build()
}

fn parse_err(e: csv::Error) -> NetworkError {
    NetworkError::Parse(e.to_string())
}
