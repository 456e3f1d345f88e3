//! CSV fleet loader.
//!
//! # CSV format
//!
//! One row per vessel.  The profile columns are optional as a group: leave
//! `call_sign` empty to register a vessel without a static profile.
//!
//! ```csv
//! name,mmsi,route,call_sign,draught,to_bow,to_stern,to_port,to_starboard,ship_type,first_departure_min,interval_min,departures
//! MV Sally,368710000,Wall Street - Brooklyn Army Terminal,WDI6920,4.0,11,8,7,7,60,15,60,24
//! Harbor Shuttle,368710009,Governors Island - Manhattan,,,,,,,,0,40,36
//! ```
//!
//! Departures are generated with [`DepartureSchedule::every`].  A missing
//! `ship_type` defaults to 60 (passenger).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ferry_core::Mmsi;
use ferry_network::Network;

use crate::vessel::SHIP_TYPE_PASSENGER;
use crate::{DepartureSchedule, Fleet, FleetBuilder, FleetError, FleetResult, HullDimensions, VesselProfile, VesselSpec};

#[derive(Deserialize)]
struct VesselRecord {
    name:                String,
    mmsi:                String,
    route:               String,
    call_sign:           Option<String>,
    draught:             Option<f64>,
    to_bow:              Option<u16>,
    to_stern:            Option<u16>,
    to_port:             Option<u16>,
    to_starboard:        Option<u16>,
    ship_type:           Option<u8>,
    first_departure_min: u64,
    interval_min:        u64,
    departures:          usize,
}

/// Load the fleet from a CSV file, resolving routes against `network`.
pub fn load_fleet_csv(path: &Path, network: &Network) -> FleetResult<Fleet> {
    let file = std::fs::File::open(path)?;
    load_fleet_reader(file, network)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
pub fn load_fleet_reader<R: Read>(reader: R, network: &Network) -> FleetResult<Fleet> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut builder = FleetBuilder::new(network);

    for result in rdr.deserialize::<VesselRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        let mmsi: Mmsi = row.mmsi.parse()?;
        builder.add(VesselSpec {
            profile:  profile_of(&row),
            schedule: DepartureSchedule::every(
                row.first_departure_min,
                row.interval_min,
                row.departures,
            ),
            name:  row.name,
            mmsi,
            route: row.route.trim().to_owned(),
        })?;
    }

    Ok(builder.build())
}

fn profile_of(row: &VesselRecord) -> Option<VesselProfile> {
    let call_sign = row.call_sign.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let mut profile = VesselProfile::passenger(
        call_sign,
        row.draught.unwrap_or(0.0),
        HullDimensions {
            to_bow:       row.to_bow.unwrap_or(0),
            to_stern:     row.to_stern.unwrap_or(0),
            to_port:      row.to_port.unwrap_or(0),
            to_starboard: row.to_starboard.unwrap_or(0),
        },
    );
    profile.ship_type = row.ship_type.unwrap_or(SHIP_TYPE_PASSENGER);
    Some(profile)
}
