//! Track-update encoder: one JSON `PUT` record per vessel per tick.
//!
//! ```json
//! {"action":"PUT",
//!  "geometry":{"type":"Point","coordinates":[-74.011831,40.700941]},
//!  "id":"367587740",
//!  "properties":{"mmsi":"367587740","ferry_name":"MV GOV. ALFRED E. SM",
//!    "route":"Staten Island - Manhattan","segment":"Waypoint_SI_3->Manhattan South",
//!    "direction":"forward","destination":"Manhattan South","timestamp_second":43440,
//!    "heading":31.9,"speed_mps":8.27,"eta_next_stop_sec":95,"draught":4.2,
//!    "dimensionToBow":12,"dimensionToStern":8,"dimensionToPort":7,"dimensionToStarboard":7}}
//! ```
//!
//! `eta_next_stop_sec` is omitted when the ETA cannot be derived; the
//! draught and dimension fields are omitted for vessels without a static
//! profile.

use serde::Serialize;
use serde_json::value::RawValue;

use ferry_fleet::VesselProfile;

use crate::json::{Point, fixed};
use crate::{SampleView, TelemetryResult};

#[derive(Serialize)]
struct TrackUpdate<'a> {
    action:     &'static str,
    geometry:   Point,
    id:         String,
    properties: TrackProperties<'a>,
}

#[derive(Serialize)]
struct TrackProperties<'a> {
    mmsi:              String,
    ferry_name:        &'a str,
    route:             &'a str,
    segment:           String,
    direction:         &'static str,
    destination:       &'a str,
    timestamp_second:  u32,
    heading:           Box<RawValue>,
    speed_mps:         Box<RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eta_next_stop_sec: Option<u32>,
    #[serde(flatten)]
    hull:              Option<HullProperties>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HullProperties {
    draught:                Box<RawValue>,
    dimension_to_bow:       u16,
    dimension_to_stern:     u16,
    dimension_to_port:      u16,
    dimension_to_starboard: u16,
}

impl HullProperties {
    fn new(profile: &VesselProfile) -> TelemetryResult<Self> {
        let d = profile.dimensions;
        Ok(Self {
            draught:                fixed(profile.draught_m, 1)?,
            dimension_to_bow:       d.to_bow,
            dimension_to_stern:     d.to_stern,
            dimension_to_port:      d.to_port,
            dimension_to_starboard: d.to_starboard,
        })
    }
}

/// Encode `view` as a track-update JSON document.
pub fn encode_track_update(view: &SampleView<'_>) -> TelemetryResult<String> {
    let sample = view.sample;
    let mmsi = view.vessel.mmsi.to_string();

    let update = TrackUpdate {
        action:   "PUT",
        geometry: Point::new(sample.coord)?,
        id:       mmsi.clone(),
        properties: TrackProperties {
            mmsi,
            ferry_name:        &view.vessel.name,
            route:             view.route_name(),
            segment:           view.segment(),
            direction:         sample.direction.as_str(),
            destination:       view.destination(),
            timestamp_second:  view.second_of_day(),
            heading:           fixed(sample.heading_deg, 1)?,
            speed_mps:         fixed(sample.speed_mps, 2)?,
            eta_next_stop_sec: view.eta_secs(),
            hull:              view.vessel.profile.as_ref().map(HullProperties::new).transpose()?,
        },
    };
    Ok(serde_json::to_string(&update)?)
}
