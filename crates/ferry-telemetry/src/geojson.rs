//! GeoJSON `Feature` encoder, for map layers that consume plain GeoJSON.

use serde::Serialize;

use crate::json::Point;
use crate::{SampleView, TelemetryResult};

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind:       &'static str,
    geometry:   Point,
    properties: FeatureProperties<'a>,
}

#[derive(Serialize)]
struct FeatureProperties<'a> {
    ferry_name:       &'a str,
    route:            &'a str,
    segment:          String,
    direction:        &'static str,
    timestamp_second: u32,
    /// Simulated time of day, `HH:MM:SS`.
    time:             String,
}

/// Encode `view` as a GeoJSON `Feature` with a point geometry.
pub fn encode_geojson(view: &SampleView<'_>) -> TelemetryResult<String> {
    let sample = view.sample;
    let feature = Feature {
        kind:     "Feature",
        geometry: Point::new(sample.coord)?,
        properties: FeatureProperties {
            ferry_name:       &view.vessel.name,
            route:            view.route_name(),
            segment:          view.segment(),
            direction:        sample.direction.as_str(),
            timestamp_second: view.second_of_day(),
            time:             sample.at.to_string(),
        },
    };
    Ok(serde_json::to_string(&feature)?)
}
