//! Shared JSON building blocks.
//!
//! Numbers that must carry a fixed number of decimals are written as raw
//! JSON fragments formatted by Rust's `{:.N}`, which never depends on the
//! host locale.

use serde::Serialize;
use serde_json::value::RawValue;

use ferry_core::Coordinate;

use crate::TelemetryResult;

/// `value` rendered with exactly `places` decimals.  Fails for NaN and
/// infinities, which have no JSON representation.
pub(crate) fn fixed(value: f64, places: usize) -> TelemetryResult<Box<RawValue>> {
    Ok(RawValue::from_string(format!("{value:.places$}"))?)
}

/// GeoJSON point geometry with six-decimal `[lon, lat]`.
#[derive(Serialize)]
pub(crate) struct Point {
    #[serde(rename = "type")]
    kind:        &'static str,
    coordinates: [Box<RawValue>; 2],
}

impl Point {
    pub(crate) fn new(coord: Coordinate) -> TelemetryResult<Self> {
        Ok(Self {
            kind:        "Point",
            coordinates: [fixed(coord.lon, 6)?, fixed(coord.lat, 6)?],
        })
    }
}
