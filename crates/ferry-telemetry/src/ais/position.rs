//! AIS message type 1: Class A position report (168 bits).

use ferry_core::Mmsi;
use ferry_engine::PositionSample;

use super::BitWriter;

/// Knots per metre per second.
pub const KNOTS_PER_MPS: f64 = 1.943_84;

/// Navigation status 0, under way using engine.
pub const NAV_UNDER_WAY_USING_ENGINE: u8 = 0;

/// Rate of turn "no information available".
const ROT_NOT_AVAILABLE: i64 = -128;

/// Largest encodable speed over ground, in tenths of a knot (102.2 kn).
const SOG_MAX_TENTHS: u64 = 1_022;

/// Decoded field values of one type 1 report.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionReport {
    pub mmsi:        Mmsi,
    pub nav_status:  u8,
    /// Speed over ground in knots.
    pub sog_knots:   f64,
    pub lon:         f64,
    pub lat:         f64,
    /// Course over ground in degrees.
    pub cog_deg:     f64,
    /// True heading, whole degrees `0..360`.
    pub heading_deg: u16,
    /// UTC second of the fix, `0..60`.
    pub timestamp:   u8,
}

impl PositionReport {
    pub fn from_sample(mmsi: Mmsi, sample: &PositionSample) -> Self {
        Self {
            mmsi,
            nav_status:  NAV_UNDER_WAY_USING_ENGINE,
            sog_knots:   sample.speed_mps * KNOTS_PER_MPS,
            lon:         sample.coord.lon,
            lat:         sample.coord.lat,
            cog_deg:     sample.heading_deg,
            heading_deg: (sample.heading_deg.round() as u16) % 360,
            timestamp:   (sample.at.second_of_day() % 60) as u8,
        }
    }

    /// Speed field value: tenths of a knot, saturating at 102.2 kn.
    pub fn sog_tenths(&self) -> u64 {
        ((self.sog_knots * 10.0).round().max(0.0) as u64).min(SOG_MAX_TENTHS)
    }

    /// Course field value: tenths of a degree, `0..3600`.
    pub fn cog_tenths(&self) -> u64 {
        ((self.cog_deg * 10.0).round() as u64) % 3_600
    }

    pub fn to_bits(&self) -> BitWriter {
        let mut w = BitWriter::new();
        w.put_u(1, 6)                                           // message type
            .put_u(0, 2)                                        // repeat indicator
            .put_u(u64::from(self.mmsi.into_inner()), 30)
            .put_u(u64::from(self.nav_status), 4)
            .put_i(ROT_NOT_AVAILABLE, 8)
            .put_u(self.sog_tenths(), 10)
            .put_u(0, 1)                                        // position accuracy
            .put_i(to_ais_minutes(self.lon), 28)
            .put_i(to_ais_minutes(self.lat), 27)
            .put_u(self.cog_tenths(), 12)
            .put_u(u64::from(self.heading_deg), 9)
            .put_u(u64::from(self.timestamp), 6)
            .put_u(0, 2)                                        // manoeuvre indicator
            .put_u(0, 3)                                        // spare
            .put_u(0, 1)                                        // RAIM
            .put_u(0, 19);                                      // radio status
        w
    }
}

/// Degrees to the 1/10 000 minute units used by AIS position fields.
fn to_ais_minutes(deg: f64) -> i64 {
    (deg * 600_000.0).round() as i64
}
