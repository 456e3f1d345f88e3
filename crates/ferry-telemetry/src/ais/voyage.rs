//! AIS message type 5: static and voyage related data (424 bits).

use chrono::{Datelike, NaiveDateTime, Timelike};

use ferry_core::Mmsi;
use ferry_fleet::{HullDimensions, Vessel, VesselProfile};

use super::BitWriter;

/// ETA fields broken out as AIS transmits them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AisEta {
    pub month:  u8,
    pub day:    u8,
    pub hour:   u8,
    pub minute: u8,
}

impl AisEta {
    /// "Not available": month 0, day 0, hour 24, minute 60.
    pub const UNAVAILABLE: AisEta = AisEta { month: 0, day: 0, hour: 24, minute: 60 };

    pub fn from_date_time(at: NaiveDateTime) -> Self {
        Self {
            month:  at.month() as u8,
            day:    at.day() as u8,
            hour:   at.hour() as u8,
            minute: at.minute() as u8,
        }
    }
}

impl From<Option<NaiveDateTime>> for AisEta {
    fn from(at: Option<NaiveDateTime>) -> Self {
        at.map_or(AisEta::UNAVAILABLE, AisEta::from_date_time)
    }
}

/// Decoded field values of one type 5 report.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticVoyageReport {
    pub mmsi:        Mmsi,
    pub call_sign:   String,
    pub name:        String,
    pub ship_type:   u8,
    pub dimensions:  HullDimensions,
    pub epfd:        u8,
    pub eta:         AisEta,
    /// Draught in metres.
    pub draught_m:   f64,
    pub destination: String,
}

impl StaticVoyageReport {
    pub fn new(vessel: &Vessel, profile: &VesselProfile, destination: &str, eta: AisEta) -> Self {
        Self {
            mmsi:        vessel.mmsi,
            call_sign:   profile.call_sign.clone(),
            name:        vessel.name.clone(),
            ship_type:   profile.ship_type,
            dimensions:  profile.dimensions,
            epfd:        profile.epfd,
            eta,
            draught_m:   profile.draught_m,
            destination: destination.to_owned(),
        }
    }

    /// Draught field value: tenths of a metre, saturating at 25.5 m.
    pub fn draught_tenths(&self) -> u64 {
        ((self.draught_m * 10.0).round().max(0.0) as u64).min(255)
    }

    pub fn to_bits(&self) -> BitWriter {
        let d = self.dimensions;
        let mut w = BitWriter::new();
        w.put_u(5, 6)                                           // message type
            .put_u(0, 2)                                        // repeat indicator
            .put_u(u64::from(self.mmsi.into_inner()), 30)
            .put_u(0, 2)                                        // AIS version
            .put_u(0, 30)                                       // IMO number
            .put_text(&self.call_sign, 7)
            .put_text(&self.name, 20)
            .put_u(u64::from(self.ship_type), 8)
            .put_u(u64::from(d.to_bow.min(511)), 9)
            .put_u(u64::from(d.to_stern.min(511)), 9)
            .put_u(u64::from(d.to_port.min(63)), 6)
            .put_u(u64::from(d.to_starboard.min(63)), 6)
            .put_u(u64::from(self.epfd), 4)
            .put_u(u64::from(self.eta.month), 4)
            .put_u(u64::from(self.eta.day), 5)
            .put_u(u64::from(self.eta.hour), 5)
            .put_u(u64::from(self.eta.minute), 6)
            .put_u(self.draught_tenths(), 8)
            .put_text(&self.destination, 20)
            .put_u(0, 1)                                        // DTE
            .put_u(0, 1);                                       // spare
        w
    }
}
