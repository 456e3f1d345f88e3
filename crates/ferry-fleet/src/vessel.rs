//! Vessel identity and static profile.

use ferry_core::{Mmsi, RouteId, VesselId};

use crate::DepartureSchedule;

/// Longest vessel name an AIS static report can carry.
pub const AIS_NAME_LEN: usize = 20;

/// AIS ship type code for a passenger vessel.
pub const SHIP_TYPE_PASSENGER: u8 = 60;

/// AIS electronic position fixing device code for GPS.
pub const EPFD_GPS: u8 = 1;

/// Distances in metres from the position reference point to the hull edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HullDimensions {
    pub to_bow:       u16,
    pub to_stern:     u16,
    pub to_port:      u16,
    pub to_starboard: u16,
}

impl HullDimensions {
    pub fn length_m(&self) -> u16 {
        self.to_bow + self.to_stern
    }

    pub fn beam_m(&self) -> u16 {
        self.to_port + self.to_starboard
    }
}

/// Static data broadcast in AIS static/voyage reports.
#[derive(Clone, Debug, PartialEq)]
pub struct VesselProfile {
    pub call_sign:  String,
    /// Draught in metres.
    pub draught_m:  f64,
    pub dimensions: HullDimensions,
    pub ship_type:  u8,
    pub epfd:       u8,
}

impl VesselProfile {
    /// A passenger-vessel profile with a GPS position fix.
    pub fn passenger(call_sign: &str, draught_m: f64, dimensions: HullDimensions) -> Self {
        Self {
            call_sign: call_sign.trim().to_uppercase(),
            draught_m,
            dimensions,
            ship_type: SHIP_TYPE_PASSENGER,
            epfd: EPFD_GPS,
        }
    }
}

/// One vessel of the fleet.  Read-only for the lifetime of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct Vessel {
    pub id:       VesselId,
    /// AIS-normalized name (see [`ais_name`]).
    pub name:     String,
    pub mmsi:     Mmsi,
    pub route:    RouteId,
    pub profile:  Option<VesselProfile>,
    pub schedule: DepartureSchedule,
}

/// Trim, upper-case, and truncate `name` to [`AIS_NAME_LEN`] characters.
pub fn ais_name(name: &str) -> String {
    name.trim().to_uppercase().chars().take(AIS_NAME_LEN).collect()
}
