//! Geographic coordinate type and great-circle helpers.
//!
//! `Coordinate` stores WGS-84 degrees as `f64`.  Ferry legs are a few
//! kilometres long, so the planar interpolation in [`Coordinate::interpolate`]
//! stays within a few metres of the true geodesic.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric: `a.distance_m(b) == b.distance_m(a)`.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Initial bearing (forward azimuth) from `self` to `other`, in degrees
    /// within `[0, 360)`.
    ///
    /// Returns `0.0` when both points coincide.
    pub fn bearing_deg(self, other: Coordinate) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        normalize_deg(y.atan2(x).to_degrees())
    }

    /// Linear interpolation in (lon, lat) space.
    ///
    /// `t` is clamped to `[0, 1]`, so `t = 0` yields `self` and `t = 1`
    /// yields `other` exactly.
    pub fn interpolate(self, other: Coordinate, t: f64) -> Coordinate {
        let t = t.clamp(0.0, 1.0);
        if t == 1.0 {
            return other;
        }
        Coordinate {
            lon: self.lon + t * (other.lon - self.lon),
            lat: self.lat + t * (other.lat - self.lat),
        }
    }
}

/// Fold any angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    (deg + 360.0).rem_euclid(360.0)
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
