//! Strongly typed identifier wrappers.
//!
//! Index ids (`StopId`, `RouteId`, `VesselId`) are `Copy + Ord + Hash` and
//! index directly into the `Vec`s of the immutable network and fleet tables.
//! [`Mmsi`] is the vessel's external identity and is not an index.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a stop in the network's stop table.
    pub struct StopId(u32);
}

typed_id! {
    /// Index of a route in the network's route table.
    pub struct RouteId(u16);
}

typed_id! {
    /// Index of a vessel in the fleet registry.
    pub struct VesselId(u32);
}

// ── Mmsi ──────────────────────────────────────────────────────────────────────

/// Maritime Mobile Service Identity: the globally unique numeric identity a
/// vessel broadcasts.  Always at most nine decimal digits, so it fits the
/// 30-bit AIS user-id field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mmsi(u32);

impl Mmsi {
    pub const MAX: u32 = 999_999_999;

    pub fn new(value: u32) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::InvalidMmsi(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn into_inner(self) -> u32 {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.len() > 9 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidMmsi(s.to_owned()));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| CoreError::InvalidMmsi(s.to_owned()))
    }
}

impl From<Mmsi> for u32 {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}
