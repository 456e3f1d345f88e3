//! Network-subsystem error type.

use thiserror::Error;

use ferry_core::Coordinate;

/// Errors produced while building or loading a [`Network`][crate::Network].
///
/// Every variant is a configuration defect detected before the first tick.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("stop {0:?} is defined more than once")]
    DuplicateStop(String),

    #[error("stop {stop:?} has an out-of-range coordinate {coord}")]
    InvalidCoordinate { stop: String, coord: Coordinate },

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("route {0:?} is defined more than once")]
    DuplicateRoute(String),

    #[error("too many routes (limit {})", u16::MAX)]
    TooManyRoutes,

    #[error("route {0:?} needs at least two stops")]
    RouteTooShort(String),

    #[error("route {route:?} visits {stop:?} twice in a row")]
    RepeatedStop { route: String, stop: String },

    #[error("route {route:?} has no travel time from {from:?} to {to:?}")]
    MissingDuration { route: String, from: String, to: String },

    #[error("route {route:?} has a zero travel time from {from:?} to {to:?}")]
    ZeroDuration { route: String, from: String, to: String },

    #[error("route {0:?} has a round trip longer than {} seconds", u32::MAX)]
    DurationOverflow(String),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
