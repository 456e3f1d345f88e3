use thiserror::Error;

use ferry_core::{CoreError, Mmsi};
use ferry_network::NetworkError;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("vessel {name:?} references unknown route {route:?}")]
    UnknownRoute { name: String, route: String },

    #[error("MMSI {0} is assigned to more than one vessel")]
    DuplicateIdentity(Mmsi),

    #[error("vessel {0:?} has an empty departure schedule")]
    EmptySchedule(String),

    #[error("vessel with MMSI {0} has an empty name")]
    EmptyName(Mmsi),

    #[error("invalid identity: {0}")]
    InvalidIdentity(#[from] CoreError),

    #[error("fleet parse error: {0}")]
    Parse(String),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
