use ferry_core::RouteId;
use ferry_telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("vessel {vessel} uses {route} but the network has only {routes} routes")]
    RouteOutOfRange {
        vessel: String,
        route:  RouteId,
        routes: usize,
    },

    #[error("run() needs a bounded tick count; use step() or run_ticks() for open-ended runs")]
    Unbounded,

    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
}

pub type SimResult<T> = Result<T, SimError>;
