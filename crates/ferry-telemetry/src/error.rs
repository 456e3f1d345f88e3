//! Error types for ferry-telemetry.

use thiserror::Error;

/// Errors raised while encoding or publishing telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown telemetry format {0:?} (expected track, ais, or geojson)")]
    UnknownFormat(String),

    #[error("sink {sink} rejected message for {topic}: {reason}")]
    Rejected { sink: &'static str, topic: String, reason: String },
}

/// Alias for `Result<T, TelemetryError>`.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
