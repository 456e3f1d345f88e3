//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `ferry-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid MMSI {0:?}: expected a numeric identity of at most 9 digits")]
    InvalidMmsi(String),
}

/// Shorthand result type for `ferry-core`.
pub type CoreResult<T> = Result<T, CoreError>;
