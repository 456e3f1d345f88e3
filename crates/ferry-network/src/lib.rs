//! `ferry-network`: stops, routes, and directed leg durations.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`network`] | `Network`, `NetworkBuilder`, `Route`, `Stop`, `Leg`        |
//! | [`loader`]  | `load_network_dir`, `load_network_readers` (CSV)           |
//! | [`nyc`]     | The built-in New York harbour network                      |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                         |
//!
//! Validation happens once in [`NetworkBuilder::build`]: every route's
//! consecutive stop pairs must have a non-zero duration in both directions.
//! The engine can therefore divide by a leg duration without checking.

pub mod error;
pub mod loader;
pub mod network;
pub mod nyc;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_dir, load_network_readers};
pub use network::{Leg, Network, NetworkBuilder, Route, Stop};
