//! `ferry-core`: foundational types for the `ferry_sim` telemetry simulator.
//!
//! This crate is a dependency of every other `ferry-*` crate.  It has no
//! `ferry-*` dependencies and only a handful of external ones (`rand`,
//! `chrono`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `StopId`, `RouteId`, `VesselId`, `Mmsi`                 |
//! | [`geo`]       | `Coordinate`, haversine distance, bearing, interpolation |
//! | [`time`]      | `SimSecond`, `SimClock`, `SimConfig`                    |
//! | [`rng`]       | `VesselRng` (per-vessel deterministic RNG)              |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::{Mmsi, RouteId, StopId, VesselId};
pub use rng::VesselRng;
pub use time::{SECONDS_PER_DAY, SimClock, SimConfig, SimSecond};
