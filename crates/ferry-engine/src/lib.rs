//! `ferry-engine`: where is each vessel, and when will it get there.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`sample`] | `PositionSample`, `Direction` - one vessel at one second       |
//! | [`engine`] | `PositionEngine` - schedule lookup + leg interpolation         |
//! | [`eta`]    | `eta_secs`, `destination` - remaining time and trip terminal   |
//!
//! # Movement model
//!
//! Positions are recomputed from scratch every second; nothing is carried
//! between ticks.  For a vessel and an absolute simulated second the engine:
//!
//! 1. scans the departure offsets in schedule order, each as today's and as
//!    yesterday's departure, and picks the first trip whose window
//!    `[d, d + round_trip]` contains the second (both ends inclusive);
//! 2. walks the forward legs while `elapsed <= forward_secs`, otherwise the
//!    backward legs with `elapsed - forward_secs`;
//! 3. interpolates linearly inside the leg and reports the leg's initial
//!    bearing and mean speed.
//!
//! A vessel with no trip in progress yields `None`.

pub mod engine;
pub mod eta;
pub mod sample;

#[cfg(test)]
mod tests;

pub use engine::{PositionEngine, position_of};
pub use eta::{destination, eta_secs};
pub use sample::{Direction, PositionSample};
