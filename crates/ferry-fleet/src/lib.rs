//! `ferry-fleet`: the static list of vessels and their departure schedules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`vessel`]   | `Vessel`, `VesselProfile`, `HullDimensions`, `ais_name`   |
//! | [`schedule`] | `DepartureSchedule`                                       |
//! | [`registry`] | `Fleet`, `FleetBuilder`, `VesselSpec`                     |
//! | [`loader`]   | `load_fleet_csv`, `load_fleet_reader`                     |
//! | [`nyc`]      | The built-in eight-vessel harbour fleet                   |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                            |
//!
//! A fleet is built once against an immutable
//! [`Network`][ferry_network::Network] and never changes afterwards.  Every
//! vessel's route is resolved to a `RouteId` at build time.

pub mod error;
pub mod loader;
pub mod nyc;
pub mod registry;
pub mod schedule;
pub mod vessel;


pub use error::{FleetError, FleetResult};
pub use loader::{load_fleet_csv, load_fleet_reader};
pub use registry::{Fleet, FleetBuilder, VesselSpec};
pub use schedule::DepartureSchedule;
pub use vessel::{HullDimensions, Vessel, VesselProfile, ais_name};
