//! `ferry-sim`: tick loop orchestrator for the ferry_sim telemetry simulator.
//!
//! # Tick loop
//!
//! ```text
//! while clock.current < config.end_second():
//!   ① Positions  PositionEngine evaluates every vessel at the current
//!                second (parallel with the `parallel` feature).
//!   ② Publish    for each sample in fleet order:
//!                  TelemetryEncoder::encode → Vec<Message>
//!                  PublishSink::publish for each message
//!                failures are logged with `warn!` and counted.
//!   ③ Advance    clock.current += 1.
//! ```
//!
//! The loop owns the only mutable state (clock, static-report cadences,
//! counters); the network and fleet are read-only after build.  Stopping
//! between two `step` calls leaves nothing half-done.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes positions on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ferry_sim::{NoopObserver, SimBuilder};
//! use ferry_telemetry::{Format, LogSink};
//!
//! let network = ferry_network::nyc::network()?;
//! let fleet = ferry_fleet::nyc::fleet(&network)?;
//! let mut sim = SimBuilder::new(config, network, fleet, LogSink)
//!     .format(Format::Track)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimStats, TickReport};
