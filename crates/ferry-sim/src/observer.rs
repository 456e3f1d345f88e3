//! Simulation observer trait for progress reporting and data collection.

use ferry_core::SimSecond;
use ferry_engine::PositionSample;
use ferry_telemetry::Message;

use crate::{SimStats, TickReport};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, now: SimSecond, report: &TickReport) {
///         if now.0 % self.interval == 0 {
///             println!("{now}: {} vessels under way", report.positioned);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any positions are
    /// computed.
    fn on_tick_start(&mut self, _now: SimSecond) {}

    /// Called once per vessel under way, after its messages were handed to
    /// the sink.
    fn on_sample(&mut self, _sample: &PositionSample, _messages: &[Message]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _now: SimSecond, _report: &TickReport) {}

    /// Called once after the final tick, when the sink has been flushed.
    fn on_sim_end(&mut self, _last: SimSecond, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
