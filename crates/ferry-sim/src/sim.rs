//! The `Sim` struct and its tick loop.

use tracing::{debug, info, instrument, warn};

use ferry_core::{SimClock, SimConfig, SimSecond};
use ferry_engine::PositionSample;
use ferry_fleet::Fleet;
use ferry_network::Network;
use ferry_telemetry::{PublishSink, SampleView, TelemetryEncoder};

use crate::{SimError, SimObserver, SimResult};

// ── Counters ──────────────────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Vessels that produced a position.
    pub positioned:       usize,
    /// Messages accepted by the sink.
    pub published:        usize,
    /// Messages the sink rejected.
    pub publish_failures: usize,
    /// Samples that could not be encoded.
    pub encode_failures:  usize,
}

/// Running totals since the simulation was built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks:            u64,
    pub samples:          u64,
    pub published:        u64,
    pub publish_failures: u64,
    pub encode_failures:  u64,
}

impl SimStats {
    fn record(&mut self, report: &TickReport) {
        self.ticks            += 1;
        self.samples          += report.positioned as u64;
        self.published        += report.published as u64;
        self.publish_failures += report.publish_failures as u64;
        self.encode_failures  += report.encode_failures as u64;
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick:
///
/// 1. **Positions** (optionally parallel with the `parallel` feature):
///    every vessel is evaluated from scratch at the current second.
/// 2. **Encode + publish** (sequential, fleet order): each sample is encoded
///    in the configured format and every resulting message is handed to the
///    sink.  Sink and encoder failures are logged and counted; they never
///    stop the loop.
/// 3. The clock advances by one simulated second.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: PublishSink> {
    /// Start second, tick bound, seed, epoch date.
    pub config: SimConfig,

    /// Simulation clock: the absolute second being processed.
    pub clock: SimClock,

    /// Stops, routes, and durations.  Never mutated after build.
    pub network: Network,

    /// Vessels and schedules.  Never mutated after build.
    pub fleet: Fleet,

    /// Format selection, topics, and the per-vessel static-report cadences.
    pub encoder: TelemetryEncoder,

    /// Where messages go.
    pub sink: S,

    /// Totals since build.
    pub stats: SimStats,
}

impl<S: PublishSink> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current second until `config.end_second()`, then flush
    /// the sink.
    ///
    /// Returns [`SimError::Unbounded`] when the config has no tick bound;
    /// drive open-ended runs with [`step`](Self::step) instead.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_second().ok_or(SimError::Unbounded)?;
        info!(
            vessels = self.fleet.len(),
            format = %self.encoder.format(),
            start = %self.clock,
            ticks = end.0.saturating_sub(self.clock.current.0),
            "simulation starting"
        );
        while self.clock.current < end {
            self.step(observer);
        }
        self.finish(observer)
    }

    /// Run exactly `n` ticks from the current position (ignores the tick
    /// bound and does not flush the sink).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Process the current second and advance the clock by one.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.clock.current;
        observer.on_tick_start(now);
        let report = self.process_tick(now, observer);
        self.stats.record(&report);
        observer.on_tick_end(now, &report);
        self.clock.advance();
        report
    }

    /// Flush the sink and fire `on_sim_end`.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.sink.finish()?;
        let last = SimSecond(self.clock.current.0.saturating_sub(1));
        info!(
            ticks = self.stats.ticks,
            published = self.stats.published,
            publish_failures = self.stats.publish_failures,
            "simulation finished"
        );
        observer.on_sim_end(last, &self.stats);
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    #[instrument(skip_all, fields(second = now.0))]
    fn process_tick<O: SimObserver>(&mut self, now: SimSecond, observer: &mut O) -> TickReport {
        // ── Phase 1: positions ────────────────────────────────────────────
        let samples = self.compute_positions(now);
        let mut report = TickReport { positioned: samples.len(), ..TickReport::default() };

        // ── Phase 2: encode + publish, fleet order ────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let network = &self.network;
        let fleet   = &self.fleet;
        let clock   = &self.clock;
        let encoder = &mut self.encoder;
        let sink    = &mut self.sink;

        for sample in &samples {
            let vessel = fleet.vessel(sample.vessel);
            let view = SampleView::new(network, vessel, sample);

            let messages = match encoder.encode(&view, clock) {
                Ok(m) => m,
                Err(e) => {
                    warn!(vessel = %vessel.name, error = %e, "encoding failed; sample dropped");
                    report.encode_failures += 1;
                    continue;
                }
            };

            for msg in &messages {
                match sink.publish(&msg.topic, &msg.payload) {
                    Ok(()) => {
                        debug!(topic = %msg.topic, "published");
                        report.published += 1;
                    }
                    Err(e) => {
                        warn!(sink = sink.name(), topic = %msg.topic, error = %e, "publish failed");
                        report.publish_failures += 1;
                    }
                }
            }
            observer.on_sample(sample, &messages);
        }

        report
    }

    /// Positions of every vessel under way at `now`, in fleet order.
    ///
    /// With the `parallel` Cargo feature the per-vessel evaluations run on
    /// Rayon's thread pool; the result order is the same either way.
    fn compute_positions(&self, now: SimSecond) -> Vec<PositionSample> {
        #[cfg(not(feature = "parallel"))]
        {
            ferry_engine::PositionEngine::new(&self.network, &self.fleet).positions(now)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let network = &self.network;
            self.fleet
                .vessels()
                .par_iter()
                .filter_map(|v| ferry_engine::position_of(network, v, now))
                .collect()
        }
    }
}
