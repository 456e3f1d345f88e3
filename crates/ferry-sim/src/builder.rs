//! Fluent builder for constructing a [`Sim`].

use ferry_core::SimConfig;
use ferry_fleet::Fleet;
use ferry_network::Network;
use ferry_telemetry::{DEFAULT_BASE_TOPIC, Format, PublishSink, TelemetryEncoder};

use crate::{Sim, SimError, SimResult, SimStats};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: start second, tick bound, seed, epoch date
/// - [`Network`] + [`Fleet`]: the fleet must have been built against this
///   network
/// - `S: PublishSink`: where messages go
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                     |
/// |--------------------|-----------------------------|
/// | `.format(f)`       | `Format::Track`             |
/// | `.base_topic(t)`   | `producers/ferries/data`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network, fleet, LogSink)
///     .format(Format::Ais)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: PublishSink> {
    config:     SimConfig,
    network:    Network,
    fleet:      Fleet,
    sink:       S,
    format:     Format,
    base_topic: String,
}

impl<S: PublishSink> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, network: Network, fleet: Fleet, sink: S) -> Self {
        Self {
            config,
            network,
            fleet,
            sink,
            format:     Format::default(),
            base_topic: DEFAULT_BASE_TOPIC.to_owned(),
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Topic prefix; messages go to `<base_topic>/<mmsi>`.
    pub fn base_topic(mut self, base_topic: impl Into<String>) -> Self {
        self.base_topic = base_topic.into();
        self
    }

    /// Validate inputs, seed the encoder, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        // ── Validate ──────────────────────────────────────────────────────
        if self.base_topic.trim_matches('/').trim().is_empty() {
            return Err(SimError::Config("base topic is empty".into()));
        }
        let routes = self.network.route_count();
        if let Some(v) = self.fleet.iter().find(|v| v.route.index() >= routes) {
            return Err(SimError::RouteOutOfRange {
                vessel: v.name.clone(),
                route:  v.route,
                routes,
            });
        }

        // ── Encoder with one cadence per vessel ───────────────────────────
        let encoder = TelemetryEncoder::new(
            self.format,
            self.base_topic,
            self.config.seed,
            self.fleet.len(),
        );

        Ok(Sim {
            clock:   self.config.make_clock(),
            config:  self.config,
            network: self.network,
            fleet:   self.fleet,
            encoder,
            sink:    self.sink,
            stats:   SimStats::default(),
        })
    }
}
