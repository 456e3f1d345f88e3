//! nyc: live ferry telemetry for the New York harbour.
//!
//! Drives the built-in harbour network and fleet (or a CSV network directory)
//! one simulated second per tick, publishing every sample through the chosen
//! sink.  Ticks are paced by a wall-clock interval unless `--fast` is given.
//!
//! ```text
//! nyc --format ais --sink stdout --ticks 600
//! FERRY_SIM__TICK_INTERVAL=100ms nyc --config config/ferry-sim.yaml
//! RUST_LOG=debug nyc --fast --ticks 3600 --sink csv --output-dir out
//! ```

mod settings;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ferry_core::SimSecond;
use ferry_fleet::{Fleet, load_fleet_csv};
use ferry_network::{Network, load_network_dir};
use ferry_sim::{Sim, SimBuilder, SimObserver, SimStats, TickReport};
use ferry_telemetry::{CsvSink, Format, LineSink, LogSink, PublishSink};

use settings::{Settings, SinkKind};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Ticks between progress log lines.
const PROGRESS_EVERY_TICKS: u64 = 300;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "nyc", version, about = "Synthesize ferry telemetry from schedules")]
struct Cli {
    /// YAML settings file.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Payload encoding: track, ais, or geojson.
    #[arg(long)]
    format: Option<Format>,

    /// Topic prefix; each vessel publishes to `<base>/<mmsi>`.
    #[arg(long)]
    base_topic: Option<String>,

    #[arg(long, value_enum)]
    sink: Option<SinkKind>,

    /// Directory for file sinks.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Load the network and fleet from CSV files in this directory.
    #[arg(long)]
    network_dir: Option<PathBuf>,

    /// Wall-clock time between ticks, e.g. `1s` or `250ms`.
    #[arg(long, value_parser = parse_interval)]
    tick_interval: Option<Duration>,

    /// Absolute second of the first tick.
    #[arg(long)]
    start_second: Option<u64>,

    /// Number of ticks to run.  Runs until interrupted when omitted.
    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Run ticks back to back instead of pacing them.  Requires `--ticks`.
    #[arg(long)]
    fast: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(topic) = &self.base_topic {
            settings.base_topic = topic.clone();
        }
        if let Some(sink) = self.sink {
            settings.sink = sink;
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(dir) = &self.network_dir {
            settings.network_dir = Some(dir.clone());
        }
        if let Some(interval) = self.tick_interval {
            settings.tick_interval = interval;
        }
        if let Some(start) = self.start_second {
            settings.start_second = start;
        }
        if self.ticks.is_some() {
            settings.total_ticks = self.ticks;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn parse_interval(s: &str) -> Result<Duration, humantime_serde::re::humantime::DurationError> {
    humantime_serde::re::humantime::parse_duration(s)
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressLogger {
    every: u64,
    ticks: u64,
}

impl SimObserver for ProgressLogger {
    fn on_tick_end(&mut self, now: SimSecond, report: &TickReport) {
        self.ticks += 1;
        if self.ticks % self.every == 0 {
            info!(
                time = %now,
                under_way = report.positioned,
                published = report.published,
                "progress"
            );
        }
    }

    fn on_sim_end(&mut self, last: SimSecond, stats: &SimStats) {
        let per_tick = stats.samples as f64 / stats.ticks.max(1) as f64;
        info!(
            last = %last,
            samples = stats.samples,
            per_tick = %format!("{per_tick:.1}"),
            encode_failures = stats.encode_failures,
            "run summary"
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the stdout sink stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    cli.apply(&mut settings);

    let (network, fleet) = load_world(&settings)?;
    info!(
        stops = network.stop_count(),
        routes = network.route_count(),
        durations = network.duration_count(),
        vessels = fleet.len(),
        "network loaded"
    );
    for vessel in &fleet {
        let hull = vessel
            .profile
            .as_ref()
            .map(|p| (p.dimensions.length_m(), p.dimensions.beam_m()));
        debug!(
            vessel = %vessel.name,
            mmsi = %vessel.mmsi,
            route = %network.route(vessel.route).name,
            departures = vessel.schedule.len(),
            hull_m = ?hull,
            "vessel registered"
        );
    }

    let config = settings.sim_config();
    info!(seed = config.seed, epoch_date = %config.epoch_date, "run configuration");

    let sink = open_sink(&settings)?;
    let mut sim = SimBuilder::new(config, network, fleet, sink)
        .format(settings.format)
        .base_topic(settings.base_topic.clone())
        .build()?;

    let mut progress = ProgressLogger { every: PROGRESS_EVERY_TICKS, ticks: 0 };
    if cli.fast {
        sim.run(&mut progress)?;
    } else {
        run_paced(&mut sim, settings.tick_interval, &mut progress).await?;
    }
    Ok(())
}

fn load_world(settings: &Settings) -> Result<(Network, Fleet)> {
    match &settings.network_dir {
        Some(dir) => {
            let network = load_network_dir(dir)
                .with_context(|| format!("loading network from {}", dir.display()))?;
            let fleet_path = dir.join("fleet.csv");
            let fleet = load_fleet_csv(&fleet_path, &network)
                .with_context(|| format!("loading fleet from {}", fleet_path.display()))?;
            Ok((network, fleet))
        }
        None => {
            let network = ferry_network::nyc::network()?;
            let fleet = ferry_fleet::nyc::fleet(&network)?;
            Ok((network, fleet))
        }
    }
}

fn open_sink(settings: &Settings) -> Result<Box<dyn PublishSink>> {
    Ok(match settings.sink {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Stdout => Box::new(LineSink::stdout()),
        SinkKind::Csv => {
            std::fs::create_dir_all(&settings.output_dir)
                .with_context(|| format!("creating {}", settings.output_dir.display()))?;
            Box::new(CsvSink::new(&settings.output_dir)?)
        }
    })
}

/// One tick per `every` of wall-clock time until the run bound or Ctrl-C.
async fn run_paced<S, O>(sim: &mut Sim<S>, every: Duration, observer: &mut O) -> Result<()>
where
    S: PublishSink,
    O: SimObserver,
{
    let end = sim.config.end_second();
    info!(
        vessels = sim.fleet.len(),
        format = %sim.encoder.format(),
        start = %sim.clock,
        every = ?every,
        "paced run starting"
    );
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if end.is_some_and(|end| sim.clock.current >= end) {
                    break;
                }
                sim.step(observer);
            }
            _ = &mut shutdown => {
                info!(time = %sim.clock.current, ticks = sim.clock.elapsed_ticks(), "interrupted");
                break;
            }
        }
    }

    sim.finish(observer)?;
    Ok(())
}
