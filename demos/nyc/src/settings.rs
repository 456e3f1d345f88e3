//! Layered run settings: built-in defaults, an optional YAML file, then
//! `FERRY_SIM__*` environment variables.  Command-line flags are applied on
//! top by `main`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use ferry_core::SimConfig;
use ferry_telemetry::{DEFAULT_BASE_TOPIC, Format};

/// Where published messages go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Structured log lines at `info`.
    #[default]
    Log,
    /// `topic payload` lines on stdout.
    Stdout,
    /// `telemetry.csv` under the output directory.
    Csv,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_topic:    String,
    pub format:        Format,
    pub sink:          SinkKind,
    pub output_dir:    PathBuf,
    /// Directory holding `stops.csv`, `durations.csv`, `routes.csv`, and
    /// `fleet.csv`.  The built-in harbour is used when unset.
    pub network_dir:   Option<PathBuf>,
    /// Wall-clock time between ticks.
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    pub start_second:  u64,
    pub total_ticks:   Option<u64>,
    pub seed:          Option<u64>,
    pub epoch_date:    Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_topic:    DEFAULT_BASE_TOPIC.to_owned(),
            format:        Format::default(),
            sink:          SinkKind::default(),
            output_dir:    PathBuf::from("output"),
            network_dir:   None,
            tick_interval: Duration::from_secs(1),
            start_second:  SimConfig::NOON,
            total_ticks:   None,
            seed:          None,
            epoch_date:    None,
        }
    }
}

impl Settings {
    /// Load settings from `file` (if given) and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix("FERRY_SIM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Resolve the run configuration.  A missing seed is drawn at random and
    /// a missing epoch date is today (UTC).
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            start_second: self.start_second,
            total_ticks:  self.total_ticks,
            seed:         self.seed.unwrap_or_else(rand::random),
            epoch_date:   self.epoch_date.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_sources() {
        let s = Settings::default();
        assert_eq!(s.base_topic, "producers/ferries/data");
        assert_eq!(s.format, Format::Track);
        assert_eq!(s.sink, SinkKind::Log);
        assert_eq!(s.start_second, 43_200);
        assert_eq!(s.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ferry-sim.yaml");
        std::fs::write(
            &path,
            "format: ais\nsink: csv\ntick_interval: 250ms\ntotal_ticks: 600\nseed: 7\nepoch_date: 2024-06-01\n",
        )
        .unwrap();

        let s = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(s.format, Format::Ais);
        assert_eq!(s.sink, SinkKind::Csv);
        assert_eq!(s.tick_interval, Duration::from_millis(250));
        assert_eq!(s.total_ticks, Some(600));
        assert_eq!(s.base_topic, "producers/ferries/data");

        let config = s.sim_config();
        assert_eq!(config.seed, 7);
        assert_eq!(config.epoch_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(config.start_second, 43_200);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(Settings::load(Some(dir.path().join("absent.yaml").as_path())).is_err());
    }
}
