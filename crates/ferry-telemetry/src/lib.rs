//! `ferry-telemetry`: wire encodings and publish sinks.
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`view`]      | `SampleView` - a sample plus the tables that label it        |
//! | [`track`]     | JSON track-update (`PUT`) encoder                            |
//! | [`geojson`]   | GeoJSON `Feature` encoder                                    |
//! | [`ais`]       | Type 1 / type 5 AIS reports, six-bit codec, `!AIVDM` framing |
//! | [`cadence`]   | `StaticReportCadence` - when a static report is due          |
//! | [`format`]    | `Format`, `TelemetryEncoder`, `Message`                      |
//! | [`sink`]      | `PublishSink` trait, `LogSink`, `LineSink`, `MemorySink`     |
//! | [`csv`]       | `CsvSink`                                                    |
//! | [`error`]     | `TelemetryError`, `TelemetryResult`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut encoder = TelemetryEncoder::new(Format::Ais, DEFAULT_BASE_TOPIC, seed, fleet.len());
//! let view = SampleView::new(&network, fleet.vessel(sample.vessel), &sample);
//! for msg in encoder.encode(&view, &clock)? {
//!     sink.publish(&msg.topic, &msg.payload)?;
//! }
//! ```
//!
//! All numeric formatting goes through Rust's formatter, so output never
//! depends on the host locale.

pub mod ais;
pub mod cadence;
pub mod csv;
pub mod error;
pub mod format;
pub mod geojson;
mod json;
pub mod sink;
pub mod track;
pub mod view;


pub use cadence::StaticReportCadence;
pub use self::csv::CsvSink;
pub use error::{TelemetryError, TelemetryResult};
pub use format::{DEFAULT_BASE_TOPIC, Format, Message, TelemetryEncoder};
pub use geojson::encode_geojson;
pub use sink::{LineSink, LogSink, MemorySink, PublishSink};
pub use track::encode_track_update;
pub use view::SampleView;
