//! Format selection and the per-run encoding stage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ferry_core::{Mmsi, SimClock, VesselId};

use crate::ais::{SequenceId, encode_position_report, encode_static_report};
use crate::cadence::StaticReportCadence;
use crate::{SampleView, TelemetryError, TelemetryResult, encode_geojson, encode_track_update};

/// Base topic used when none is configured.
pub const DEFAULT_BASE_TOPIC: &str = "producers/ferries/data";

/// Wire format for published telemetry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON track-update `PUT` records.
    #[default]
    Track,
    /// `!AIVDM` sentences: position every tick, static/voyage on a cadence.
    Ais,
    /// GeoJSON `Feature` documents.
    GeoJson,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Track   => "track",
            Format::Ais     => "ais",
            Format::GeoJson => "geojson",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track"   => Ok(Format::Track),
            "ais"     => Ok(Format::Ais),
            "geojson" => Ok(Format::GeoJson),
            _         => Err(TelemetryError::UnknownFormat(s.to_owned())),
        }
    }
}

/// One payload bound for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub topic:   String,
    pub payload: String,
}

/// Turns position samples into publishable messages in the selected format.
///
/// Owns the only mutable encoding state: one [`StaticReportCadence`] per
/// vessel and the multi-part sequence id.  Both are touched only when the
/// format is [`Format::Ais`].
#[derive(Clone, Debug)]
pub struct TelemetryEncoder {
    format:     Format,
    base_topic: String,
    cadences:   Vec<StaticReportCadence>,
    seq:        SequenceId,
}

impl TelemetryEncoder {
    /// `vessel_count` cadences are seeded from `seed`, one per [`VesselId`].
    pub fn new(format: Format, base_topic: impl Into<String>, seed: u64, vessel_count: usize) -> Self {
        let cadences = (0..vessel_count)
            .map(|i| StaticReportCadence::new(seed, VesselId(i as u32)))
            .collect();
        Self {
            format,
            base_topic: base_topic.into().trim_end_matches('/').to_owned(),
            cadences,
            seq: SequenceId::default(),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn base_topic(&self) -> &str {
        &self.base_topic
    }

    /// `<base_topic>/<mmsi>`.
    pub fn topic(&self, mmsi: Mmsi) -> String {
        format!("{}/{}", self.base_topic, mmsi)
    }

    pub fn cadence(&self, vessel: VesselId) -> &StaticReportCadence {
        &self.cadences[vessel.index()]
    }

    /// Encode one sample.  AIS may yield several messages (all sentences of
    /// the position report, then those of a due static report); the other
    /// formats yield exactly one.  Vessels without a static profile never
    /// send a static report and never consume a sequence id.
    pub fn encode(&mut self, view: &SampleView<'_>, clock: &SimClock) -> TelemetryResult<Vec<Message>> {
        let topic = self.topic(view.vessel.mmsi);
        let payloads = match self.format {
            Format::Track   => vec![encode_track_update(view)?],
            Format::GeoJson => vec![encode_geojson(view)?],
            Format::Ais     => self.encode_ais(view, clock),
        };
        Ok(payloads
            .into_iter()
            .map(|payload| Message { topic: topic.clone(), payload })
            .collect())
    }

    fn encode_ais(&mut self, view: &SampleView<'_>, clock: &SimClock) -> Vec<String> {
        let mut sentences = encode_position_report(view);

        let due = self.cadences[view.vessel.id.index()].record_position();
        if due && view.vessel.profile.is_some() {
            let eta_at = view
                .eta_secs()
                .map(|eta| clock.date_time_at(view.sample.at, u64::from(eta)));
            let seq_id = self.seq.next_id();
            sentences.extend(encode_static_report(view, eta_at, seq_id));
        }
        sentences
    }
}
