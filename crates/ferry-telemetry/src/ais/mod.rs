//! AIS encoders: position reports every tick, static/voyage reports on a
//! per-vessel cadence (see [`crate::cadence`]).
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`bits`]     | `BitWriter`: six-bit packing and armoring         |
//! | [`sentence`] | `!AIVDM` framing, checksum, `SequenceId`          |
//! | [`position`] | Type 1 `PositionReport`                           |
//! | [`voyage`]   | Type 5 `StaticVoyageReport`, `AisEta`             |

pub mod bits;
pub mod position;
pub mod sentence;
pub mod voyage;

use chrono::NaiveDateTime;

pub use bits::BitWriter;
pub use position::{KNOTS_PER_MPS, PositionReport};
pub use sentence::{SequenceId, checksum, frame};
pub use voyage::{AisEta, StaticVoyageReport};

use crate::SampleView;

/// Encode a type 1 position report.  At 168 bits it always fits one
/// sentence.
pub fn encode_position_report(view: &SampleView<'_>) -> Vec<String> {
    let report = PositionReport::from_sample(view.vessel.mmsi, view.sample);
    let (payload, fill) = report.to_bits().armor();
    frame(&payload, fill, 0)
}

/// Encode a type 5 static/voyage report as `!AIVDM` sentences.
///
/// `eta_at` is the calendar time of arrival at the trip's terminal stop;
/// `None` encodes the "not available" sentinel.  Vessels without a static
/// profile have nothing to report and yield no sentences.
pub fn encode_static_report(
    view:   &SampleView<'_>,
    eta_at: Option<NaiveDateTime>,
    seq_id: u8,
) -> Vec<String> {
    let Some(profile) = view.vessel.profile.as_ref() else {
        return Vec::new();
    };
    let report = StaticVoyageReport::new(view.vessel, profile, view.destination(), eta_at.into());
    let (payload, fill) = report.to_bits().armor();
    frame(&payload, fill, seq_id)
}
