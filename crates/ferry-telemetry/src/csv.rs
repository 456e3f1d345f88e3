//! CSV sink: one `topic,payload` row per message in `telemetry.csv`.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::{PublishSink, TelemetryResult};

/// File name created inside the output directory.
pub const FILE_NAME: &str = "telemetry.csv";

/// Appends every message to a CSV file.
pub struct CsvSink {
    writer:   Writer<File>,
    path:     PathBuf,
    finished: bool,
}

impl CsvSink {
    /// Create (or truncate) `telemetry.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> TelemetryResult<Self> {
        let path = dir.join(FILE_NAME);
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(["topic", "payload"])?;
        Ok(Self { writer, path, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PublishSink for CsvSink {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn publish(&mut self, topic: &str, payload: &str) -> TelemetryResult<()> {
        self.writer.write_record([topic, payload])?;
        Ok(())
    }

    fn finish(&mut self) -> TelemetryResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
