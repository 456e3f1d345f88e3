//! The `PublishSink` trait and the in-process sinks.
//!
//! The broker transport is not part of this crate; a sink only has to accept
//! `(topic, payload)` pairs.  The simulation loop logs and counts sink
//! errors but never stops on them.

use std::io::{self, Stdout, Write};

use tracing::info;

use crate::{Message, TelemetryResult};

/// Destination for encoded telemetry.
pub trait PublishSink {
    /// Short label used in log events.
    fn name(&self) -> &'static str;

    /// Hand one payload to the sink.
    fn publish(&mut self, topic: &str, payload: &str) -> TelemetryResult<()>;

    /// Flush buffered output.
    ///
    /// Idempotent.
    fn finish(&mut self) -> TelemetryResult<()> {
        Ok(())
    }
}

impl<S: PublishSink + ?Sized> PublishSink for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn publish(&mut self, topic: &str, payload: &str) -> TelemetryResult<()> {
        (**self).publish(topic, payload)
    }

    fn finish(&mut self) -> TelemetryResult<()> {
        (**self).finish()
    }
}

// ── LogSink ───────────────────────────────────────────────────────────────────

/// Emits every message as an `info` tracing event.
#[derive(Clone, Debug, Default)]
pub struct LogSink;

impl PublishSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn publish(&mut self, topic: &str, payload: &str) -> TelemetryResult<()> {
        info!(target: "ferry_telemetry::publish", topic, payload);
        Ok(())
    }
}

// ── LineSink ──────────────────────────────────────────────────────────────────

/// Writes `topic payload` lines to any [`Write`].
pub struct LineSink<W: Write> {
    out: W,
}

impl LineSink<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PublishSink for LineSink<W> {
    fn name(&self) -> &'static str {
        "line"
    }

    fn publish(&mut self, topic: &str, payload: &str) -> TelemetryResult<()> {
        writeln!(self.out, "{topic} {payload}")?;
        Ok(())
    }

    fn finish(&mut self) -> TelemetryResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

// ── MemorySink ────────────────────────────────────────────────────────────────

/// Keeps every message in memory, in publish order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    messages: Vec<Message>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn take(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }
}

impl PublishSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn publish(&mut self, topic: &str, payload: &str) -> TelemetryResult<()> {
        self.messages.push(Message { topic: topic.to_owned(), payload: payload.to_owned() });
        Ok(())
    }
}
