//! Output sink for generated records.
//!
//! The sink stamps each record with the emitting runtime and a UTC timestamp
//! and writes it as one JSON object per line.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::log_generator::LogRecord;

/// Runtime identity attached to every emitted line
pub const LANGUAGE: &str = "rust";

/// Errors that can occur while emitting a record.
#[derive(Debug)]
pub enum SinkError {
    /// The underlying writer failed
    Io(std::io::Error),

    /// The record could not be serialized
    Serialize(serde_json::Error),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "Failed to write log line: {}", e),
            SinkError::Serialize(e) => write!(f, "Failed to serialize log line: {}", e),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        SinkError::Serialize(err)
    }
}

/// Destination for generated records.
pub trait LogSink {
    /// Emit one record. Called once per loop iteration.
    fn emit(&mut self, record: &LogRecord) -> Result<(), SinkError>;
}

/// Serialized shape of one output line: the record's own fields plus the
/// runtime identity and emission time.
#[derive(Debug, Serialize)]
struct LogLine<'a> {
    timestamp: DateTime<Utc>,
    language: &'static str,
    #[serde(flatten)]
    record: &'a LogRecord,
}

impl<'a> LogLine<'a> {
    fn new(record: &'a LogRecord, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            language: LANGUAGE,
            record,
        }
    }
}

/// Writes each record as a JSON line and flushes it immediately.
///
/// # Example
///
/// ```
/// use loggen::log_generator::LogGenerator;
/// use loggen::sink::{JsonLineSink, LogSink};
///
/// let mut sink = JsonLineSink::new(Vec::new());
/// let record = LogGenerator::seeded(1).generate(1);
/// sink.emit(&record).unwrap();
/// assert!(sink.into_inner().ends_with(b"\n"));
/// ```
pub struct JsonLineSink<W> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLineSink<std::io::Stdout> {
    /// Sink writing to the process standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> LogSink for JsonLineSink<W> {
    fn emit(&mut self, record: &LogRecord) -> Result<(), SinkError> {
        let line = LogLine::new(record, Utc::now());
        let mut buf = serde_json::to_vec(&line)?;
        buf.push(b'\n');

        self.writer.write_all(&buf)?;
        self.writer.flush()?;
        self.lines_written += 1;
        Ok(())
    }
}
