//! File transport implementation

use super::worker::DeliveryWorker;
use crate::core::error::{Result, TransportError};
use crate::core::event::LogEvent;
use crate::core::filter::SeverityFilter;
use crate::core::timestamp::TimestampFormat;
use crate::core::transport::{report_failure, Transport};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path used when none is configured.
pub const DEFAULT_LOG_PATH: &str = "./app.log";

/// Output format of file log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileFormat {
    /// `[timestamp] [LEVEL] scope: values` (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct FileRecord<'a> {
    timestamp: &'a str,
    level: &'a str,
    message: &'a str,
}

/// Appends one line per event to a named file, creating it if absent.
///
/// Lines are handed to a delivery worker, so `emit` never blocks on disk.
/// The file is opened per append, which keeps construction infallible and
/// lets a later event succeed after a transient failure.
pub struct FileTransport {
    filter: SeverityFilter,
    path: PathBuf,
    format: FileFormat,
    timestamp_format: TimestampFormat,
    worker: DeliveryWorker,
}

impl FileTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            filter: SeverityFilter::default(),
            path: path.into(),
            format: FileFormat::default(),
            timestamp_format: TimestampFormat::default(),
            worker: DeliveryWorker::spawn("file"),
        }
    }

    /// Set the severity filter for this transport
    #[must_use]
    pub fn with_filter(mut self, filter: SeverityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the line format
    ///
    /// # Examples
    ///
    /// ```
    /// use fanlog::transports::{FileFormat, FileTransport};
    ///
    /// let transport = FileTransport::new("./app.log")
    ///     .with_format(FileFormat::Json);
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the timestamp format for this transport
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn format_line(&self, event: &LogEvent) -> Result<String> {
        let timestamp = self.timestamp_format.format(&event.timestamp);
        let message = event.scoped_message();

        match self.format {
            FileFormat::Text => Ok(format!(
                "[{}] [{}] {}\n",
                timestamp,
                event.severity.as_str(),
                message
            )),
            FileFormat::Json => {
                let record = FileRecord {
                    timestamp: &timestamp,
                    level: event.severity.as_str(),
                    message: &message,
                };
                Ok(format!("{}\n", serde_json::to_string(&record)?))
            }
        }
    }
}

impl Default for FileTransport {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl Transport for FileTransport {
    fn name(&self) -> &str {
        "file"
    }

    fn filter(&self) -> &SeverityFilter {
        &self.filter
    }

    fn emit(&self, event: &LogEvent) -> Result<()> {
        let line = self.format_line(event)?;
        let path = self.path.clone();

        self.worker.submit(move || {
            if let Err(e) = append_line(&path, &line) {
                report_failure("file", &e);
            }
        })
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TransportError::file_append(path.display().to_string(), e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| TransportError::file_append(path.display().to_string(), e))
}
