//! Console transport implementation

use crate::core::error::Result;
use crate::core::event::LogEvent;
use crate::core::filter::SeverityFilter;
use crate::core::severity::Severity;
use crate::core::timestamp::TimestampFormat;
use crate::core::transport::Transport;
use colored::Colorize;

/// Writes formatted lines to stdout, routing Error events to stderr.
pub struct ConsoleTransport {
    filter: SeverityFilter,
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            filter: SeverityFilter::default(),
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            filter: SeverityFilter::default(),
            use_colors,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the severity filter for this transport
    #[must_use]
    pub fn with_filter(mut self, filter: SeverityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the timestamp format for this transport
    ///
    /// # Examples
    ///
    /// ```
    /// use fanlog::transports::ConsoleTransport;
    /// use fanlog::TimestampFormat;
    ///
    /// let transport = ConsoleTransport::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format a line with per-severity styling
    fn format_line(&self, event: &LogEvent) -> String {
        let timestamp = self.timestamp_format.format(&event.timestamp);
        let level = format!("{:5}", event.severity.as_str());
        let message = event.scoped_message();

        if !self.use_colors {
            return format!("{} {} {}", timestamp, level, message);
        }

        let timestamp = timestamp.dimmed().to_string();
        let (level, message) = match event.severity {
            Severity::Debug => (level.dimmed().to_string(), message.dimmed().to_string()),
            Severity::Info => (level.blue().to_string(), message),
            Severity::Log => (level, message),
            Severity::Warn => (level.yellow().to_string(), message),
            Severity::Error => (level.red().to_string(), message.red().to_string()),
        };

        format!("{} {} {}", timestamp, level, message)
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn name(&self) -> &str {
        "console"
    }

    fn filter(&self) -> &SeverityFilter {
        &self.filter
    }

    fn emit(&self, event: &LogEvent) -> Result<()> {
        let line = self.format_line(event);

        // Error events go to stderr, everything else to stdout
        match event.severity {
            Severity::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        Ok(())
    }
}
