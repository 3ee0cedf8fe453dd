//! Main dispatcher implementation

use super::event::{LogEvent, DEFAULT_SCOPE};
use super::severity::Severity;
use super::transport::Transport;
use super::value::LogValue;
use crate::transports::ConsoleTransport;

/// The single entry point fanning each log call out to every registered
/// transport.
///
/// Transports are invoked in registration order and observe one shared
/// timestamp per call. Filtering is entirely per-transport; the dispatcher
/// itself never drops or fails a call.
pub struct Logger {
    transports: Vec<Box<dyn Transport>>,
}

impl Logger {
    /// Create a logger with a single console transport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transports: vec![Box::new(ConsoleTransport::new())],
        }
    }

    /// Create a logger with an explicit set of transports.
    #[must_use]
    pub fn with_transports(transports: Vec<Box<dyn Transport>>) -> Self {
        Self { transports }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use fanlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .transport(ConsoleTransport::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Register an additional transport. Fan-out order follows registration.
    pub fn add_transport(&mut self, transport: Box<dyn Transport>) {
        self.transports.push(transport);
    }

    #[inline]
    pub fn debug(&self, values: Vec<LogValue>) {
        self.forward(Severity::Debug, DEFAULT_SCOPE, values);
    }

    #[inline]
    pub fn info(&self, values: Vec<LogValue>) {
        self.forward(Severity::Info, DEFAULT_SCOPE, values);
    }

    #[inline]
    pub fn log(&self, values: Vec<LogValue>) {
        self.forward(Severity::Log, DEFAULT_SCOPE, values);
    }

    #[inline]
    pub fn warn(&self, values: Vec<LogValue>) {
        self.forward(Severity::Warn, DEFAULT_SCOPE, values);
    }

    #[inline]
    pub fn error(&self, values: Vec<LogValue>) {
        self.forward(Severity::Error, DEFAULT_SCOPE, values);
    }

    /// Forward one event to all registered transports.
    ///
    /// Captures a single timestamp shared by the whole fan-out. Each
    /// transport contains its own failures, so iteration never
    /// short-circuits.
    pub fn forward(&self, severity: Severity, scope: &str, values: Vec<LogValue>) {
        let event = LogEvent::new(severity, scope, values);
        for transport in &self.transports {
            transport.log(&event);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use fanlog::prelude::*;
///
/// let logger = Logger::builder()
///     .transport(ConsoleTransport::new().with_filter(
///         SeverityFilter::new().with_minimum(Severity::Debug),
///     ))
///     .build();
/// ```
pub struct LoggerBuilder {
    transports: Vec<Box<dyn Transport>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            transports: Vec::new(),
        }
    }

    /// Add a transport
    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transports.push(Box::new(transport));
        self
    }

    /// Build the Logger, defaulting to a single console transport when none
    /// were added.
    pub fn build(self) -> Logger {
        if self.transports.is_empty() {
            Logger::new()
        } else {
            Logger::with_transports(self.transports)
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
