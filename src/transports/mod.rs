//! Transport implementations

pub mod console;
pub mod file;
pub mod newrelic;
pub mod splunk;

pub(crate) mod worker;

pub use console::ConsoleTransport;
pub use file::{FileFormat, FileTransport, DEFAULT_LOG_PATH};
pub use newrelic::NewRelicTransport;
pub use splunk::SplunkHecTransport;

// Re-export the trait alongside its implementations
pub use crate::core::Transport;
