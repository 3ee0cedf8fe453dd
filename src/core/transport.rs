//! Transport trait for log output destinations

use super::error::{Result, TransportError};
use super::event::LogEvent;
use super::filter::SeverityFilter;

/// A sink that receives and conditionally persists or forwards log events.
///
/// Implementors provide the fallible [`emit`](Transport::emit); the provided
/// [`log`](Transport::log) wraps it with the shared contract every transport
/// obeys: the severity filter runs first, and no failure ever propagates to
/// the dispatcher.
pub trait Transport: Send + Sync {
    fn name(&self) -> &str;

    /// The filter consulted before any formatting or I/O.
    fn filter(&self) -> &SeverityFilter;

    /// Format the event and perform or enqueue its I/O.
    ///
    /// Transports with background delivery return once the send is initiated;
    /// failures past that point are reported by the delivery worker.
    fn emit(&self, event: &LogEvent) -> Result<()>;

    /// Filter, then emit, routing failures to the error channel.
    fn log(&self, event: &LogEvent) {
        if !self.filter().should_log(event.severity) {
            return;
        }
        if let Err(e) = self.emit(event) {
            report_failure(self.name(), &e);
        }
    }
}

/// Report a transport failure on the side error channel.
///
/// Used both for synchronous emit failures and from delivery workers.
pub(crate) fn report_failure(transport: &str, error: &TransportError) {
    eprintln!("[LOGGER ERROR] transport '{}' failed: {}", transport, error);
}
