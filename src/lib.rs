//! # fanlog
//!
//! A multi-transport structured logging facade: one dispatcher fans each
//! severity-tagged call out to pluggable transports, each with its own
//! severity filter, formatting, and failure containment.
//!
//! ## Features
//!
//! - **Pluggable Transports**: Console, append-only file, Splunk HEC and
//!   New Relic collectors, or your own [`Transport`] implementation
//! - **Per-Transport Filtering**: minimum-severity threshold or an explicit
//!   severity set, decided independently by every sink
//! - **Failure Isolation**: a failing sink is reported on a side channel and
//!   never disturbs other transports or the caller
//! - **Fire-and-Forget Delivery**: file and remote sends complete on
//!   background workers, so dispatch cost is formatting only

pub mod core;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        serialize_values, LogEvent, LogValue, Logger, LoggerBuilder, Result, Severity,
        SeverityFilter, TimestampFormat, Transport, TransportError, DEFAULT_SCOPE,
    };
    pub use crate::transports::{
        ConsoleTransport, FileFormat, FileTransport, NewRelicTransport, SplunkHecTransport,
    };
}

pub use crate::core::{
    serialize_values, LogEvent, LogValue, Logger, LoggerBuilder, Result, Severity, SeverityFilter,
    TimestampFormat, Transport, TransportError, DEFAULT_SCOPE,
};
pub use crate::transports::{
    ConsoleTransport, FileFormat, FileTransport, NewRelicTransport, SplunkHecTransport,
};
