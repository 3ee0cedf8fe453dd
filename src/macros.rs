//! Logging macros for ergonomic variadic dispatch.
//!
//! These macros accept any number of values, convert each through
//! [`LogValue::from`](crate::LogValue), and forward to the matching
//! dispatcher method.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Multiple values of mixed types
//! info!(logger, "Server listening on port", 8080);
//!
//! // Structured values
//! info!(logger, "headers", LogValue::map([("accept", "json")]));
//! ```

/// Log values at Debug severity.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::debug;
/// debug!(logger, "Entering function: calculate()");
/// debug!(logger, "Variable value:", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.debug(vec![$($crate::LogValue::from($value)),+])
    };
}

/// Log values at Info severity.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing items:", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info(vec![$($crate::LogValue::from($value)),+])
    };
}

/// Log values at Log severity.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::log;
/// log!(logger, "Request handled");
/// log!(logger, "Latency ms:", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log(vec![$($crate::LogValue::from($value)),+])
    };
}

/// Log values at Warn severity.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warn(vec![$($crate::LogValue::from($value)),+])
    };
}

/// Log values at Error severity.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.error(vec![$($crate::LogValue::from($value)),+])
    };
}
