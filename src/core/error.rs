//! Error types for transports

pub type Result<T> = std::result::Result<T, TransportError>;

/// Failures that can occur inside a transport.
///
/// None of these reach the dispatcher: the transport contract routes every
/// error to the side error channel instead of the caller.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// File append failure with path
    #[error("error writing to log file '{path}': {source}")]
    FileAppend {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Network-level HTTP failure
    #[error("error sending log event to {provider}: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response from a collector
    #[error("{provider} rejected log event with status {status}")]
    UnexpectedStatus {
        provider: &'static str,
        status: u16,
    },

    /// Unrecognized region code, detected at send time
    #[error("unknown {provider} region '{region}'")]
    UnknownRegion {
        provider: &'static str,
        region: String,
    },

    /// Required credential or endpoint not configured, detected at send time
    #[error("{provider} transport is missing {field}")]
    MissingCredential {
        provider: &'static str,
        field: &'static str,
    },

    /// Event envelope serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delivery worker channel disconnected
    #[error("delivery worker for '{transport}' is unavailable")]
    WorkerUnavailable { transport: &'static str },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    /// Create a file append error with path context
    pub fn file_append(path: impl Into<String>, source: std::io::Error) -> Self {
        TransportError::FileAppend {
            path: path.into(),
            source,
        }
    }

    /// Create a network failure error
    pub fn http(provider: &'static str, source: reqwest::Error) -> Self {
        TransportError::Http { provider, source }
    }

    /// Create a non-2xx response error
    pub fn unexpected_status(provider: &'static str, status: u16) -> Self {
        TransportError::UnexpectedStatus { provider, status }
    }

    /// Create an unknown region error
    pub fn unknown_region(provider: &'static str, region: impl Into<String>) -> Self {
        TransportError::UnknownRegion {
            provider,
            region: region.into(),
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(provider: &'static str, field: &'static str) -> Self {
        TransportError::MissingCredential { provider, field }
    }

    /// True for errors caused by configuration rather than the sink itself
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TransportError::UnknownRegion { .. } | TransportError::MissingCredential { .. }
        )
    }
}
