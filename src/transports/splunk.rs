//! Splunk HTTP Event Collector transport

use super::worker::DeliveryWorker;
use crate::core::error::{Result, TransportError};
use crate::core::event::LogEvent;
use crate::core::filter::SeverityFilter;
use crate::core::transport::{report_failure, Transport};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;

const PROVIDER: &str = "Splunk";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HEC event envelope
#[derive(Serialize)]
struct HecEvent<'a> {
    /// Epoch seconds, fractional
    time: f64,
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sourcetype: Option<&'a str>,
    event: HecPayload,
}

#[derive(Serialize)]
struct HecPayload {
    level: &'static str,
    message: String,
}

/// Sends log events to Splunk's HTTP Event Collector.
///
/// The POST happens on a delivery worker; `emit` returns once the request
/// is enqueued. Endpoint and token are checked per send, so a transport
/// configured in stages only fails the sends attempted before configuration
/// completes.
pub struct SplunkHecTransport {
    filter: SeverityFilter,
    client: Client,
    endpoint: Option<String>,
    token: Option<String>,
    source_type: Option<String>,
    worker: DeliveryWorker,
}

impl SplunkHecTransport {
    /// Create a new Splunk HEC transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::http(PROVIDER, e))?;

        Ok(Self {
            filter: SeverityFilter::default(),
            client,
            endpoint: None,
            token: None,
            source_type: None,
            worker: DeliveryWorker::spawn("splunk-hec"),
        })
    }

    /// Set the severity filter for this transport
    #[must_use]
    pub fn with_filter(mut self, filter: SeverityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the HEC endpoint URL
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the HEC authorization token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the source type attached to every event
    #[must_use]
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    fn format_event(&self, event: &LogEvent) -> Result<String> {
        let envelope = HecEvent {
            time: event.timestamp.timestamp_millis() as f64 / 1000.0,
            source: &event.scope,
            sourcetype: self.source_type.as_deref(),
            event: HecPayload {
                level: event.severity.as_str(),
                message: event.joined_message(),
            },
        };
        Ok(serde_json::to_string(&envelope)?)
    }
}

impl Transport for SplunkHecTransport {
    fn name(&self) -> &str {
        "splunk-hec"
    }

    fn filter(&self) -> &SeverityFilter {
        &self.filter
    }

    fn emit(&self, event: &LogEvent) -> Result<()> {
        let endpoint = self
            .endpoint
            .clone()
            .ok_or_else(|| TransportError::missing_credential(PROVIDER, "hecEndpoint"))?;
        let token = self
            .token
            .clone()
            .ok_or_else(|| TransportError::missing_credential(PROVIDER, "hecToken"))?;
        let body = self.format_event(event)?;
        let client = self.client.clone();

        self.worker.submit(move || {
            if let Err(e) = post_event(&client, &endpoint, &token, body) {
                report_failure("splunk-hec", &e);
            }
        })
    }
}

fn post_event(client: &Client, endpoint: &str, token: &str, body: String) -> Result<()> {
    let response = client
        .post(endpoint)
        .header(AUTHORIZATION, format!("Splunk {}", token))
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .map_err(|e| TransportError::http(PROVIDER, e))?;

    if !response.status().is_success() {
        return Err(TransportError::unexpected_status(
            PROVIDER,
            response.status().as_u16(),
        ));
    }
    Ok(())
}
