//! New Relic Logs transport

use super::worker::DeliveryWorker;
use crate::core::error::{Result, TransportError};
use crate::core::event::LogEvent;
use crate::core::filter::SeverityFilter;
use crate::core::transport::{report_failure, Transport};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;

const PROVIDER: &str = "New Relic";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Log event envelope for the New Relic Logs API
#[derive(Serialize)]
struct NewRelicEvent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    logtype: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<&'a str>,
    /// Epoch milliseconds
    timestamp: i64,
    message: String,
    severity: &'static str,
    scope: &'a str,
}

/// Sends log events to the New Relic Logs API for the configured region.
///
/// The region is carried as a configuration code and resolved per send, so
/// an unrecognized code fails the affected sends rather than construction.
pub struct NewRelicTransport {
    filter: SeverityFilter,
    client: Client,
    api_key: String,
    region: String,
    service: Option<String>,
    logtype: Option<String>,
    hostname: Option<String>,
    worker: DeliveryWorker,
}

impl NewRelicTransport {
    /// Create a new New Relic transport with the given Insert API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::http(PROVIDER, e))?;

        Ok(Self {
            filter: SeverityFilter::default(),
            client,
            api_key: api_key.into(),
            region: "US".to_string(),
            service: None,
            logtype: None,
            hostname: None,
            worker: DeliveryWorker::spawn("newrelic"),
        })
    }

    /// Set the severity filter for this transport
    #[must_use]
    pub fn with_filter(mut self, filter: SeverityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the data-center region code. Recognized codes: `US` (default),
    /// `EU`, `FedRamp`.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the service attribute attached to every event
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the logtype attribute attached to every event
    #[must_use]
    pub fn with_logtype(mut self, logtype: impl Into<String>) -> Self {
        self.logtype = Some(logtype.into());
        self
    }

    /// Set the hostname attribute attached to every event
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Resolve the Logs API base URL for the configured region.
    fn endpoint(&self) -> Result<&'static str> {
        match self.region.as_str() {
            "US" => Ok("https://log-api.newrelic.com/log/v1"),
            "EU" => Ok("https://log-api.eu.newrelic.com/log/v1"),
            "FedRamp" => Ok("https://gov-log-api.newrelic.com/log/v1"),
            other => Err(TransportError::unknown_region(PROVIDER, other)),
        }
    }

    fn format_event(&self, event: &LogEvent) -> Result<String> {
        let envelope = NewRelicEvent {
            logtype: self.logtype.as_deref(),
            service: self.service.as_deref(),
            hostname: self.hostname.as_deref(),
            timestamp: event.timestamp.timestamp_millis(),
            message: event.joined_message(),
            severity: event.severity.as_str(),
            scope: &event.scope,
        };
        Ok(serde_json::to_string(&envelope)?)
    }
}

impl Transport for NewRelicTransport {
    fn name(&self) -> &str {
        "newrelic"
    }

    fn filter(&self) -> &SeverityFilter {
        &self.filter
    }

    fn emit(&self, event: &LogEvent) -> Result<()> {
        let endpoint = self.endpoint()?;
        let body = self.format_event(event)?;
        let api_key = self.api_key.clone();
        let client = self.client.clone();

        self.worker.submit(move || {
            if let Err(e) = post_event(&client, endpoint, &api_key, body) {
                report_failure("newrelic", &e);
            }
        })
    }
}

fn post_event(client: &Client, endpoint: &str, api_key: &str, body: String) -> Result<()> {
    let response = client
        .post(endpoint)
        .header("Api-Key", api_key)
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
