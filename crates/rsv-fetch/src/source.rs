//! Record sources.
//!
//! [`RecordSource`] is the seam between the controller and the network, so
//! tests can substitute an in-memory source.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use rsv_model::RawRecord;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{FetchError, Result};

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("rsv-dashboard/", env!("CARGO_PKG_VERSION"));

/// Something that can produce the raw record list for an endpoint.
pub trait RecordSource {
    fn fetch(&self, endpoint: &str) -> Result<Vec<RawRecord>>;
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Blocking HTTP source: one GET per fetch.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: Client,
    user_agent: String,
}

impl HttpRecordSource {
    /// Create a source with the given client settings.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch(&self, endpoint: &str) -> Result<Vec<RawRecord>> {
        debug!(endpoint, "Fetching reservations");

        let response = self
            .client
            .get(endpoint)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let records = parse_records(&body)?;
        info!(endpoint, count = records.len(), "Fetched reservations");
        Ok(records)
    }
}

/// Parse a response body into raw records.
///
/// The body must be a JSON array; its elements are passed through untouched
/// for the normalizer to validate.
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(records) => Ok(records),
        other => Err(FetchError::InvalidPayload(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
