//! Fetch lifecycle and request sequencing.
//!
//! Every request gets a monotonically increasing [`RequestId`]. Only the
//! result of the most recently started request is applied; anything older is
//! reported as [`Completion::Stale`] and dropped.

use std::fmt;

use rsv_model::RawRecord;
use tracing::{info, warn};

use crate::error::{FetchError, Result};
use crate::source::RecordSource;

/// Identifier of one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for an in-flight request, passed back to [`FetchController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    id: RequestId,
    endpoint: String,
}

impl RequestTicket {
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Current fetch state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No request has been made yet.
    #[default]
    Idle,
    /// A request is in flight. Prior results have been discarded.
    Loading,
    /// The latest request succeeded.
    Ready(Vec<RawRecord>),
    /// The latest request failed. There is no automatic retry.
    Failed(FetchError),
}

impl FetchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Raw records of a successful fetch.
    #[must_use]
    pub fn records(&self) -> Option<&[RawRecord]> {
        match self {
            Self::Ready(records) => Some(records),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcome of [`FetchController::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was for the latest request and is now the current state.
    Applied,
    /// A newer request started since; the result was discarded.
    Stale,
}

/// Tracks the configured endpoint and the latest request against it.
#[derive(Debug, Default)]
pub struct FetchController {
    endpoint: Option<String>,
    last_issued: u64,
    pending: Option<RequestId>,
    state: FetchState,
}

impl FetchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with an endpoint configured but nothing fetched yet.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Start a request against `endpoint`.
    ///
    /// Discards the current result and supersedes any in-flight request.
    pub fn begin(&mut self, endpoint: impl Into<String>) -> RequestTicket {
        let endpoint = endpoint.into();
        self.last_issued += 1;
        let id = RequestId(self.last_issued);

        if let Some(previous) = self.pending.replace(id) {
            info!(superseded = %previous, request = %id, "Superseding in-flight fetch");
        }
        info!(request = %id, endpoint = %endpoint, "Fetch started");

        self.endpoint = Some(endpoint.clone());
        self.state = FetchState::Loading;
        RequestTicket { id, endpoint }
    }

    /// Apply a request result if it belongs to the latest request.
    pub fn complete(&mut self, ticket: &RequestTicket, result: Result<Vec<RawRecord>>) -> Completion {
        if self.pending != Some(ticket.id) {
            warn!(request = %ticket.id, "Discarding stale fetch result");
            return Completion::Stale;
        }
        self.pending = None;

        self.state = match result {
            Ok(records) => {
                info!(request = %ticket.id, count = records.len(), "Fetch completed");
                FetchState::Ready(records)
            }
            Err(err) => {
                warn!(request = %ticket.id, error = %err, "Fetch failed");
                FetchState::Failed(err)
            }
        };
        Completion::Applied
    }

    /// Switch endpoints, starting a request only when the endpoint changed.
    pub fn set_source(&mut self, endpoint: impl Into<String>) -> Option<RequestTicket> {
        let endpoint = endpoint.into();
        if self.endpoint.as_deref() == Some(endpoint.as_str()) {
            return None;
        }
        Some(self.begin(endpoint))
    }

    /// Start a new request against the current endpoint.
    ///
    /// `None` when no endpoint has been configured.
    pub fn reload(&mut self) -> Option<RequestTicket> {
        let endpoint = self.endpoint.clone()?;
        Some(self.begin(endpoint))
    }

    /// Reload synchronously through `source`.
    ///
    /// `None` when no endpoint has been configured.
    pub fn fetch_with(&mut self, source: &dyn RecordSource) -> Option<Completion> {
        let ticket = self.reload()?;
        let result = source.fetch(ticket.endpoint());
        Some(self.complete(&ticket, result))
    }
}
