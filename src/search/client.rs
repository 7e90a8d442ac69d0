//! Async search service client
//!
//! Issues one GET per submission to `{base_url}/search` and maps the
//! response into the client-side error taxonomy. Uses reqwest for HTTP and
//! tokio::select! to race the request against a cancellation token.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::params::serialize_pairs;

/// Errors that can occur during a search submission
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// Transport failure (connect, timeout, read)
    #[error("Failed to fetch results. {0}")]
    Network(String),

    /// Service answered with a non-2xx status
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    /// 2xx response carrying an `error` field; the message is the
    /// service-provided string, verbatim
    #[error("{0}")]
    Service(String),

    /// 2xx response whose body is not the expected JSON shape
    #[error("Malformed response from search service: {0}")]
    Data(String),

    /// Request was cancelled
    #[error("Search cancelled")]
    Cancelled,

    /// Background worker failure
    #[error("Search worker crashed: {0}")]
    Worker(String),
}

/// A settled result set: column order plus the matching rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

/// Wire shape of the service response. A populated `error` key on a 2xx
/// response signals a domain-level error; otherwise absent keys default
/// to empty.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    results: Vec<Map<String, Value>>,
}

/// Async search client bound to a single configured origin
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SearchClient {
    /// Create a client for the given base URL. The base URL is always
    /// injected explicitly; the client never reads ambient configuration.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Full request URL for a set of query pairs
    pub fn endpoint(&self, pairs: &[(String, String)]) -> String {
        let query = serialize_pairs(pairs);
        if query.is_empty() {
            format!("{}/search", self.base_url)
        } else {
            format!("{}/search?{}", self.base_url, query)
        }
    }

    /// Execute a search with cancellation support
    ///
    /// Uses `tokio::select!` to race the request against the cancellation
    /// token so an abandoned submission stops consuming the connection.
    pub async fn search_with_cancel(
        &self,
        pairs: &[(String, String)],
        cancel_token: &CancellationToken,
    ) -> Result<SearchResult, SearchError> {
        // Check if already cancelled before starting
        if cancel_token.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let url = self.endpoint(pairs);
        log::debug!("GET {}", url);

        let request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout);

        let response = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("Request to {} cancelled before response", url);
                return Err(SearchError::Cancelled);
            }
            result = request.send() => {
                result.map_err(|e| SearchError::Network(e.to_string()))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::debug!("Search failed with status {}", status);
            return Err(SearchError::Http {
                status: status.as_u16(),
            });
        }

        let body = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("Request to {} cancelled while reading body", url);
                return Err(SearchError::Cancelled);
            }
            result = response.text() => {
                result.map_err(|e| SearchError::Network(e.to_string()))?
            }
        };

        parse_payload(&body)
    }
}

/// Interpret a 2xx response body
///
/// A populated `error` key wins over any result content; otherwise missing
/// `columns`/`results` default to empty.
pub fn parse_payload(body: &str) -> Result<SearchResult, SearchError> {
    let payload: SearchPayload =
        serde_json::from_str(body).map_err(|e| SearchError::Data(e.to_string()))?;

    if let Some(error) = payload.error
        && !error.is_empty()
    {
        return Err(SearchError::Service(error));
    }

    Ok(SearchResult {
        columns: payload.columns,
        rows: payload.results,
    })
}

/// Render a JSON cell value for display. Strings render bare, null renders
/// empty, everything else uses its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
