//! Search Worker Types
//!
//! Type definitions for the worker thread communication. These types enable
//! the request/response pattern with cancellation support.

use tokio_util::sync::CancellationToken;

use crate::search::client::{SearchError, SearchResult};

/// Request to execute one search submission
#[derive(Debug)]
pub struct SearchRequest {
    /// Non-empty query pairs in declared field order
    pub pairs: Vec<(String, String)>,
    /// Unique ID for tracking this request
    pub request_id: u64,
    /// Token for cancelling this request
    pub cancel_token: CancellationToken,
}

/// Response from a search submission
#[derive(Debug)]
pub enum SearchResponse {
    /// The service answered with a result set
    Success {
        result: SearchResult,
        /// Request ID this response belongs to
        request_id: u64,
    },
    /// The submission failed (transport, HTTP status, or service error)
    Error {
        error: SearchError,
        /// Request ID this response belongs to
        /// Note: request_id = 0 indicates a worker-level error (applies immediately)
        request_id: u64,
    },
    /// The submission was cancelled
    Cancelled {
        /// Request ID that was cancelled
        request_id: u64,
    },
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
