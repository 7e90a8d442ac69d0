//! Submission state machine
//!
//! Owns the worker channels and the lifecycle of one search submission:
//! loading while a request is in flight, then exactly one of a result set
//! or an error message once it settles. Requests carry monotonically
//! increasing ids; responses for anything but the newest submission are
//! discarded, so overlapping submissions can never interleave and the most
//! recently sent request always wins.

use std::sync::mpsc::{Receiver, Sender, channel};

use tokio_util::sync::CancellationToken;

use super::client::{SearchClient, SearchResult};
use super::worker::{SearchRequest, SearchResponse, spawn_worker};

/// Observable state of the search pane
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    /// No submission has settled yet
    #[default]
    Idle,
    /// Last submission settled with a result set (possibly zero rows)
    Results(SearchResult),
    /// Last submission settled with an error message
    Failed(String),
}

/// Search submission state
pub struct SearchState {
    outcome: Outcome,
    /// Channel to send search requests to the worker
    request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive responses from the worker
    response_rx: Option<Receiver<SearchResponse>>,
    /// Current request ID counter (starts at 1, 0 reserved for worker errors)
    next_request_id: u64,
    /// ID of currently in-flight request, if any
    in_flight_request_id: Option<u64>,
    /// Cancellation token for current request
    current_cancel_token: Option<CancellationToken>,
}

impl SearchState {
    /// Create a new SearchState and spawn its background worker
    pub fn new(client: SearchClient) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        spawn_worker(client, request_rx, response_tx);

        Self::with_channels(request_tx, response_rx)
    }

    /// Wire up a state machine over explicit channels. Lets tests stand in
    /// for the worker and drive responses deterministically.
    pub fn with_channels(
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) -> Self {
        Self {
            outcome: Outcome::Idle,
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 1, // Reserve 0 for worker errors
            in_flight_request_id: None,
            current_cancel_token: None,
        }
    }

    /// Submit a search
    ///
    /// Clears any prior outcome, cancels any in-flight request, and sends
    /// the query pairs to the worker. Returns immediately; call
    /// `poll_response()` from the event loop to observe settlement.
    pub fn submit(&mut self, pairs: Vec<(String, String)>) {
        // Cancel any existing request
        self.cancel_in_flight();

        // Each submission fully replaces prior state
        self.outcome = Outcome::Idle;

        // Allocate new request ID
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker errors)
        if self.next_request_id == 0 {
            self.next_request_id = 1;
        }

        log::debug!(
            "Sending search request {} with {} pairs",
            request_id,
            pairs.len()
        );

        let cancel_token = CancellationToken::new();
        self.current_cancel_token = Some(cancel_token.clone());
        self.in_flight_request_id = Some(request_id);

        if let Some(ref tx) = self.request_tx {
            let request = SearchRequest {
                pairs,
                request_id,
                cancel_token,
            };

            // If send fails, worker died - settle immediately with an error
            if tx.send(request).is_err() {
                log::error!("Search worker disconnected - send failed");
                self.request_tx = None;
                self.response_rx = None;
                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.outcome = Outcome::Failed("Search worker disconnected".to_string());
            }
        } else {
            log::error!("No request channel available");
            self.in_flight_request_id = None;
            self.current_cancel_token = None;
            self.outcome = Outcome::Failed("Search worker disconnected".to_string());
        }
    }

    /// Cancel in-flight request if any
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.current_cancel_token.take() {
            token.cancel();
            log::debug!("Cancelled request {:?}", self.in_flight_request_id);
        }
        self.in_flight_request_id = None;
    }

    /// Poll for responses (non-blocking)
    ///
    /// Call this in the main event loop. Returns true if the observable
    /// state changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        // Take the receiver temporarily to avoid borrow checker issues
        let rx = match self.response_rx.take() {
            Some(rx) => rx,
            None => return false,
        };

        // Drain all available responses; stale ones are discarded so the
        // newest submission wins regardless of arrival order
        loop {
            match rx.try_recv() {
                Ok(response) => {
                    if self.process_response(response) {
                        changed = true;
                    }
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    log::error!("Search worker disconnected in poll_response");
                    self.request_tx = None;
                    if self.in_flight_request_id.is_some() {
                        self.in_flight_request_id = None;
                        self.current_cancel_token = None;
                        self.outcome = Outcome::Failed("Search worker disconnected".to_string());
                        changed = true;
                    }
                    // Don't put receiver back - it's disconnected
                    break;
                }
            }
        }

        changed
    }

    /// Process a single response
    ///
    /// Returns true if the response settled the current submission; stale
    /// responses leave state untouched.
    fn process_response(&mut self, response: SearchResponse) -> bool {
        let current_request_id = self.in_flight_request_id;

        match response {
            SearchResponse::Success { result, request_id } => {
                // Ignore stale responses
                if Some(request_id) != current_request_id {
                    log::debug!(
                        "Ignoring stale success from request {} (current: {:?})",
                        request_id,
                        current_request_id
                    );
                    return false;
                }

                log::debug!(
                    "Request {} settled with {} rows",
                    request_id,
                    result.rows.len()
                );
                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.outcome = Outcome::Results(result);
                true
            }
            SearchResponse::Error { error, request_id } => {
                // Worker-level errors (request_id == 0) always apply
                // Request-level errors only apply if they match current request
                if request_id == 0 || Some(request_id) == current_request_id {
                    self.in_flight_request_id = None;
                    self.current_cancel_token = None;
                    self.outcome = Outcome::Failed(error.to_string());
                    return true;
                }

                log::debug!(
                    "Ignoring stale error from request {} (current: {:?})",
                    request_id,
                    current_request_id
                );
                false
            }
            SearchResponse::Cancelled { request_id } => {
                // Only clear in-flight if it matches
                if Some(request_id) == current_request_id {
                    self.in_flight_request_id = None;
                    self.current_cancel_token = None;
                }
                false
            }
        }
    }

    /// True while a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Observable outcome of the last settled submission
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Error message of the last settled submission, if it failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Result set of the last settled submission, if it succeeded
    pub fn result(&self) -> Option<&SearchResult> {
        match &self.outcome {
            Outcome::Results(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
