//! Search Worker Thread
//!
//! Executes search submissions in a background thread with a current-thread
//! tokio runtime. Receives requests via channel, runs the HTTP call with
//! cancellation support, and sends responses back to the main thread.

use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use super::types::{SearchRequest, SearchResponse};
use crate::search::client::{SearchClient, SearchError};

/// Spawn the search worker thread
///
/// Creates a background thread that:
/// 1. Listens for search requests on the request channel
/// 2. Executes HTTP calls with cancellation support
/// 3. Sends responses back via the response channel
///
/// Includes panic handling to prevent TUI corruption.
///
/// # Arguments
/// * `client` - Configured search client (owns the base URL)
/// * `request_rx` - Channel to receive requests
/// * `response_tx` - Channel to send responses
pub fn spawn_worker(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        // Set panic hook to prevent TUI corruption. The hook is process-global,
        // so panics on other threads must still reach whatever hook was
        // installed before the worker started (terminal restore lives there).
        let worker_thread = std::thread::current().id();
        let response_tx_clone = response_tx.clone();
        let prev_hook: Arc<dyn Fn(&PanicHookInfo<'_>) + Send + Sync> =
            Arc::from(panic::take_hook());
        let chained_hook = Arc::clone(&prev_hook);
        panic::set_hook(Box::new(move |panic_info| {
            if std::thread::current().id() != worker_thread {
                chained_hook(panic_info);
                return;
            }

            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in search worker".to_string()
            };

            log::error!(
                "Search worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            // Try to send error to main thread
            // Use request_id = 0 to indicate worker-level error
            let _ = response_tx_clone.send(SearchResponse::Error {
                error: SearchError::Worker(panic_msg),
                request_id: 0,
            });
        }));

        // Wrap worker in catch_unwind
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            // Single-threaded tokio runtime for this worker thread
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(worker_loop(client, request_rx, response_tx)),
                Err(e) => {
                    log::error!("Failed to create search worker runtime: {}", e);
                    let _ = response_tx.send(SearchResponse::Error {
                        error: SearchError::Worker(e.to_string()),
                        request_id: 0,
                    });
                }
            }
        }));

        // Restore panic hook
        panic::set_hook(Box::new(move |panic_info| prev_hook(panic_info)));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Search worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main worker loop - processes requests until the channel closes
///
/// Uses blocking recv() which is fine in a dedicated thread.
async fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    log::debug!("Search worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received request {} with {} query pairs",
            request.request_id,
            request.pairs.len()
        );
        handle_request(&client, request, &response_tx).await;
    }

    log::debug!("Search worker thread shutting down");
}

/// Handle a single search request
async fn handle_request(
    client: &SearchClient,
    request: SearchRequest,
    response_tx: &Sender<SearchResponse>,
) {
    // Check if already cancelled
    if request.cancel_token.is_cancelled() {
        let _ = response_tx.send(SearchResponse::Cancelled {
            request_id: request.request_id,
        });
        return;
    }

    match client
        .search_with_cancel(&request.pairs, &request.cancel_token)
        .await
    {
        Ok(result) => {
            log::debug!(
                "Request {} succeeded with {} rows",
                request.request_id,
                result.rows.len()
            );
            let _ = response_tx.send(SearchResponse::Success {
                result,
                request_id: request.request_id,
            });
        }
        Err(SearchError::Cancelled) => {
            log::debug!("Request {} was cancelled", request.request_id);
            let _ = response_tx.send(SearchResponse::Cancelled {
                request_id: request.request_id,
            });
        }
        Err(error) => {
            log::debug!("Request {} failed: {}", request.request_id, error);
            let _ = response_tx.send(SearchResponse::Error {
                error,
                request_id: request.request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
