//! Search Worker Module
//!
//! Runs search requests in a background thread so the UI stays responsive
//! while a submission is in flight. Receives requests via channel, executes
//! the HTTP call with cancellation support, and sends responses back to the
//! main thread.
//!
//! ## Architecture
//!
//! - Single background thread owning a current-thread tokio runtime
//! - std::sync::mpsc channels, blocking recv() in the dedicated thread
//! - Panic hook to prevent TUI corruption
//! - Request/Response pattern with request ids and cancellation tokens

pub mod thread;
pub mod types;

// Re-exports for convenience
pub use thread::spawn_worker;
pub use types::{SearchRequest, SearchResponse};
