//! Search module
//!
//! Everything between the form and the remote search service: query-string
//! construction, the HTTP client, the background worker that runs requests
//! off the UI thread, and the submission state machine that ties them
//! together.

pub mod client;
pub mod params;
pub mod search_state;
pub mod worker;

pub use client::{SearchClient, SearchError, SearchResult};
pub use search_state::{Outcome, SearchState};
