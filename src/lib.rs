//! therafind library - Terminal search client for companion diagnostics data
//!
//! This library exposes the core functionality of therafind for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod notification;
pub mod results;
pub mod search;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use form::FormState;
pub use search::client::{SearchClient, SearchError, SearchResult};
