//! Keyword Suggest - keyword research API
//!
//! Looks up autocomplete suggestions for a keyword from a search suggestion
//! provider, scores them by provider relevance and caches the result.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod suggest;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
