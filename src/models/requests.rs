//! Request DTOs for the suggestion API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for keyword analysis (POST /api/analyze)
///
/// # Fields
/// - `keyword`: The search term to look up suggestions for
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// The keyword, absent when the client omits it
    #[serde(default)]
    pub keyword: Option<String>,
}

impl AnalyzeRequest {
    /// Returns the keyword if it is present and non-empty.
    ///
    /// The keyword is used verbatim; whitespace is not trimmed.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }
}
