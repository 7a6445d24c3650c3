//! Provider response parsing.
//!
//! The autocomplete endpoint answers with a positional JSON array:
//!
//! ```text
//! ["shoes", ["shoes for men", ...], [descriptions], [], {"google:suggestrelevance": [600, ...]}]
//! ```
//!
//! Index 1 holds the suggestions. The trailing metadata object (index 4 in
//! real responses) may carry relevance scores aligned with them.

use serde_json::Value;

use crate::error::ProviderError;
use crate::suggest::Suggestion;

/// Metadata field holding per-suggestion relevance scores.
pub const RELEVANCE_FIELD: &str = "google:suggestrelevance";

/// Typed view of a provider response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderResponse {
    /// Suggestion strings in provider order
    pub suggestions: Vec<String>,
    /// Relevance scores, positionally aligned with `suggestions`; may be shorter
    pub relevance: Vec<u64>,
}

impl ProviderResponse {
    /// Parses a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ProviderError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Parses an already decoded response.
    ///
    /// A missing or non-string suggestion list is an error. Relevance data is
    /// best effort: anything unusable becomes a score of 0 later on.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        let Value::Array(items) = value else {
            return Err(ProviderError::Malformed(
                "expected a JSON array".to_string(),
            ));
        };

        let suggestions = items
            .get(1)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Malformed("missing suggestion list".to_string()))?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                ProviderError::Malformed("suggestion list contains non-string items".to_string())
            })?;

        let relevance = items
            .iter()
            .skip(2)
            .find_map(Value::as_object)
            .and_then(|meta| meta.get(RELEVANCE_FIELD))
            .and_then(Value::as_array)
            .map(|scores| scores.iter().map(|s| s.as_u64().unwrap_or(0)).collect::<Vec<_>>())
            .unwrap_or_default();

        Ok(Self {
            suggestions,
            relevance,
        })
    }

    /// Pairs each suggestion with its score, defaulting missing scores to 0.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        let relevance = self.relevance;
        self.suggestions
            .into_iter()
            .enumerate()
            .map(|(i, keyword)| Suggestion::new(keyword, relevance.get(i).copied().unwrap_or(0)))
            .collect()
    }
}
