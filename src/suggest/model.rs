use serde::{Deserialize, Serialize};

/// A provider completion paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested search phrase
    pub keyword: String,
    /// Provider relevance, used as a search volume estimate
    pub volume: u64,
}

impl Suggestion {
    pub fn new(keyword: impl Into<String>, volume: u64) -> Self {
        Self {
            keyword: keyword.into(),
            volume,
        }
    }
}
