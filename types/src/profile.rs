//! Result profiles shown on the result card.

use serde::{Deserialize, Serialize};

const UNKNOWN_TITLE: &str = "Unknown type";
const UNKNOWN_DESCRIPTION: &str = "No result found for this code.";

/// Display content for one type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultProfile {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResultProfile {
    /// Placeholder shown for codes the catalog does not know.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            description: UNKNOWN_DESCRIPTION.to_string(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.title == UNKNOWN_TITLE && self.description == UNKNOWN_DESCRIPTION && self.tags.is_empty()
    }
}
