//! Opportunity record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one opportunity record, exactly as written in the data file
/// and in `?id=` links.
///
/// Ids are opaque strings; the file author owns their uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(pub String);

impl OpportunityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OpportunityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OpportunityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single volunteer opportunity as read from the data file.
///
/// Only `id` is required. Every other field falls back to its empty default
/// so sparse records still load and render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    /// Stable identity used in links and lookups.
    pub id: OpportunityId,
    /// Short human-readable headline.
    #[serde(default)]
    pub title: String,
    /// Free-form description, possibly long. Always treated as plain text,
    /// never as markup.
    #[serde(default)]
    pub description: String,
    /// Homepage of the organizing body.
    #[serde(default)]
    pub organization_url: String,
    /// Where the work happens.
    #[serde(default)]
    pub location: String,
    /// When the work happens.
    #[serde(default)]
    pub timeframe: String,
    /// Prerequisites, kept in the author's order.
    #[serde(default)]
    pub requirements: Vec<String>,
}
