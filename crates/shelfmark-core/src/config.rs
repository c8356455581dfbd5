//! # Lookup Configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of recommendations returned per lookup.
pub const DEFAULT_TOP_K: usize = 5;

/// Number of rows shown from the popularity table.
pub const DEFAULT_POPULAR_COUNT: usize = 50;

/// How the query title is kept out of its own recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExclusionMode {
    /// Remove the query's own row before ranking.
    #[default]
    ExcludeQuery,
    /// Rank every row and drop whichever lands first.
    ///
    /// Matches legacy outputs, but only removes the query when its
    /// self-similarity is strictly the largest score in its row.
    DropTopRanked,
}

impl fmt::Display for ExclusionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludeQuery => write!(f, "exclude-query"),
            Self::DropTopRanked => write!(f, "drop-top-ranked"),
        }
    }
}

/// Configuration for a similarity lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Maximum number of recommendations to return.
    pub top_k: usize,
    /// Self-exclusion strategy.
    pub exclusion: ExclusionMode,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            exclusion: ExclusionMode::default(),
        }
    }
}

impl RecommendConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of results.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the self-exclusion strategy.
    pub fn with_exclusion(mut self, exclusion: ExclusionMode) -> Self {
        self.exclusion = exclusion;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecommendConfig::new();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.exclusion, ExclusionMode::ExcludeQuery);
    }

    #[test]
    fn builder() {
        let config = RecommendConfig::new()
            .with_top_k(10)
            .with_exclusion(ExclusionMode::DropTopRanked);
        assert_eq!(config.top_k, 10);
        assert_eq!(config.exclusion, ExclusionMode::DropTopRanked);
        assert_eq!(config.exclusion.to_string(), "drop-top-ranked");
    }
}
