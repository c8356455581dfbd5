use std::fmt;

use serde::{Deserialize, Serialize};

use super::book::BookRecord;

/// A recommended book, de-duplicated to one record per title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub image_url: String,
}

impl From<&BookRecord> for Recommendation {
    fn from(record: &BookRecord) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            image_url: record.image_url.clone(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} by {}", self.title, self.author)
    }
}

/// A recommendation together with where it ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    /// 1-based position in the result list.
    pub rank: usize,

    /// Similarity between the query title and this book.
    pub score: f32,

    #[serde(flatten)]
    pub book: Recommendation,
}

impl From<ScoredRecommendation> for Recommendation {
    fn from(scored: ScoredRecommendation) -> Self {
        scored.book
    }
}
