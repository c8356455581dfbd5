//! # Similarity Lookup
//!
//! Ranks every pivot row against the query title's similarity row and
//! returns the best matches with one catalog record per title.

use tracing::debug;

use crate::config::{ExclusionMode, RecommendConfig};
use crate::context::RecommenderContext;
use crate::error::{Result, ShelfmarkError};
use crate::types::{Recommendation, ScoredRecommendation};

impl RecommenderContext {
    /// Returns up to `top_k` books similar to `title`, using the context's configuration.
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        Ok(self
            .recommend_scored(title)?
            .into_iter()
            .map(Recommendation::from)
            .collect())
    }

    /// Like [`RecommenderContext::recommend`], keeping rank and score.
    pub fn recommend_scored(&self, title: &str) -> Result<Vec<ScoredRecommendation>> {
        self.recommend_with(title, self.config())
    }

    /// Runs a lookup with an explicit configuration.
    ///
    /// Unknown titles are an error, never an empty result.
    pub fn recommend_with(
        &self,
        title: &str,
        config: &RecommendConfig,
    ) -> Result<Vec<ScoredRecommendation>> {
        let query = self
            .pivot()
            .position(title)
            .ok_or_else(|| ShelfmarkError::TitleNotFound {
                title: title.to_string(),
            })?;

        let row = self
            .similarity()
            .row(query)
            .ok_or(ShelfmarkError::DimensionMismatch {
                what: "similarity matrix vs pivot rows",
                expected: query + 1,
                actual: self.similarity().dim(),
            })?;

        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        if config.exclusion == ExclusionMode::ExcludeQuery {
            ranked.retain(|&(i, _)| i != query);
        }
        // Stable: equal scores keep row order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let skip = match config.exclusion {
            ExclusionMode::ExcludeQuery => 0,
            ExclusionMode::DropTopRanked => 1,
        };

        let results = ranked
            .into_iter()
            .skip(skip)
            .take(config.top_k)
            .enumerate()
            .map(|(rank, (row, score))| self.describe(row, rank + 1, score))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            title,
            query,
            exclusion = %config.exclusion,
            results = results.len(),
            "similarity lookup"
        );

        Ok(results)
    }

    fn describe(&self, row: usize, rank: usize, score: f32) -> Result<ScoredRecommendation> {
        let title = self
            .pivot()
            .title(row)
            .ok_or(ShelfmarkError::DimensionMismatch {
                what: "pivot rows vs similarity matrix",
                expected: self.similarity().dim(),
                actual: self.pivot().len(),
            })?;

        let record = self
            .catalog()
            .first(title)
            .ok_or_else(|| ShelfmarkError::MissingMetadata {
                title: title.to_string(),
            })?;

        Ok(ScoredRecommendation {
            rank,
            score,
            book: Recommendation::from(record),
        })
    }
}
