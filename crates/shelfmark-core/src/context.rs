//! # Recommender Context
//!
//! Holds the four precomputed artifacts for the lifetime of the process.
//! Built once, validated once, then shared read-only by every lookup.

use tracing::debug;

use crate::config::RecommendConfig;
use crate::error::{Result, ShelfmarkError};
use crate::tables::{BookCatalog, PivotTable, PopularityTable, SimilarityMatrix};

/// Load-once container for the recommendation artifacts.
#[derive(Debug, Clone)]
pub struct RecommenderContext {
    popular: PopularityTable,
    catalog: BookCatalog,
    pivot: PivotTable,
    similarity: SimilarityMatrix,
    config: RecommendConfig,
}

impl RecommenderContext {
    /// Assembles a context, checking that the artifacts agree with each other.
    ///
    /// The similarity matrix must have one row per pivot title, and every
    /// pivot title must have at least one catalog record.
    pub fn new(
        popular: PopularityTable,
        catalog: BookCatalog,
        pivot: PivotTable,
        similarity: SimilarityMatrix,
    ) -> Result<Self> {
        if similarity.dim() != pivot.len() {
            return Err(ShelfmarkError::DimensionMismatch {
                what: "similarity matrix vs pivot rows",
                expected: pivot.len(),
                actual: similarity.dim(),
            });
        }

        if let Some(title) = pivot.titles().iter().find(|t| !catalog.contains(t)) {
            return Err(ShelfmarkError::MissingMetadata {
                title: title.clone(),
            });
        }

        debug!(
            popular = popular.len(),
            catalog = catalog.len(),
            pivot = pivot.len(),
            "recommender context assembled"
        );

        Ok(Self {
            popular,
            catalog,
            pivot,
            similarity,
            config: RecommendConfig::default(),
        })
    }

    /// Replaces the lookup configuration used by [`RecommenderContext::recommend`].
    #[must_use]
    pub fn with_config(mut self, config: RecommendConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    pub fn popular(&self) -> &PopularityTable {
        &self.popular
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    pub fn pivot(&self) -> &PivotTable {
        &self.pivot
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Titles that can be passed to a lookup, in pivot row order.
    pub fn titles(&self) -> &[String] {
        self.pivot.titles()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::types::{BookRecord, PopularBook};

    /// Six titles. Row "A" matches the documented ranking example.
    pub(crate) fn sample_context() -> RecommenderContext {
        let titles: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let catalog = BookCatalog::new(
            titles
                .iter()
                .map(|t| BookRecord::new(t.clone(), format!("Author {t}"), format!("http://img/{t}.jpg")))
                .chain(std::iter::once(BookRecord::new("B", "Other Author", "http://img/B-2.jpg")))
                .collect(),
        );

        let similarity = SimilarityMatrix::new(vec![
            vec![1.0, 0.9, 0.2, 0.05, 0.8, 0.1],
            vec![0.9, 1.0, 0.3, 0.1, 0.7, 0.2],
            vec![0.2, 0.3, 1.0, 0.6, 0.3, 0.4],
            vec![0.05, 0.1, 0.6, 1.0, 0.0, 0.5],
            vec![0.8, 0.7, 0.3, 0.0, 1.0, 0.3],
            vec![0.1, 0.2, 0.4, 0.5, 0.3, 1.0],
        ])
        .unwrap();

        let popular = PopularityTable::new(
            (0..60)
                .map(|i| PopularBook::new(format!("Popular {i}"), "Someone", "u", 100.0 - i as f64))
                .collect(),
        );

        RecommenderContext::new(popular, catalog, PivotTable::new(titles).unwrap(), similarity)
            .unwrap()
    }
}
