//! # Shelfmark Core
//!
//! Book recommendation lookup over artifacts computed offline: a popularity
//! table, a book catalog, a user-rating pivot table and an item-item
//! similarity matrix. Nothing is learned here; lookups are pure reads.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfmark_core::{
//!     BookCatalog, BookRecord, PivotTable, PopularityTable, RecommenderContext, SimilarityMatrix,
//! };
//!
//! let titles = vec!["Emma".to_string(), "Persuasion".to_string(), "Dune".to_string()];
//! let catalog = BookCatalog::new(vec![
//!     BookRecord::new("Emma", "Jane Austen", "http://img/emma.jpg"),
//!     BookRecord::new("Persuasion", "Jane Austen", "http://img/persuasion.jpg"),
//!     BookRecord::new("Dune", "Frank Herbert", "http://img/dune.jpg"),
//! ]);
//! let similarity = SimilarityMatrix::new(vec![
//!     vec![1.0, 0.8, 0.1],
//!     vec![0.8, 1.0, 0.2],
//!     vec![0.1, 0.2, 1.0],
//! ])
//! .unwrap();
//!
//! let ctx = RecommenderContext::new(
//!     PopularityTable::default(),
//!     catalog,
//!     PivotTable::new(titles).unwrap(),
//!     similarity,
//! )
//! .unwrap();
//!
//! let recs = ctx.recommend("Emma").unwrap();
//! assert_eq!(recs[0].title, "Persuasion");
//! ```
pub mod config;
pub mod context;
pub mod error;
pub mod popular;
pub mod recommend;
pub mod tables;
pub mod types;

// Re-export primary API
pub use config::{DEFAULT_POPULAR_COUNT, DEFAULT_TOP_K, ExclusionMode, RecommendConfig};
pub use context::RecommenderContext;
pub use error::{Result, ShelfmarkError};
pub use tables::{BookCatalog, PivotTable, PopularityTable, SimilarityMatrix};
pub use types::{BookRecord, PopularBook, Recommendation, ScoredRecommendation};
