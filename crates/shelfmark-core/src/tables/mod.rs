//! Immutable artifact tables produced by the offline batch job.

pub mod catalog;
pub mod pivot;
pub mod popularity;
pub mod similarity;

pub use catalog::BookCatalog;
pub use pivot::PivotTable;
pub use popularity::PopularityTable;
pub use similarity::SimilarityMatrix;
