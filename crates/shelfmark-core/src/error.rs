use thiserror::Error;

/// Errors that can occur while building or querying a recommender.
#[derive(Debug, Error)]
pub enum ShelfmarkError {
    /// The requested title is not a row label of the pivot table.
    #[error("title not found in pivot table: {title:?}")]
    TitleNotFound {
        /// The title that was looked up.
        title: String,
    },

    /// Two artifacts disagree on a dimension that must match.
    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which dimension was checked.
        what: &'static str,
        /// The dimension required by the other artifact.
        expected: usize,
        /// The dimension actually found.
        actual: usize,
    },

    /// A pivot row label occurs more than once.
    #[error("duplicate pivot title {title:?} at rows {first} and {second}")]
    DuplicateTitle {
        /// The repeated row label.
        title: String,
        /// Row of the first occurrence.
        first: usize,
        /// Row of the repeat.
        second: usize,
    },

    /// A pivot title has no record in the book catalog.
    #[error("no catalog metadata for pivot title {title:?}")]
    MissingMetadata {
        /// The pivot title lacking metadata.
        title: String,
    },

    /// An artifact holds a value the lookup cannot rank (e.g. NaN).
    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),
}

/// Result type alias for Shelfmark operations.
pub type Result<T> = std::result::Result<T, ShelfmarkError>;
