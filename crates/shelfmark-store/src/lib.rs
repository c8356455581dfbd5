//! # Shelfmark Store
//!
//! Loads the offline recommendation artifacts from disk into a
//! [`RecommenderContext`](shelfmark_core::RecommenderContext), and matches
//! free-form titles against the pivot index for "did you mean" hints.

pub mod error;
pub mod loader;
pub mod paths;
pub mod suggest;

pub use error::{Result, StoreError};
pub use loader::{load_context, read_artifact};
pub use paths::{ArtifactPaths, default_artifact_dir};
pub use suggest::{TitleSuggestion, suggest_titles};
