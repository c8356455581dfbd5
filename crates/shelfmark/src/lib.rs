//! # Shelfmark
//!
//! Book recommendations from precomputed collaborative-filtering artifacts.
//! Re-exports [`shelfmark_core`] and [`shelfmark_store`].

pub use shelfmark_core::*;
pub use shelfmark_store::{
    ArtifactPaths, StoreError, TitleSuggestion, default_artifact_dir, load_context,
    read_artifact, suggest_titles,
};

