use std::path::PathBuf;

use shelfmark_core::ShelfmarkError;
use thiserror::Error;

/// Errors raised while reading artifacts from disk.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The artifact (plain or gzipped) does not exist.
    #[error("artifact not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON for its schema, or failed validation while decoding.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifacts decoded but do not fit together.
    #[error(transparent)]
    Core(#[from] ShelfmarkError),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = StoreError::NotFound {
            path: PathBuf::from("/data/pt.json"),
        };
        assert_eq!(err.to_string(), "artifact not found: /data/pt.json");
    }

    #[test]
    fn core_errors_pass_through() {
        let err: StoreError = ShelfmarkError::TitleNotFound {
            title: "Dune".into(),
        }
        .into();
        assert_eq!(err.to_string(), "title not found in pivot table: \"Dune\"");
    }
}
