use std::path::{Path, PathBuf};

/// File name of the popularity table artifact.
pub const POPULAR_FILE: &str = "popular.json";
/// File name of the book catalog artifact.
pub const BOOKS_FILE: &str = "books.json";
/// File name of the pivot table artifact.
pub const PIVOT_FILE: &str = "pt.json";
/// File name of the similarity matrix artifact.
pub const SIMILARITY_FILE: &str = "similarity_scores.json";

/// Default artifact directory: `<data dir>/shelfmark/artifacts`.
pub fn default_artifact_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelfmark")
        .join("artifacts")
}

/// Locations of the four artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub popular: PathBuf,
    pub books: PathBuf,
    pub pivot: PathBuf,
    pub similarity: PathBuf,
}

impl ArtifactPaths {
    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            popular: dir.join(POPULAR_FILE),
            books: dir.join(BOOKS_FILE),
            pivot: dir.join(PIVOT_FILE),
            similarity: dir.join(SIMILARITY_FILE),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(default_artifact_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact_dir() {
        let dir = default_artifact_dir();
        assert!(dir.to_string_lossy().contains("shelfmark"));
        assert!(dir.ends_with("artifacts"));
    }

    #[test]
    fn test_in_dir() {
        let paths = ArtifactPaths::in_dir("/srv/books");
        assert_eq!(paths.popular, PathBuf::from("/srv/books/popular.json"));
        assert_eq!(paths.books, PathBuf::from("/srv/books/books.json"));
        assert_eq!(paths.pivot, PathBuf::from("/srv/books/pt.json"));
        assert_eq!(
            paths.similarity,
            PathBuf::from("/srv/books/similarity_scores.json")
        );
    }
}
