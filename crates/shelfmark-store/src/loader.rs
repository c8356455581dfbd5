//! Artifact decoding.
//!
//! Each artifact is a JSON document. A gzipped copy named `<file>.gz` is
//! used when the plain file is missing.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use shelfmark_core::{
    BookCatalog, PivotTable, PopularityTable, RecommenderContext, SimilarityMatrix,
};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::paths::ArtifactPaths;

fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".gz");
    PathBuf::from(name)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Resolves which file to read for `path`: itself, or its `.gz` sibling.
fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if !is_gzip(path) {
        let gz = gz_sibling(path);
        if gz.is_file() {
            debug!(path = %gz.display(), "using gzipped artifact");
            return Ok(gz);
        }
    }
    Err(StoreError::NotFound {
        path: path.to_path_buf(),
    })
}

/// Reads and decodes one JSON artifact, transparently gunzipping `.gz` files.
pub fn read_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = resolve(path.as_ref())?;
    let file = File::open(&path).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    let reader: Box<dyn Read> = if is_gzip(&path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    serde_json::from_reader(reader).map_err(|source| StoreError::Decode { path, source })
}

/// Loads all four artifacts and assembles a validated context.
pub fn load_context(paths: &ArtifactPaths) -> Result<RecommenderContext> {
    let popular: PopularityTable = read_artifact(&paths.popular)?;
    let catalog: BookCatalog = read_artifact(&paths.books)?;
    let pivot: PivotTable = read_artifact(&paths.pivot)?;
    let similarity: SimilarityMatrix = read_artifact(&paths.similarity)?;

    info!(
        popular = popular.len(),
        books = catalog.len(),
        unique_titles = catalog.unique_titles(),
        pivot_rows = pivot.len(),
        similarity_dim = similarity.dim(),
        "artifacts loaded"
    );

    Ok(RecommenderContext::new(popular, catalog, pivot, similarity)?)
}
