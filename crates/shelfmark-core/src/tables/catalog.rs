use std::collections::HashMap;

use serde::Deserialize;

use crate::types::BookRecord;

/// Title to metadata store. Keeps every edition in load order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<BookRecord>")]
pub struct BookCatalog {
    records: Vec<BookRecord>,
    by_title: HashMap<String, Vec<usize>>,
}

impl BookCatalog {
    #[must_use]
    pub fn new(records: Vec<BookRecord>) -> Self {
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            by_title.entry(record.title.clone()).or_default().push(i);
        }
        Self { records, by_title }
    }

    /// Returns the first record loaded for `title`.
    ///
    /// This is the de-duplication rule used for recommendations: when a title
    /// has several editions, the earliest one in the artifact wins.
    #[must_use]
    pub fn first(&self, title: &str) -> Option<&BookRecord> {
        self.by_title
            .get(title)
            .and_then(|indices| indices.first())
            .map(|&i| &self.records[i])
    }

    /// Returns every record for `title`, in load order.
    #[must_use]
    pub fn editions(&self, title: &str) -> Vec<&BookRecord> {
        self.by_title
            .get(title)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// Number of records, counting every edition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn unique_titles(&self) -> usize {
        self.by_title.len()
    }
}

impl From<Vec<BookRecord>> for BookCatalog {
    fn from(records: Vec<BookRecord>) -> Self {
        Self::new(records)
    }
}
