use serde::Deserialize;

use crate::types::PopularBook;

/// Pre-sorted list of popular books. Order is whatever the offline job produced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PopularityTable {
    books: Vec<PopularBook>,
}

impl PopularityTable {
    #[must_use]
    pub fn new(books: Vec<PopularBook>) -> Self {
        Self { books }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PopularBook> {
        self.books.iter()
    }

    /// Returns the first `n` rows in table order, or all of them if the table is shorter.
    #[must_use]
    pub fn top(&self, n: usize) -> &[PopularBook] {
        &self.books[..n.min(self.books.len())]
    }
}

impl From<Vec<PopularBook>> for PopularityTable {
    fn from(books: Vec<PopularBook>) -> Self {
        Self::new(books)
    }
}
