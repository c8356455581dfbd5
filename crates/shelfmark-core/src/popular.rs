//! # Top-Popular Listing

use crate::context::RecommenderContext;
use crate::types::PopularBook;

impl RecommenderContext {
    /// Returns the first `n` rows of the popularity table, in table order.
    #[must_use]
    pub fn top_popular(&self, n: usize) -> &[PopularBook] {
        self.popular().top(n)
    }
}
