//! Close-match suggestions for titles missing from the pivot index.
//!
//! Lookups stay exact. Suggestions only help a caller report a typo.

use shelfmark_core::RecommenderContext;
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a title to be suggested.
pub const MIN_SUGGESTION_SCORE: f64 = 0.75;

/// A pivot title that resembles the query.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSuggestion {
    pub title: String,
    pub score: f64,
}

/// Returns up to `limit` pivot titles closest to `query`, best first.
///
/// Comparison is case-insensitive. Ties keep pivot order.
pub fn suggest_titles(ctx: &RecommenderContext, query: &str, limit: usize) -> Vec<TitleSuggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut matches: Vec<TitleSuggestion> = ctx
        .titles()
        .iter()
        .map(|title| TitleSuggestion {
            score: jaro_winkler(&query, &title.to_lowercase()),
            title: title.clone(),
        })
        .filter(|s| s.score >= MIN_SUGGESTION_SCORE)
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);
    matches
}
