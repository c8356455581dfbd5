pub mod book;
pub mod recommendation;

pub use book::{BookRecord, PopularBook};
pub use recommendation::{Recommendation, ScoredRecommendation};
