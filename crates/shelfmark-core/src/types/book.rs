use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ShelfmarkError;

/// Reads a nullable string column, mapping `null` to an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the book catalog.
///
/// A title may occur several times in the catalog (one row per edition),
/// each with its own author spelling and cover image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(alias = "Book-Title")]
    pub title: String,

    /// Empty when the dataset has no author for this edition.
    #[serde(alias = "Book-Author", default, deserialize_with = "null_as_empty")]
    pub author: String,

    /// Medium-size cover image URL.
    #[serde(alias = "Image-URL-M", default, deserialize_with = "null_as_empty")]
    pub image_url: String,
}

impl BookRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            image_url: image_url.into(),
        }
    }
}

/// One row of the precomputed popularity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPopularBook")]
pub struct PopularBook {
    pub title: String,

    pub author: String,

    pub image_url: String,

    /// The metric the offline job sorted the table by. Higher is more popular.
    ///
    /// Tables exported without this column use the mean rating instead.
    pub popularity: f64,

    /// Number of ratings the book received, when the offline job kept it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ratings: Option<u32>,

    /// Mean rating, when the offline job kept it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
}

#[derive(Deserialize)]
struct RawPopularBook {
    #[serde(alias = "Book-Title")]
    title: String,
    #[serde(alias = "Book-Author", default, deserialize_with = "null_as_empty")]
    author: String,
    #[serde(alias = "Image-URL-M", default, deserialize_with = "null_as_empty")]
    image_url: String,
    #[serde(default)]
    popularity: Option<f64>,
    #[serde(default)]
    num_ratings: Option<u32>,
    #[serde(default, alias = "avg_ratings")]
    avg_rating: Option<f64>,
}

impl TryFrom<RawPopularBook> for PopularBook {
    type Error = ShelfmarkError;

    fn try_from(raw: RawPopularBook) -> Result<Self, ShelfmarkError> {
        let popularity = raw.popularity.or(raw.avg_rating).ok_or_else(|| {
            ShelfmarkError::InvalidArtifact(format!(
                "popular book {:?} has neither popularity nor avg_rating",
                raw.title
            ))
        })?;

        Ok(Self {
            title: raw.title,
            author: raw.author,
            image_url: raw.image_url,
            popularity,
            num_ratings: raw.num_ratings,
            avg_rating: raw.avg_rating,
        })
    }
}

impl PopularBook {
    /// Creates a popularity row without the optional rating statistics.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        image_url: impl Into<String>,
        popularity: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            image_url: image_url.into(),
            popularity,
            num_ratings: None,
            avg_rating: None,
        }
    }

    /// Attaches rating statistics.
    #[must_use]
    pub fn with_ratings(mut self, num_ratings: u32, avg_rating: f64) -> Self {
        self.num_ratings = Some(num_ratings);
        self.avg_rating = Some(avg_rating);
        self
    }
}

impl fmt::Display for PopularBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} by {}", self.title, self.author)?;
        if let (Some(n), Some(avg)) = (self.num_ratings, self.avg_rating) {
            write!(f, " ({n} ratings, avg {avg:.2})")?;
        }
        Ok(())
    }
}
