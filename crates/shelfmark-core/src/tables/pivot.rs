use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, ShelfmarkError};

/// User-rating pivot table, rows indexed by book title.
///
/// The lookup only uses the row labels and their order. Rating columns are
/// carried through when present but never read by the recommender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawPivot")]
pub struct PivotTable {
    titles: Vec<String>,
    index: HashMap<String, usize>,
    users: Vec<String>,
    ratings: Vec<Vec<f32>>,
}

#[derive(Deserialize)]
struct RawPivot {
    titles: Vec<String>,
    #[serde(default)]
    users: Vec<String>,
    #[serde(default)]
    ratings: Vec<Vec<f32>>,
}

impl TryFrom<RawPivot> for PivotTable {
    type Error = ShelfmarkError;

    fn try_from(raw: RawPivot) -> Result<Self> {
        if raw.users.is_empty() && raw.ratings.is_empty() {
            Self::new(raw.titles)
        } else {
            Self::with_ratings(raw.titles, raw.users, raw.ratings)
        }
    }
}

impl PivotTable {
    /// Builds a pivot table from row labels only.
    ///
    /// Fails if any title occurs twice.
    pub fn new(titles: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(titles.len());
        for (i, title) in titles.iter().enumerate() {
            if let Some(&first) = index.get(title) {
                return Err(ShelfmarkError::DuplicateTitle {
                    title: title.clone(),
                    first,
                    second: i,
                });
            }
            index.insert(title.clone(), i);
        }

        Ok(Self {
            titles,
            index,
            users: Vec::new(),
            ratings: Vec::new(),
        })
    }

    /// Builds a pivot table with its rating matrix (one row per title, one column per user).
    pub fn with_ratings(
        titles: Vec<String>,
        users: Vec<String>,
        ratings: Vec<Vec<f32>>,
    ) -> Result<Self> {
        if ratings.len() != titles.len() {
            return Err(ShelfmarkError::DimensionMismatch {
                what: "pivot rating rows",
                expected: titles.len(),
                actual: ratings.len(),
            });
        }
        if let Some(row) = ratings.iter().find(|row| row.len() != users.len()) {
            return Err(ShelfmarkError::DimensionMismatch {
                what: "pivot rating columns",
                expected: users.len(),
                actual: row.len(),
            });
        }

        let mut table = Self::new(titles)?;
        table.users = users;
        table.ratings = ratings;
        Ok(table)
    }

    /// Row index of `title`, by exact match.
    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    #[must_use]
    pub fn title(&self, row: usize) -> Option<&str> {
        self.titles.get(row).map(String::as_str)
    }

    /// Row labels in row order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Returns `true` if the artifact carried its rating matrix.
    #[must_use]
    pub fn has_ratings(&self) -> bool {
        !self.ratings.is_empty()
    }
}
