use serde::Deserialize;

use crate::error::{Result, ShelfmarkError};

/// Dense square matrix of item-item similarity scores, aligned to pivot row order.
///
/// Higher is more similar. Symmetry is not checked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<f32>>")]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl TryFrom<Vec<Vec<f32>>> for SimilarityMatrix {
    type Error = ShelfmarkError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl SimilarityMatrix {
    /// Builds the matrix, rejecting non-square input and non-finite scores.
    pub fn new(rows: Vec<Vec<f32>>) -> Result<Self> {
        let dim = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(ShelfmarkError::DimensionMismatch {
                    what: "similarity row length",
                    expected: dim,
                    actual: row.len(),
                });
            }
            if let Some(j) = row.iter().position(|score| !score.is_finite()) {
                return Err(ShelfmarkError::InvalidArtifact(format!(
                    "non-finite similarity score at ({i}, {j})"
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Side length of the matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> Option<f32> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_matrix_accepted() {
        let m = SimilarityMatrix::new(vec![vec![1.0, 0.3], vec![0.3, 1.0]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.score(0, 1), Some(0.3));
        assert_eq!(m.score(2, 0), None);
        assert_eq!(m.row(1), Some(&[0.3, 1.0][..]));
    }

    #[test]
    fn ragged_matrix_rejected() {
        let err = SimilarityMatrix::new(vec![vec![1.0, 0.3], vec![0.3]]).unwrap_err();
        assert!(matches!(
            err,
            ShelfmarkError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn nan_rejected() {
        let err = SimilarityMatrix::new(vec![vec![1.0, f32::NAN], vec![0.3, 1.0]]).unwrap_err();
        assert!(err.to_string().contains("(0, 1)"));
    }

    #[test]
    fn empty_matrix_is_valid() {
        let m = SimilarityMatrix::new(Vec::new()).unwrap();
        assert_eq!(m.dim(), 0);
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let m: SimilarityMatrix = serde_json::from_str("[[1.0, 0.5], [0.5, 1.0]]").unwrap();
        assert_eq!(m.dim(), 2);
        assert!(serde_json::from_str::<SimilarityMatrix>("[[1.0, 0.5]]").is_err());
    }
}
