//! Cosine similarity between standardized feature vectors.

use tracing::debug;

/// Vectors with an L2 norm at or below this are treated as degenerate.
pub const NORM_EPSILON: f64 = 1e-9;

#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot: dimension mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
pub fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Cosine similarity, `dot(a, b) / (norm(a) * norm(b))`.
///
/// Returns `0.0` when either vector is degenerate (norm <= `NORM_EPSILON`).
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    cosine_with_norms(a, b, norm(a), norm(b))
}

/// [`cosine`] with the norms already known.
fn cosine_with_norms(a: &[f64], b: &[f64], norm_a: f64, norm_b: f64) -> f64 {
    if norm_a > NORM_EPSILON && norm_b > NORM_EPSILON {
        dot(a, b) / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// Dense N×N matrix of pairwise cosine similarities, stored row-major.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Scores every pair of rows. Only the upper triangle is computed, the
    /// lower one is mirrored, so the result is exactly symmetric.
    pub fn compute(rows: &[Vec<f64>]) -> SimilarityMatrix {
        let size = rows.len();
        let norms: Vec<f64> = rows.iter().map(|r| norm(r)).collect();
        let mut values = vec![0.0f64; size * size];

        let degenerate = norms.iter().filter(|&&n| n <= NORM_EPSILON).count();
        if degenerate > 0 {
            debug!("{} of {} rows are degenerate, scoring them 0.0", degenerate, size);
        }

        for i in 0..size {
            for j in i..size {
                let similarity = cosine_with_norms(&rows[i], &rows[j], norms[i], norms[j]);
                values[i * size + j] = similarity;
                values[j * size + i] = similarity;
            }
        }

        SimilarityMatrix { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Similarities of song `i` to every song, itself included.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn rows() -> Vec<Vec<f64>> {
        vec![
            vec![1.2, -0.3, 0.5],
            vec![-0.7, 1.1, 0.0],
            vec![0.1, 0.2, -1.4],
            vec![2.4, -0.6, 1.0],
        ]
    }

    #[test]
    fn test_cosine_basic_angles() {
        assert!((cosine(&[1.0, 0.0], &[0.0, 1.0])).abs() < TOLERANCE);
        assert!((cosine(&[1.0, 2.0], &[2.0, 4.0]) - 1.0).abs() < TOLERANCE);
        assert!((cosine(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < TOLERANCE);
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = SimilarityMatrix::compute(&rows());
        assert_eq!(matrix.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_diagonal_is_one() {
        let matrix = SimilarityMatrix::compute(&rows());
        for i in 0..matrix.size() {
            assert!((matrix.get(i, i) - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_matches_pairwise_cosine() {
        let rows = rows();
        let matrix = SimilarityMatrix::compute(&rows);
        for i in 0..rows.len() {
            for j in 0..rows.len() {
                assert_eq!(matrix.get(i, j), cosine(&rows[i], &rows[j]));
            }
        }
        // Row 3 is row 0 scaled by 2
        assert!((matrix.get(0, 3) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_values_within_range() {
        let matrix = SimilarityMatrix::compute(&rows());
        for i in 0..matrix.size() {
            for value in matrix.row(i) {
                assert!(*value >= -1.0 - TOLERANCE && *value <= 1.0 + TOLERANCE);
            }
        }
    }

    #[test]
    fn test_degenerate_row_scores_zero() {
        let matrix = SimilarityMatrix::compute(&[vec![0.0, 0.0], vec![1.0, -1.0]]);
        assert_eq!(matrix.row(0), &[0.0, 0.0]);
        assert_eq!(matrix.get(1, 0), 0.0);
        assert!((matrix.get(1, 1) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_matrix_and_cosine_share_degenerate_threshold() {
        // Norms just below and just above NORM_EPSILON
        let rows = vec![
            vec![NORM_EPSILON * 0.5, 0.0],
            vec![NORM_EPSILON * 2.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
        ];
        let matrix = SimilarityMatrix::compute(&rows);
        for i in 0..rows.len() {
            for j in 0..rows.len() {
                assert_eq!(matrix.get(i, j), cosine(&rows[i], &rows[j]), "({}, {})", i, j);
            }
        }
        assert_eq!(matrix.get(0, 3), 0.0);
        assert!((matrix.get(1, 3) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::compute(&[]);
        assert_eq!(matrix.size(), 0);
    }
}
