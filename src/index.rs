use crate::utils::normalize_rows;
use ndarray::{Array2, ArrayView1, Axis};
use tracing::info;

/// Pairwise similarity lookup over corpus rows. Shared read-only across
/// query threads.
pub trait Index: Send + Sync {
    fn len(&self) -> usize;
    fn similarity(&self, i: usize, j: usize) -> f32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every other row ordered by descending similarity to `row`, ties broken
    /// by ascending row index.
    fn ranked(&self, row: usize) -> Vec<(usize, f32)> {
        if row >= self.len() {
            return Vec::new();
        }
        let mut results: Vec<(usize, f32)> = (0..self.len())
            .filter(|&j| j != row)
            .map(|j| (j, self.similarity(row, j)))
            .collect();

        results.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        results
    }
}

/// Dense all-pairs cosine similarity matrix. Symmetric; the diagonal is 1.0
/// for every row with at least one vocabulary term.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    scores: Array2<f32>,
}

impl SimilarityMatrix {
    pub fn build(vectors: &Array2<f32>) -> Self {
        let n = vectors.nrows();
        let normalized = normalize_rows(vectors);
        let mut scores = normalized.dot(&normalized.t());

        // Mirror the upper triangle so (i, j) and (j, i) are bit-identical.
        for i in 0..n {
            for j in (i + 1)..n {
                scores[[j, i]] = scores[[i, j]];
            }
        }
        for (i, row) in normalized.axis_iter(Axis(0)).enumerate() {
            scores[[i, i]] = if row.iter().any(|&x| x != 0.0) { 1.0 } else { 0.0 };
        }

        info!("Built {}x{} similarity matrix", n, n);
        Self { scores }
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f32> {
        self.scores.row(i)
    }

    pub fn scores(&self) -> &Array2<f32> {
        &self.scores
    }
}

impl Index for SimilarityMatrix {
    fn len(&self) -> usize {
        self.scores.nrows()
    }

    fn similarity(&self, i: usize, j: usize) -> f32 {
        self.scores[[i, j]]
    }
}
