//! Dense pairwise cosine similarity matrix.

use crate::tfidf::TermVector;

/// Square matrix of pairwise cosine similarities between catalog rows.
///
/// Symmetric, with diagonal 1 for every row whose feature vector is
/// nonzero, and all values in [0, 1] since term weights are non-negative.
/// Size is |catalog|², which is why the catalog row count is capped.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix. The dominant cost of index
    /// construction: O(n² · average vector overlap).
    pub fn from_vectors(vectors: &[TermVector]) -> Self {
        let n = vectors.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            values[i * n + i] = vectors[i].dot(&vectors[i]);
            for j in (i + 1)..n {
                let sim = vectors[i].dot(&vectors[j]);
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }
        Self { n, values }
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between rows `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.n + j]
    }

    /// Full similarity row for catalog index `i`
    pub fn row(&self, i: usize) -> &[f32] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}
