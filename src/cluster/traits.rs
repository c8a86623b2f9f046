//! Clustering traits.

use crate::error::Result;

/// Trait for clustering algorithms.
pub trait Clustering {
    /// Fit the model to data and return cluster assignments.
    ///
    /// Returns one label per input row, in row order. A label is the index
    /// of the cluster the row ended up in, in `0..n_clusters()`; some
    /// indices may belong to clusters that ended up empty, so labels need
    /// not be contiguous.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
