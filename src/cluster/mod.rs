//! Clusters, relocation, and Lloyd's k-means.
//!
//! ## Model
//!
//! A [`Cluster`] owns its points outright. Points are never shared between
//! clusters: a [`Move`] takes one out of its source and hands it to its
//! destination. Each cluster memoizes its [`Centroid`] (component-wise mean
//! of its members); any add or remove marks the cache invalid.
//!
//! ## Relocation K-means
//!
//! [`Kmeans`] starts with every point in cluster 0 and seeds the others by
//! relocating one representative into each. A pass then walks the clusters
//! in index order and relocates a point whenever some other cluster's
//! centroid, as of the start of the pass, is strictly closer than its own.
//! Only the centroids of clusters that gained or lost points are recomputed
//! between passes. A pass with no relocations ends the run.
//!
//! Every relocation lowers the point's distance to its representative and
//! every recomputation lowers it again, so the squared-distance total
//! `Σ_k Σ_{x ∈ C_k} ||x - μ_k||²` never rises from pass to pass.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, KmeansConfig};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let labels = KmeansConfig::new(2, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//! ```

mod centroid;
mod kmeans;
mod members;
mod relocate;
mod seeding;
mod traits;

pub use centroid::Centroid;
pub use kmeans::{Kmeans, KmeansConfig, RunStats, State};
pub use members::Cluster;
pub use relocate::Move;
pub use seeding::Seeding;
pub use traits::Clustering;
