//! # lloyd
//!
//! Lloyd's k-means over owned, relocatable points.
//!
//! Points are loaded into a single cluster, `k` representatives are seeded
//! out of it, and assignment passes relocate points between clusters until a
//! pass moves nothing or the pass budget runs out.
//!
//! ```rust
//! use lloyd::{Kmeans, KmeansConfig, Point};
//!
//! let rows = [[0.0, 0.0], [0.2, 0.1], [9.9, 10.0], [10.0, 10.1]];
//! let points = rows
//!     .iter()
//!     .map(|r| Point::from_values(2, r))
//!     .collect::<lloyd::Result<Vec<_>>>()?;
//!
//! let mut kmeans = Kmeans::from_points(KmeansConfig::new(2, 2).with_max_iter(10), points)?;
//! let stats = kmeans.run()?;
//! assert!(stats.converged);
//! assert_eq!(stats.non_empty, 2);
//! # Ok::<(), lloyd::Error>(())
//! ```

pub mod cluster;
/// Error types used across `lloyd`.
pub mod error;
pub mod io;
pub mod point;

pub use cluster::{Cluster, Clustering, Kmeans, KmeansConfig, Move, RunStats, Seeding, State};
pub use error::{Error, Result};
pub use io::{load_points, read_points, write_clusters};
pub use point::{IdAllocator, Point, PointId};
