use std::path::PathBuf;
use thiserror::Error;

/// Result alias for `lloyd`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by points, clusters, and the k-means engine.
///
/// Every variant is fail-fast: nothing in the crate catches or downgrades
/// them, they surface unchanged to the caller of the failing operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Zero clusters requested.
    #[error("cannot partition into zero clusters")]
    ZeroClusters,

    /// A point with zero dimensions was requested.
    #[error("points must have at least one dimension")]
    ZeroDimensions,

    /// Two values of different dimensionality were combined or compared.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Coordinate index outside `[0, dimensions)`.
    #[error("coordinate index {index} out of bounds for {dimensions} dimensions")]
    OutOfBounds {
        /// Dimensionality of the point.
        dimensions: usize,
        /// Requested index.
        index: usize,
    },

    /// Centroid or seed selection attempted on a cluster with no members.
    #[error("cluster is empty")]
    EmptyCluster,

    /// Input source could not be opened.
    #[error("cannot open data file '{}': {source}", .path.display())]
    DataFileOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A literal in the input is not a real number.
    #[error("line {line}: '{literal}' is not a number")]
    InvalidLiteral {
        /// 1-based line number (0 when parsing a single detached line).
        line: usize,
        /// The offending literal, trimmed.
        literal: String,
    },

    /// Read or write failure after the source was opened.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A removal or move named a point that is not a member of the cluster.
    #[error("point not found in cluster")]
    PointNotFound,

    /// The engine already ran to a terminal state and cannot be reused.
    #[error("engine has already run")]
    AlreadyRun,
}
