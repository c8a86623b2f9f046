//! Loading points from text and writing clusters back out.
//!
//! Input is one point per line, `d` real literals separated by `,`
//! (whitespace around literals is ignored). Literals must be finite reals;
//! `NaN` and infinities are rejected. Blank lines are skipped.
//! Output is one point per line, clusters in index order, with no separator
//! between clusters.

use crate::cluster::Cluster;
use crate::error::{Error, Result};
use crate::point::{parse_coords, Point};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Read every point from the file at `path`.
///
/// Fails with [`Error::DataFileOpen`] if the file cannot be opened.
pub fn load_points(path: impl AsRef<Path>, dimensions: usize) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::DataFileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let points = read_points(BufReader::new(file), dimensions)?;
    debug!(path = %path.display(), n_points = points.len(), "loaded points");
    Ok(points)
}

/// Read every point from `reader` until it is exhausted.
///
/// A line whose literal count differs from `dimensions` fails with
/// [`Error::DimensionMismatch`].
pub fn read_points<R: BufRead>(reader: R, dimensions: usize) -> Result<Vec<Point>> {
    if dimensions == 0 {
        return Err(Error::ZeroDimensions);
    }

    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let values = parse_coords(&line, dimensions, i + 1)?;
        points.push(Point::from_values(dimensions, &values)?);
    }
    Ok(points)
}

/// Write every cluster in index order, one member per line.
pub fn write_clusters<W: Write>(mut out: W, clusters: &[Cluster]) -> Result<()> {
    for cluster in clusters {
        write!(out, "{cluster}")?;
    }
    out.flush()?;
    Ok(())
}
