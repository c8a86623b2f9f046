//! Owned point membership with a memoized centroid.

use super::centroid::Centroid;
use super::seeding::Seeding;
use crate::error::{Error, Result};
use crate::point::Point;
use std::fmt;
use std::ops::Index;

/// A growable collection of owned [`Point`]s plus their cached centroid.
///
/// Membership order carries no meaning for the algorithm, but it is stable:
/// `add` appends and `remove` preserves the relative order of the rest, so
/// reports and indexed access are reproducible.
#[derive(Debug, Clone)]
pub struct Cluster {
    dimensions: usize,
    points: Vec<Point>,
    centroid: Centroid,
}

impl Cluster {
    /// Empty cluster for points of the given dimensionality.
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::ZeroDimensions);
        }
        Ok(Self {
            dimensions,
            points: Vec::new(),
            centroid: Centroid::default(),
        })
    }

    /// Dimensionality of the member points.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Take ownership of `point`. Invalidates the centroid.
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
        self.centroid.invalidate();
    }

    /// Remove and return the first member equal to `point`.
    ///
    /// Equality is by coordinates (see [`Point`]'s `PartialEq`), not by id.
    /// Invalidates the centroid on success. Asking for a point that is not a
    /// member is a caller bug and fails with [`Error::PointNotFound`].
    pub fn remove(&mut self, point: &Point) -> Result<Point> {
        let pos = self
            .points
            .iter()
            .position(|member| member == point)
            .ok_or(Error::PointNotFound)?;
        self.centroid.invalidate();
        Ok(self.points.remove(pos))
    }

    /// Whether some member equals `point`.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.iter().any(|member| member == point)
    }

    /// Member count.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Members in membership order.
    pub fn members(&self) -> &[Point] {
        &self.points
    }

    /// Iterate members in membership order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The centroid cache. Its value may be stale or absent; see
    /// [`Centroid::is_valid`].
    pub fn centroid(&self) -> &Centroid {
        &self.centroid
    }

    /// Recompute the centroid from current membership and mark it valid.
    pub fn compute_centroid(&mut self) -> Result<&Point> {
        self.centroid.compute(self.dimensions, &self.points)
    }

    /// The centroid, recomputing only if it is invalid.
    pub fn ensure_centroid(&mut self) -> Result<&Point> {
        if !self.centroid.is_valid() || self.centroid.get().is_none() {
            self.compute_centroid()?;
        }
        self.centroid.get().ok_or(Error::EmptyCluster)
    }

    /// Forget the cached centroid. Used when a cluster ends up empty and its
    /// representative becomes undefined.
    pub fn clear_centroid(&mut self) {
        self.centroid.clear();
    }

    /// Sum of squared distances from each member to the centroid.
    ///
    /// Zero for an empty cluster.
    pub fn sum_of_squares(&mut self) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        self.ensure_centroid()?;
        let centroid = self.centroid.get().ok_or(Error::EmptyCluster)?;
        self.points
            .iter()
            .map(|p| p.squared_distance_to(centroid))
            .sum()
    }

    /// Write `out.len()` representative values into `out`.
    ///
    /// Each slot is overwritten with [`Point::assign`], so slots keep their
    /// own ids and hold independent copies; membership is not touched. With
    /// fewer members than slots the picks repeat (see [`Seeding`]).
    pub fn pick_centroids(&self, out: &mut [Point], seeding: &Seeding) -> Result<()> {
        let picks = seeding.select(&self.points, out.len())?;
        for (slot, pick) in out.iter_mut().zip(picks) {
            slot.assign(&self.points[pick])?;
        }
        Ok(())
    }
}

/// Unchecked positional access, for inspection and tests.
///
/// Panics when `index >= size()`.
impl Index<usize> for Cluster {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One member per line, in membership order.
impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{point}")?;
        }
        Ok(())
    }
}
