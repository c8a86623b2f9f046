//! Point relocation between clusters.

use super::members::Cluster;
use crate::error::Result;
use crate::point::{Point, PointId};

/// A single relocation: take the member equal to `point` out of `source` and
/// hand it to `destination`.
///
/// Nothing happens until [`perform`](Move::perform). Ownership of the member
/// is transferred, never duplicated, and both centroids end up invalid.
#[derive(Debug)]
pub struct Move<'a> {
    point: &'a Point,
    source: &'a mut Cluster,
    destination: &'a mut Cluster,
}

impl<'a> Move<'a> {
    /// Record the relocation.
    pub fn new(point: &'a Point, source: &'a mut Cluster, destination: &'a mut Cluster) -> Self {
        Self {
            point,
            source,
            destination,
        }
    }

    /// Carry out the relocation and return the id of the member that moved.
    ///
    /// Fails with whatever [`Cluster::remove`] fails with when `point` is not
    /// a member of `source`; in that case neither cluster changes.
    pub fn perform(self) -> Result<PointId> {
        let member = self.source.remove(self.point)?;
        let id = member.id();
        self.destination.add(member);
        Ok(id)
    }
}

/// Disjoint mutable borrows of `clusters[a]` and `clusters[b]`.
///
/// # Panics
///
/// If `a == b` or either index is out of range.
pub(crate) fn pair_mut(clusters: &mut [Cluster], a: usize, b: usize) -> (&mut Cluster, &mut Cluster) {
    assert_ne!(a, b, "source and destination must differ");
    if a < b {
        let (left, right) = clusters.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = clusters.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
