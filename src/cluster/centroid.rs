//! Lazily memoized cluster representative.

use crate::error::{Error, Result};
use crate::point::Point;

/// Cached component-wise mean of a cluster's members.
///
/// The cache is tagged valid or invalid. Every membership change marks it
/// invalid; the last computed value stays readable (stale) until the next
/// [`compute`](Self::compute). A centroid that has never been computed, or
/// whose cluster was emptied, has no value at all.
#[derive(Debug, Clone, Default)]
pub struct Centroid {
    value: Option<Point>,
    valid: bool,
}

impl Centroid {
    /// The cached representative, possibly stale. Check
    /// [`is_valid`](Self::is_valid) when freshness matters.
    pub fn get(&self) -> Option<&Point> {
        self.value.as_ref()
    }

    /// Whether the cached value reflects the current membership.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Drop the cached value entirely.
    pub(crate) fn clear(&mut self) {
        self.value = None;
        self.valid = false;
    }

    /// Recompute as the mean of `members` and mark valid.
    ///
    /// The value slot is reused when it already has the right
    /// dimensionality, so the centroid keeps its id across recomputations.
    pub(crate) fn compute(&mut self, dimensions: usize, members: &[Point]) -> Result<&Point> {
        if members.is_empty() {
            return Err(Error::EmptyCluster);
        }

        let mut mean = Point::new(dimensions)?;
        for member in members {
            mean.add_in_place(member)?;
        }
        mean /= members.len() as f64;

        let value = match self.value.take() {
            Some(mut slot) if slot.same_dimensions(&mean) => {
                slot.assign(&mean)?;
                slot
            }
            _ => mean,
        };
        self.valid = true;
        Ok(&*self.value.insert(value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(values: &[f64]) -> Point {
        Point::from_values(values.len(), values).unwrap()
    }

    #[test]
    fn test_starts_empty_and_invalid() {
        let centroid = Centroid::default();
        assert!(centroid.get().is_none());
        assert!(!centroid.is_valid());
    }

    #[test]
    fn test_compute_mean() {
        let mut centroid = Centroid::default();
        let members = vec![p(&[0.0, 0.0]), p(&[2.0, 4.0]), p(&[4.0, 8.0])];
        let mean = centroid.compute(2, &members).unwrap();
        assert_eq!(mean.coords(), &[2.0, 4.0]);
        assert!(centroid.is_valid());
    }

    #[test]
    fn test_compute_empty_fails() {
        let mut centroid = Centroid::default();
        assert!(matches!(
            centroid.compute(2, &[]),
            Err(Error::EmptyCluster)
        ));
        assert!(!centroid.is_valid());
    }

    #[test]
    fn test_recompute_keeps_slot_id() {
        let mut centroid = Centroid::default();
        let first = centroid.compute(1, &[p(&[1.0])]).unwrap().id();
        centroid.invalidate();
        let second = centroid.compute(1, &[p(&[3.0])]).unwrap();
        assert_eq!(second.id(), first);
        assert_eq!(second.coords(), &[3.0]);
    }

    #[test]
    fn test_invalidate_keeps_stale_value() {
        let mut centroid = Centroid::default();
        centroid.compute(1, &[p(&[5.0])]).unwrap();
        centroid.invalidate();
        assert!(!centroid.is_valid());
        assert_eq!(centroid.get().unwrap().coords(), &[5.0]);

        centroid.clear();
        assert!(centroid.get().is_none());
    }
}
