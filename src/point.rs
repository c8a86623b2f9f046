//! Fixed-dimensional points.
//!
//! A [`Point`] is an ordered run of `d > 0` real coordinates tagged with a
//! [`PointId`]. The id is only used to tell instances apart (e.g. mapping a
//! relocated point back to its input row); it never takes part in equality,
//! ordering, or arithmetic.
//!
//! # Identity
//!
//! Ids come from an [`IdAllocator`], a monotonically increasing counter.
//! [`Point::new`] and friends draw from a process-wide allocator; the `_in`
//! constructors take an explicit one.
//!
//! - Cloning mints a **new** id, so two live instances never share one.
//! - [`Point::assign`] replaces coordinates in place and keeps the id: the id
//!   belongs to the slot, not to the content.
//!
//! # Text Form
//!
//! Coordinates are written joined by `", "` and read back by splitting on
//! [`POINT_VALUE_DELIM`], trimming each literal. Rust's float formatting is
//! shortest-round-trip, so `parse(p.to_string()) == p` holds exactly.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;
use std::sync::atomic::{self, AtomicU64};

/// Delimiter between coordinate literals in the text form.
pub const POINT_VALUE_DELIM: char = ',';

static GLOBAL_IDS: IdAllocator = IdAllocator::new();

/// Identity tag of a [`Point`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

impl PointId {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing source of [`PointId`]s.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Allocator whose first id is 0.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Allocator whose first id is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Hand out the next id.
    pub fn allocate(&self) -> PointId {
        PointId(self.next.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> PointId {
        PointId(self.next.load(atomic::Ordering::Relaxed))
    }
}

/// The process-wide allocator used by [`Point::new`], [`Point::from_values`]
/// and `Clone`.
pub fn global_ids() -> &'static IdAllocator {
    &GLOBAL_IDS
}

/// An identified, fixed-dimensional vector of `f64` coordinates.
#[derive(Debug)]
pub struct Point {
    id: PointId,
    values: Vec<f64>,
}

impl Point {
    /// Zero-initialized point of the given dimensionality.
    pub fn new(dimensions: usize) -> Result<Self> {
        Self::new_in(&GLOBAL_IDS, dimensions)
    }

    /// Like [`new`](Self::new), drawing the id from `ids`.
    pub fn new_in(ids: &IdAllocator, dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::ZeroDimensions);
        }
        Ok(Self {
            id: ids.allocate(),
            values: vec![0.0; dimensions],
        })
    }

    /// Point with coordinates copied from `values`.
    ///
    /// `values.len()` must equal `dimensions`; nothing is truncated or padded.
    pub fn from_values(dimensions: usize, values: &[f64]) -> Result<Self> {
        Self::from_values_in(&GLOBAL_IDS, dimensions, values)
    }

    /// Like [`from_values`](Self::from_values), drawing the id from `ids`.
    pub fn from_values_in(ids: &IdAllocator, dimensions: usize, values: &[f64]) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::ZeroDimensions);
        }
        if values.len() != dimensions {
            return Err(Error::DimensionMismatch {
                expected: dimensions,
                found: values.len(),
            });
        }
        Ok(Self {
            id: ids.allocate(),
            values: values.to_vec(),
        })
    }

    /// Copy of this point with an id drawn from `ids`.
    pub fn clone_in(&self, ids: &IdAllocator) -> Self {
        Self {
            id: ids.allocate(),
            values: self.values.clone(),
        }
    }

    /// Identity tag.
    pub fn id(&self) -> PointId {
        self.id
    }

    /// Number of coordinates.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Coordinates as a slice.
    pub fn coords(&self) -> &[f64] {
        &self.values
    }

    /// Whether `other` has the same dimensionality, i.e. whether the two can
    /// be compared or combined at all.
    pub fn same_dimensions(&self, other: &Point) -> bool {
        self.dimensions() == other.dimensions()
    }

    fn check_dimensions(&self, other: &Point) -> Result<()> {
        if self.same_dimensions(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            })
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.dimensions() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                dimensions: self.dimensions(),
                index,
            })
        }
    }

    /// Coordinate at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    /// Overwrite the coordinate at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Mutable reference to the coordinate at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        self.check_index(index)?;
        Ok(&mut self.values[index])
    }

    /// Replace this point's coordinates with `other`'s. The id is unchanged.
    pub fn assign(&mut self, other: &Point) -> Result<()> {
        self.check_dimensions(other)?;
        self.values.copy_from_slice(&other.values);
        Ok(())
    }

    /// Squared Euclidean distance.
    pub fn squared_distance_to(&self, other: &Point) -> Result<f64> {
        self.check_dimensions(other)?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (b - a).powi(2))
            .sum())
    }

    /// Euclidean distance.
    pub fn distance_to(&self, other: &Point) -> Result<f64> {
        self.squared_distance_to(other).map(f64::sqrt)
    }

    /// Component-wise `self += other`.
    pub fn add_in_place(&mut self, other: &Point) -> Result<()> {
        self.check_dimensions(other)?;
        for (a, b) in self.values.iter_mut().zip(&other.values) {
            *a += b;
        }
        Ok(())
    }

    /// Component-wise `self -= other`.
    pub fn sub_in_place(&mut self, other: &Point) -> Result<()> {
        self.check_dimensions(other)?;
        for (a, b) in self.values.iter_mut().zip(&other.values) {
            *a -= b;
        }
        Ok(())
    }

    /// Component-wise sum as a new point.
    pub fn checked_add(&self, other: &Point) -> Result<Point> {
        let mut sum = self.clone();
        sum.add_in_place(other)?;
        Ok(sum)
    }

    /// Component-wise difference as a new point.
    pub fn checked_sub(&self, other: &Point) -> Result<Point> {
        let mut diff = self.clone();
        diff.sub_in_place(other)?;
        Ok(diff)
    }

    /// Lexicographic ordering over coordinates by increasing index.
    ///
    /// Unlike `PartialOrd` this is total: coordinates are compared with
    /// [`f64::total_cmp`], so NaN sorts after every number.
    pub fn try_cmp(&self, other: &Point) -> Result<Ordering> {
        self.check_dimensions(other)?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal))
    }

    /// Overwrite coordinates from one line of delimited literals.
    ///
    /// The literal count must equal [`dimensions`](Self::dimensions). The id
    /// is unchanged.
    pub fn read_line(&mut self, line: &str) -> Result<()> {
        let values = parse_coords(line, self.dimensions(), 0)?;
        self.values = values;
        Ok(())
    }

    /// Parse one line into a fresh point of the given dimensionality.
    pub fn parse(dimensions: usize, line: &str) -> Result<Self> {
        let mut point = Self::new(dimensions)?;
        point.read_line(line)?;
        Ok(point)
    }
}

/// Split `line` on [`POINT_VALUE_DELIM`] and parse exactly `expected` reals.
///
/// `NaN` and infinities are rejected: they would never compare equal to
/// themselves, so a cluster could not find them again to relocate them.
///
/// `line_no` only labels [`Error::InvalidLiteral`].
pub(crate) fn parse_coords(line: &str, expected: usize, line_no: usize) -> Result<Vec<f64>> {
    let found = line.split(POINT_VALUE_DELIM).count();
    if found != expected {
        return Err(Error::DimensionMismatch { expected, found });
    }
    line.split(POINT_VALUE_DELIM)
        .map(|literal| {
            let literal = literal.trim();
            match literal.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(Error::InvalidLiteral {
                    line: line_no,
                    literal: literal.to_string(),
                }),
            }
        })
        .collect()
}

impl Clone for Point {
    /// Copies the coordinates under a freshly allocated id.
    fn clone(&self) -> Self {
        self.clone_in(&GLOBAL_IDS)
    }
}

/// Coordinate-wise equality. Ids are ignored; points of different
/// dimensionality are never equal (check [`Point::same_dimensions`] first
/// when that distinction matters).
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.same_dimensions(other) && self.values == other.values
    }
}

/// Lexicographic; `None` when dimensionalities differ or a NaN decides.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_dimensions(other) {
            return None;
        }
        for (a, b) in self.values.iter().zip(&other.values) {
            match a.partial_cmp(b) {
                Some(Ordering::Equal) => continue,
                decided => return decided,
            }
        }
        Some(Ordering::Equal)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        for v in &mut self.values {
            *v *= rhs;
        }
    }
}

/// Division by zero is not guarded: coordinates become infinite or NaN.
impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        for v in &mut self.values {
            *v /= rhs;
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(mut self, rhs: f64) -> Point {
        self *= rhs;
        self
    }
}

impl Mul<f64> for &Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.clone() * rhs
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(mut self, rhs: f64) -> Point {
        self /= rhs;
        self
    }
}

impl Div<f64> for &Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        self.clone() / rhs
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "{POINT_VALUE_DELIM} ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Parses a delimited line, taking the dimensionality from the literal count.
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let dimensions = s.split(POINT_VALUE_DELIM).count();
        Self::parse(dimensions, s)
    }
}
