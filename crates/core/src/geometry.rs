//! Contour geometry.

use crate::robust::{signed_area_robust, winding, Winding};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point `(x, y)` in raster coordinates.
pub type Point = (f64, f64);

/// Euclidean distance between two points.
#[inline]
pub fn point_distance(a: Point, b: Point) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

/// Role of a contour derived from its winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContourKind {
    /// Encloses filled area (positive signed area).
    Outer,
    /// Bounds an excluded region (negative signed area).
    Hole,
    /// Empty or zero-area; excluded from bridging.
    Degenerate,
}

/// An ordered, closed sequence of points tracing one region boundary.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Creates a contour from points in traversal order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a contour from integer pixel coordinates.
    pub fn from_pixels(pixels: &[(i32, i32)]) -> Self {
        Self {
            points: pixels
                .iter()
                .map(|&(x, y)| (f64::from(x), f64::from(y)))
                .collect(),
        }
    }

    /// Returns the points in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area: positive for counter-clockwise traversal, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area_robust(&self.points)
    }

    /// Classifies the contour; `|area| <= area_epsilon` counts as degenerate.
    pub fn kind(&self, area_epsilon: f64) -> ContourKind {
        if self.points.is_empty() {
            return ContourKind::Degenerate;
        }
        match winding(&self.points, area_epsilon) {
            Winding::CounterClockwise => ContourKind::Outer,
            Winding::Clockwise => ContourKind::Hole,
            Winding::Degenerate => ContourKind::Degenerate,
        }
    }

    /// Returns true if the contour is a non-degenerate outer boundary.
    pub fn is_outer(&self, area_epsilon: f64) -> bool {
        self.kind(area_epsilon) == ContourKind::Outer
    }

    /// Returns true if the contour is a non-degenerate hole boundary.
    pub fn is_hole(&self, area_epsilon: f64) -> bool {
        self.kind(area_epsilon) == ContourKind::Hole
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
