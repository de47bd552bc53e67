//! Bridge (cut) search between an outer contour and one of its holes.
//!
//! A bridge joins the globally closest pair of points between the two
//! contours. The outer contour's points are loaded into a [`PointIndex`];
//! every hole point then asks for its nearest outer point and the overall
//! minimum is kept.
//!
//! # Exactness
//!
//! The closest pair `(a*, b*)` satisfies `a* = nearest_outer(b*)`, so taking
//! the minimum of `|b - nearest_outer(b)|` over all hole points `b` yields
//! the true bichromatic closest pair, not an approximation.
//!
//! # Ties
//!
//! Among hole points reaching the same minimum, the first one in traversal
//! order wins.

use keyhole_core::{point_distance, Point};

use crate::spatial_index::PointIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two ends of a bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutEndpoints {
    /// Point on the outer contour.
    pub outer_point: Point,
    /// Point on the hole contour.
    pub hole_point: Point,
}

impl CutEndpoints {
    /// Euclidean distance between the two ends.
    pub fn length(&self) -> f64 {
        point_distance(self.outer_point, self.hole_point)
    }
}

/// A bridge from an outer contour to one hole it owns.
///
/// A cut without endpoints is a sentinel: the search had nothing to compare
/// because one side was empty. Consumers treat sentinels as absent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cut {
    /// Contour index of the outer boundary.
    pub outer: usize,
    /// Contour index of the hole.
    pub hole: usize,
    /// Closest point pair, `None` for a sentinel.
    pub endpoints: Option<CutEndpoints>,
}

impl Cut {
    /// Creates a sentinel cut carrying only the contour indices.
    pub fn sentinel(outer: usize, hole: usize) -> Self {
        Self {
            outer,
            hole,
            endpoints: None,
        }
    }

    /// Returns true if the cut has no endpoints.
    pub fn is_sentinel(&self) -> bool {
        self.endpoints.is_none()
    }

    /// Bridge length, `None` for a sentinel.
    pub fn length(&self) -> Option<f64> {
        self.endpoints.as_ref().map(CutEndpoints::length)
    }
}

/// Finds the shortest bridge between `outer` and `hole`.
///
/// Builds a throwaway index over `outer`. When bridging several holes of the
/// same outer, build the index once and call [`find_bridge_indexed`].
///
/// Returns a sentinel cut if either point set is empty.
pub fn find_bridge(outer: &[Point], outer_index: usize, hole: &[Point], hole_index: usize) -> Cut {
    if outer.is_empty() || hole.is_empty() {
        return Cut::sentinel(outer_index, hole_index);
    }
    let index = PointIndex::build(outer);
    find_bridge_indexed(&index, outer_index, hole, hole_index)
}

/// Finds the shortest bridge from `hole` to the points held by `outer_index_tree`.
///
/// Returns a sentinel cut if the index or the hole is empty.
pub fn find_bridge_indexed(
    outer_index_tree: &PointIndex,
    outer_index: usize,
    hole: &[Point],
    hole_index: usize,
) -> Cut {
    let mut best: Option<(f64, CutEndpoints)> = None;

    for &hole_point in hole {
        let neighbor = match outer_index_tree.nearest(hole_point) {
            Some(n) => n,
            None => break,
        };
        let improves = match &best {
            Some((d, _)) => neighbor.distance_sq < *d,
            None => true,
        };
        if improves {
            best = Some((
                neighbor.distance_sq,
                CutEndpoints {
                    outer_point: neighbor.point,
                    hole_point,
                },
            ));
        }
    }

    Cut {
        outer: outer_index,
        hole: hole_index,
        endpoints: best.map(|(_, endpoints)| endpoints),
    }
}
