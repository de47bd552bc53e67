//! Single-stroke path assembly.
//!
//! Each outer contour becomes one point sequence: the outer's own points in
//! traced order, followed by one detour per bridge in cut order:
//!
//! ```text
//! outer_point, hole_point, <every hole point>, hole_point, outer_point
//! ```
//!
//! The repeated endpoints retrace the bridge at zero width so the stroke
//! returns to the outer boundary.
//!
//! Detours are appended after the whole outer ring, not spliced in at the
//! outer endpoint's position. With several holes, or a bridge far from the
//! ring's start, the sequence may cross itself.

use keyhole_core::{Contour, Point};

use crate::bridge::Cut;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One outer contour fused with its bridged holes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergedPath {
    /// Contour index of the outer boundary the path starts on.
    pub outer: usize,
    /// Points in stroke order.
    pub points: Vec<Point>,
}

impl MergedPath {
    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Builds one merged path per non-degenerate outer contour.
///
/// Paths are ordered by outer contour index. Sentinel cuts and cuts whose
/// hole index is out of range are ignored.
pub fn merge_paths(contours: &[Contour], cuts: &[Cut], area_epsilon: f64) -> Vec<MergedPath> {
    contours
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_outer(area_epsilon))
        .map(|(index, contour)| merge_outer(contours, index, contour, cuts))
        .collect()
}

fn merge_outer(contours: &[Contour], index: usize, outer: &Contour, cuts: &[Cut]) -> MergedPath {
    let mut points = outer.points().to_vec();

    for cut in cuts.iter().filter(|c| c.outer == index) {
        let (endpoints, hole) = match (cut.endpoints, contours.get(cut.hole)) {
            (Some(e), Some(h)) => (e, h),
            _ => continue,
        };
        points.reserve(hole.len() + 4);
        points.push(endpoints.outer_point);
        points.push(endpoints.hole_point);
        points.extend_from_slice(hole.points());
        points.push(endpoints.hole_point);
        points.push(endpoints.outer_point);
    }

    MergedPath { outer: index, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::CutEndpoints;

    fn outer_square() -> Contour {
        Contour::from_pixels(&[(0, 0), (10, 0), (10, 10), (0, 10)])
    }

    fn hole_triangle() -> Contour {
        Contour::from_pixels(&[(4, 4), (5, 6), (6, 4)])
    }

    fn cut(outer: usize, hole: usize, outer_point: Point, hole_point: Point) -> Cut {
        Cut {
            outer,
            hole,
            endpoints: Some(CutEndpoints {
                outer_point,
                hole_point,
            }),
        }
    }

    #[test]
    fn test_outer_without_cuts_is_unchanged() {
        let contours = vec![outer_square()];
        let paths = merge_paths(&contours, &[], 0.0);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].outer, 0);
        assert_eq!(paths[0].points, contours[0].points());
    }

    #[test]
    fn test_single_hole_layout() {
        let contours = vec![outer_square(), hole_triangle()];
        let cuts = vec![cut(0, 1, (0.0, 0.0), (4.0, 4.0))];

        let paths = merge_paths(&contours, &cuts, 0.0);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 4 + 4 + 3);
        assert_eq!(
            paths[0].points,
            vec![
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (0.0, 10.0),
                (0.0, 0.0),
                (4.0, 4.0),
                (4.0, 4.0),
                (5.0, 6.0),
                (6.0, 4.0),
                (4.0, 4.0),
                (0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_detours_follow_cut_order() {
        let contours = vec![
            Contour::from_pixels(&[(0, 0), (100, 0), (100, 100), (0, 100)]),
            Contour::from_pixels(&[(80, 80), (80, 90), (90, 90), (90, 80)]),
            Contour::from_pixels(&[(10, 10), (10, 20), (20, 20), (20, 10)]),
        ];
        let cuts = vec![
            cut(0, 1, (100.0, 100.0), (90.0, 90.0)),
            cut(0, 2, (0.0, 0.0), (10.0, 10.0)),
        ];

        let path = &merge_paths(&contours, &cuts, 0.0)[0];
        assert_eq!(path.len(), 4 + (4 + 4) + (4 + 4));
        assert_eq!(path.points[4], (100.0, 100.0));
        assert_eq!(path.points[12], (0.0, 0.0));
        assert_eq!(path.points[13], (10.0, 10.0));
    }

    #[test]
    fn test_skips_holes_and_sentinels() {
        let contours = vec![outer_square(), hole_triangle(), Contour::default()];
        let cuts = vec![Cut::sentinel(0, 1), cut(0, 9, (0.0, 0.0), (1.0, 1.0))];

        let paths = merge_paths(&contours, &cuts, 0.0);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 4);
    }
}
