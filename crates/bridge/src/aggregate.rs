//! Bridge collection across all classified outers.

use keyhole_core::Contour;

use crate::bridge::{find_bridge_indexed, Cut};
use crate::classify::OuterContour;
use crate::spatial_index::PointIndex;

/// Computes one cut per owned hole of every outer, in discovery order.
///
/// Discovery order is outer contour order, then hole order within the outer.
/// The outer's index is built once and shared by all of its holes. Outers
/// without holes, empty outers and empty holes produce no cut.
pub fn aggregate_cuts(contours: &[Contour], outers: &[OuterContour]) -> Vec<Cut> {
    let mut cuts = Vec::with_capacity(outers.iter().map(|o| o.holes.len()).sum());

    for outer in outers.iter().filter(|o| o.has_holes()) {
        let outer_points = match contours.get(outer.index) {
            Some(c) if !c.is_empty() => c.points(),
            _ => continue,
        };
        let index = PointIndex::build(outer_points);

        for &hole in &outer.holes {
            let hole_points = match contours.get(hole) {
                Some(c) if !c.is_empty() => c.points(),
                _ => continue,
            };
            let cut = find_bridge_indexed(&index, outer.index, hole_points, hole);
            if let Some(length) = cut.length() {
                log::debug!("Bridge {} -> {}: length {:.3}", outer.index, hole, length);
            }
            cuts.push(cut);
        }
    }

    cuts
}

/// Looks up the cut bridging `outer` to `hole`.
pub fn find_cut(cuts: &[Cut], outer: usize, hole: usize) -> Option<&Cut> {
    cuts.iter().find(|c| c.outer == outer && c.hole == hole)
}
