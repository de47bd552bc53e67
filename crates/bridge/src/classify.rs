//! Outer/hole classification from the contour hierarchy.
//!
//! An outer contour is any non-empty contour with positive signed area. Its
//! holes are the direct children (reached through the first-child link and
//! then the next-sibling chain) with negative signed area. Grandchildren are
//! never holes of the outer; a filled island inside a hole is an outer of its
//! own.

use keyhole_core::{Contour, ContourKind, Hierarchy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An outer contour and the holes it directly owns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OuterContour {
    /// Contour index of the outer boundary.
    pub index: usize,
    /// Contour indices of owned holes, in sibling-chain order.
    pub holes: Vec<usize>,
}

impl OuterContour {
    /// Returns true if the outer owns at least one hole.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }
}

/// Classifies every contour and collects the holes owned by each outer.
///
/// Outers are returned in ascending contour index, including those without
/// holes. Degenerate contours are skipped silently. A hole reachable from
/// more than one outer (only possible with a malformed hierarchy) is kept by
/// the first outer that reaches it.
pub fn classify_contours(
    contours: &[Contour],
    hierarchy: &Hierarchy,
    area_epsilon: f64,
) -> Vec<OuterContour> {
    let kinds: Vec<ContourKind> = contours.iter().map(|c| c.kind(area_epsilon)).collect();
    let mut claimed = vec![false; contours.len()];
    let mut outers = Vec::new();

    for (index, kind) in kinds.iter().enumerate() {
        if *kind != ContourKind::Outer {
            continue;
        }

        let mut holes = Vec::new();
        let mut child = hierarchy.node(index).and_then(|n| n.first_child);
        let mut visited = 0;

        while let Some(c) = child {
            if visited == contours.len() {
                log::warn!(
                    "Sibling chain under contour {} does not terminate, stopping after {} links",
                    index,
                    visited
                );
                break;
            }
            visited += 1;

            if kinds.get(c) == Some(&ContourKind::Hole) {
                if claimed[c] {
                    log::debug!("Hole {} already owned, skipping for outer {}", c, index);
                } else {
                    claimed[c] = true;
                    holes.push(c);
                }
            }
            child = hierarchy.node(c).and_then(|n| n.next);
        }

        log::debug!("Outer contour {} owns {} hole(s)", index, holes.len());
        outers.push(OuterContour { index, holes });
    }

    outers
}
