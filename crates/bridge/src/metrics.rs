//! Summary statistics of a bridging run.
//!
//! The outer count here is the number of top-level contours (no parent in
//! the hierarchy), not the number of positively oriented contours used for
//! bridging and merging. The two can differ when a clockwise ring sits at
//! the root of the hierarchy.

use std::fmt;

use keyhole_core::{Contour, Hierarchy};

use crate::bridge::Cut;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts and totals derived from contours, hierarchy and cuts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Number of traced contours.
    pub total_contours: usize,
    /// Contours without a parent in the hierarchy.
    pub top_level_contours: usize,
    /// Hierarchy entries that have a parent.
    pub inner_contours: usize,
    /// Number of cuts.
    pub cut_count: usize,
    /// Sum of all cut lengths.
    pub total_cut_length: f64,
}

/// Sum of Euclidean lengths of all non-sentinel cuts.
pub fn total_cut_length(cuts: &[Cut]) -> f64 {
    cuts.iter().filter_map(Cut::length).sum()
}

/// Computes the run summary.
pub fn summarize(contours: &[Contour], hierarchy: &Hierarchy, cuts: &[Cut]) -> Summary {
    let top_level_contours = hierarchy.top_level_count();
    Summary {
        total_contours: contours.len(),
        top_level_contours,
        inner_contours: hierarchy.len() - top_level_contours,
        cut_count: cuts.len(),
        total_cut_length: total_cut_length(cuts),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contours found: {}", self.total_contours)?;
        writeln!(f, "Outer contours: {}", self.top_level_contours)?;
        writeln!(f, "Holes: {}", self.inner_contours)?;
        writeln!(f, "Cuts made: {}", self.cut_count)?;
        writeln!(f, "Total cut length: {:.2}", self.total_cut_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::CutEndpoints;
    use approx::assert_relative_eq;

    fn cut(outer_point: (f64, f64), hole_point: (f64, f64)) -> Cut {
        Cut {
            outer: 0,
            hole: 1,
            endpoints: Some(CutEndpoints {
                outer_point,
                hole_point,
            }),
        }
    }

    #[test]
    fn test_total_cut_length() {
        let cuts = vec![
            cut((0.0, 0.0), (3.0, 4.0)),
            cut((1.0, 1.0), (1.0, 3.0)),
            Cut::sentinel(2, 3),
        ];
        assert_relative_eq!(total_cut_length(&cuts), 7.0);
        assert_eq!(total_cut_length(&[]), 0.0);
    }

    #[test]
    fn test_summarize_counts_top_level() {
        let contours = vec![Contour::default(); 4];
        let hierarchy = Hierarchy::from_links(&[
            [3, -1, 1, -1],
            [-1, -1, 2, 0],
            [-1, -1, -1, 1],
            [-1, 0, -1, -1],
        ])
        .unwrap();
        let cuts = vec![cut((0.0, 0.0), (0.0, 2.5))];

        let summary = summarize(&contours, &hierarchy, &cuts);
        assert_eq!(summary.total_contours, 4);
        assert_eq!(summary.top_level_contours, 2);
        assert_eq!(summary.inner_contours, 2);
        assert_eq!(summary.cut_count, 1);
        assert_relative_eq!(summary.total_cut_length, 2.5);
    }

    #[test]
    fn test_display() {
        let summary = Summary {
            total_contours: 3,
            top_level_contours: 2,
            inner_contours: 1,
            cut_count: 1,
            total_cut_length: 5.656854,
        };
        assert_eq!(
            summary.to_string(),
            "Contours found: 3\nOuter contours: 2\nHoles: 1\nCuts made: 1\nTotal cut length: 5.66\n"
        );
    }
}
