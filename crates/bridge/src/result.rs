//! Report returned by a processing run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of [`Session::process`](crate::Session::process).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessReport {
    /// Number of traced contours.
    pub contour_count: usize,

    /// Number of contours classified as outer by orientation.
    pub outer_count: usize,

    /// Number of holes owned by some outer.
    pub hole_count: usize,

    /// Number of cuts produced.
    pub cut_count: usize,

    /// Sum of all cut lengths.
    pub total_cut_length: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl ProcessReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            contour_count: 0,
            outer_count: 0,
            hole_count: 0,
            cut_count: 0,
            total_cut_length: 0.0,
            computation_time_ms: 0,
        }
    }

    /// Average cut length, `0.0` when there are no cuts.
    pub fn mean_cut_length(&self) -> f64 {
        if self.cut_count > 0 {
            self.total_cut_length / self.cut_count as f64
        } else {
            0.0
        }
    }
}

impl Default for ProcessReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = ProcessReport::new();
        assert_eq!(report.contour_count, 0);
        assert_eq!(report.cut_count, 0);
        assert_eq!(report.mean_cut_length(), 0.0);
    }

    #[test]
    fn test_mean_cut_length() {
        let mut report = ProcessReport::new();
        report.cut_count = 4;
        report.total_cut_length = 10.0;
        assert!((report.mean_cut_length() - 2.5).abs() < 1e-10);
    }
}
