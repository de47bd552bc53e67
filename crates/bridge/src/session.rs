//! Processing session: runs the pipeline and holds the last result.

use std::time::Instant;

use keyhole_core::{Contour, Error, Hierarchy, Raster, Result};

use crate::aggregate::aggregate_cuts;
use crate::bridge::Cut;
use crate::classify::classify_contours;
use crate::config::BridgeConfig;
use crate::merge::{merge_paths, MergedPath};
use crate::metrics::{summarize, total_cut_length, Summary};
use crate::result::ProcessReport;
use crate::tracer::{ContourTracer, TracedContours};

/// Contours, hierarchy and cuts of the last successful run.
///
/// Every successful [`process`](Session::process) call replaces the whole
/// state. A failed call leaves the previous state untouched.
///
/// # Example
///
/// ```rust
/// use keyhole_bridge::{Session, TracedContours};
/// use keyhole_core::{Contour, Hierarchy};
///
/// let contours = vec![
///     Contour::from_pixels(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
///     Contour::from_pixels(&[(4, 4), (5, 6), (6, 4)]),
/// ];
/// let hierarchy = Hierarchy::from_links(&[[-1, -1, 1, -1], [-1, -1, -1, 0]]).unwrap();
///
/// let mut session = Session::default();
/// let report = session
///     .process_traced(TracedContours::new(contours, hierarchy))
///     .unwrap();
///
/// assert_eq!(report.cut_count, 1);
/// assert_eq!(session.merged_paths()[0].len(), 11);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: BridgeConfig,
    contours: Vec<Contour>,
    hierarchy: Hierarchy,
    cuts: Vec<Cut>,
}

impl Session {
    /// Creates an empty session with the given configuration.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Binarizes `raster`, traces it and recomputes all bridges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for an empty raster, the tracer's error if
    /// tracing fails, [`Error::InvalidHierarchy`] if the traced hierarchy does
    /// not match the contours.
    pub fn process<T>(&mut self, raster: &Raster, tracer: &T) -> Result<ProcessReport>
    where
        T: ContourTracer + ?Sized,
    {
        if raster.is_empty() {
            log::warn!(
                "Rejecting empty {}x{} raster",
                raster.width(),
                raster.height()
            );
            return Err(Error::InvalidInput("raster is empty".to_string()));
        }

        let start = Instant::now();
        let binary = raster.binarize(self.config.threshold);
        let traced = tracer.trace(&binary)?;
        self.run(traced, start)
    }

    /// Recomputes all bridges from already traced contours.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHierarchy`] if the hierarchy does not match the contours.
    pub fn process_traced(&mut self, traced: TracedContours) -> Result<ProcessReport> {
        self.run(traced, Instant::now())
    }

    fn run(&mut self, traced: TracedContours, start: Instant) -> Result<ProcessReport> {
        let TracedContours {
            contours,
            hierarchy,
        } = traced;
        hierarchy.validate(contours.len())?;

        let outers = classify_contours(&contours, &hierarchy, self.config.area_epsilon);
        let cuts = aggregate_cuts(&contours, &outers);

        let report = ProcessReport {
            contour_count: contours.len(),
            outer_count: outers.len(),
            hole_count: outers.iter().map(|o| o.holes.len()).sum(),
            cut_count: cuts.len(),
            total_cut_length: total_cut_length(&cuts),
            computation_time_ms: start.elapsed().as_millis() as u64,
        };

        log::info!(
            "Processed {} contours: {} outers, {} cuts, cut length {:.2} (mean {:.2}) in {} ms",
            report.contour_count,
            report.outer_count,
            report.cut_count,
            report.total_cut_length,
            report.mean_cut_length(),
            report.computation_time_ms
        );

        self.contours = contours;
        self.hierarchy = hierarchy;
        self.cuts = cuts;
        Ok(report)
    }

    /// Contours of the last run.
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Hierarchy of the last run.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Cuts of the last run, in discovery order.
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// Builds the merged single-stroke paths. Recomputed on every call.
    pub fn merged_paths(&self) -> Vec<MergedPath> {
        merge_paths(&self.contours, &self.cuts, self.config.area_epsilon)
    }

    /// Sum of all cut lengths.
    pub fn total_cut_length(&self) -> f64 {
        total_cut_length(&self.cuts)
    }

    /// Summary statistics of the last run.
    pub fn summary(&self) -> Summary {
        summarize(&self.contours, &self.hierarchy, &self.cuts)
    }

    /// Human-readable summary, one statistic per line.
    pub fn summary_text(&self) -> String {
        self.summary().to_string()
    }
}
