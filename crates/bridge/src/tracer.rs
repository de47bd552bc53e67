//! Contour tracer seam.
//!
//! A tracer turns a binary raster into ordered boundary point sequences. It
//! must report every contour at every nesting depth together with full
//! hierarchy links (tree retrieval), one hierarchy node per contour.
//! `BorderFollowingTracer` provides one backed by `imageproc`; closures
//! and custom types can be plugged in as well.

use keyhole_core::{Contour, Hierarchy, Raster, Result};

/// Contours of one trace plus their parallel hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TracedContours {
    /// Traced boundaries, indexed by contour id.
    pub contours: Vec<Contour>,
    /// Nesting links, parallel to `contours`.
    pub hierarchy: Hierarchy,
}

impl TracedContours {
    /// Bundles contours with their hierarchy.
    pub fn new(contours: Vec<Contour>, hierarchy: Hierarchy) -> Self {
        Self {
            contours,
            hierarchy,
        }
    }
}

/// Traces the boundaries of a two-level raster.
pub trait ContourTracer {
    /// Traces all foreground boundaries of `raster`, whose samples are
    /// either 0 or 255.
    fn trace(&self, raster: &Raster) -> Result<TracedContours>;
}

impl<F> ContourTracer for F
where
    F: Fn(&Raster) -> Result<TracedContours>,
{
    fn trace(&self, raster: &Raster) -> Result<TracedContours> {
        self(raster)
    }
}
