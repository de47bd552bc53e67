//! Configuration for a bridging run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BridgeConfig {
    /// Binarization level applied to the raster before tracing.
    /// Samples strictly above it become foreground.
    pub threshold: u8,

    /// Contours with `|signed area| <= area_epsilon` are degenerate and never
    /// become outers or holes. `0.0` only drops exactly zero-area contours.
    pub area_epsilon: f64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            threshold: 127,
            area_epsilon: 0.0,
        }
    }
}

impl BridgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the binarization threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the degenerate-area tolerance. Negative values are clamped to zero.
    pub fn with_area_epsilon(mut self, epsilon: f64) -> Self {
        self.area_epsilon = epsilon.max(0.0);
        self
    }
}
