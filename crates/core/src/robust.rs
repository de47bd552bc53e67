//! Robust orientation and signed-area predicates for traced rings.
//!
//! Contour classification hinges on the sign of a ring's area, so the sign
//! must not flip because of cancellation in large-coordinate rasters. The
//! per-triangle determinants use Shewchuk's adaptive precision arithmetic
//! (through the `robust` crate) and are accumulated with Kahan summation.
//!
//! ## References
//!
//! - Shewchuk, J.R. (1997). "Adaptive Precision Floating-Point Arithmetic and
//!   Fast Robust Predicates for Computational Geometry"
//!
//! ## Example
//!
//! ```rust
//! use keyhole_core::robust::{signed_area_robust, winding, Winding};
//!
//! let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
//! assert_eq!(signed_area_robust(&square), 100.0);
//! assert_eq!(winding(&square, 0.0), Winding::CounterClockwise);
//! ```

use robust::{orient2d, Coord};

/// Winding direction of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Area within the degeneracy tolerance (including empty rings).
    Degenerate,
}

impl Winding {
    /// Returns true for counter-clockwise rings.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Winding::CounterClockwise)
    }

    /// Returns true for clockwise rings.
    #[inline]
    pub fn is_cw(self) -> bool {
        matches!(self, Winding::Clockwise)
    }
}

/// Returns twice the signed area of the triangle `(pa, pb, pc)`.
///
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
pub fn orient2d_raw(pa: (f64, f64), pb: (f64, f64), pc: (f64, f64)) -> f64 {
    orient2d(
        Coord { x: pa.0, y: pa.1 },
        Coord { x: pb.0, y: pb.1 },
        Coord { x: pc.0, y: pc.1 },
    )
}

/// Computes the signed area of a closed ring (shoelace formula).
///
/// The ring is fanned from its first vertex; each fan triangle is evaluated
/// with an exact orientation determinant.
///
/// # Returns
///
/// Positive area if counter-clockwise, negative if clockwise, `0.0` for rings
/// with fewer than three vertices.
pub fn signed_area_robust(polygon: &[(f64, f64)]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }

    let origin = polygon[0];
    let mut sum = 0.0;
    let mut c = 0.0; // Kahan compensation

    for i in 1..n - 1 {
        let term = orient2d_raw(origin, polygon[i], polygon[i + 1]);

        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum / 2.0
}

/// Classifies the winding of a ring by the sign of its signed area.
///
/// Rings with `|area| <= epsilon` are [`Winding::Degenerate`].
pub fn winding(polygon: &[(f64, f64)], epsilon: f64) -> Winding {
    let area = signed_area_robust(polygon);
    if area > epsilon {
        Winding::CounterClockwise
    } else if area < -epsilon {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}
