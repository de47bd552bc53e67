//! # Keyhole Core
//!
//! Shared primitives for keyhole bridging: traced contours, their nesting
//! hierarchy, winding predicates and the raster input type.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Point`], [`Contour`], [`ContourKind`]
//! - **Hierarchy**: [`Hierarchy`], [`HierarchyNode`] - index-addressed nesting links
//! - **Predicates**: [`robust`] - exact orientation and signed area
//! - **Input**: [`Raster`] - 8-bit single-channel image
//!
//! ## Orientation Convention
//!
//! A contour with positive signed area is an outer (fill) boundary, negative
//! signed area marks a hole. Zero-area and empty contours are degenerate.
//!
//! ```rust
//! use keyhole_core::{Contour, ContourKind};
//!
//! let square = Contour::from_pixels(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
//! assert_eq!(square.kind(0.0), ContourKind::Outer);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod hierarchy;
pub mod raster;
pub mod robust;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{point_distance, squared_distance, Contour, ContourKind, Point};
pub use hierarchy::{Hierarchy, HierarchyNode};
pub use raster::Raster;
pub use robust::{signed_area_robust, Winding};
