//! Keyhole bridging for traced raster regions.
//!
//! Given the nested contours of a raster region (outer boundaries and the
//! holes inside them), this crate connects every hole to its enclosing outer
//! boundary with the shortest possible bridge and fuses each outer plus its
//! holes into one continuous point sequence. The result can be traversed in
//! a single stroke, e.g. as a cutting or engraving toolpath, or rendered as
//! an outline without disconnected islands.
//!
//! # Algorithm
//!
//! 1. **Binarization**: threshold the raster to two levels
//! 2. **Tracing**: a [`ContourTracer`] returns contours with a tree
//!    hierarchy; `BorderFollowingTracer` (feature `border-following`) does
//!    Suzuki-Abe border following
//! 3. **Classification**: positive signed area marks outers, negatively
//!    oriented direct children are their holes
//! 4. **Bridge search**: per outer, an R*-tree over its points answers one
//!    nearest-neighbor query per hole point; the global minimum is the
//!    exact closest pair
//! 5. **Merging**: each bridge adds a zero-width detour around its hole to
//!    the outer's point sequence
//!
//! # Scope
//!
//! Holes of holes are not chained (an island inside a hole is bridged to its
//! own holes only), bridge lengths are minimized per hole rather than jointly,
//! and merged paths are not guaranteed to be free of self-intersections.

pub mod aggregate;
#[cfg(feature = "border-following")]
pub mod border_following;
pub mod bridge;
pub mod classify;
pub mod config;
pub mod merge;
pub mod metrics;
pub mod result;
pub mod session;
pub mod spatial_index;
pub mod tracer;

pub use aggregate::{aggregate_cuts, find_cut};
#[cfg(feature = "border-following")]
pub use border_following::BorderFollowingTracer;
pub use bridge::{find_bridge, find_bridge_indexed, Cut, CutEndpoints};
pub use classify::{classify_contours, OuterContour};
pub use config::BridgeConfig;
pub use merge::{merge_paths, MergedPath};
pub use metrics::{summarize, total_cut_length, Summary};
pub use result::ProcessReport;
pub use session::Session;
pub use spatial_index::{Neighbor, PointIndex};
pub use tracer::{ContourTracer, TracedContours};
