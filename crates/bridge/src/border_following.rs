//! Suzuki-Abe border following via `imageproc::contours::find_contours`.
//!
//! Every border is reported, including single-pixel ones, so that the
//! parent indices stay valid. Outer borders are oriented to positive signed
//! area and hole borders to negative, whatever direction the follower
//! walked them in.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use keyhole_core::{Contour, Error, Hierarchy, Raster, Result};

use crate::tracer::{ContourTracer, TracedContours};

/// Contour tracer for binary rasters; nonzero samples are foreground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderFollowingTracer;

impl BorderFollowingTracer {
    /// Creates a tracer.
    pub fn new() -> Self {
        Self
    }
}

impl ContourTracer for BorderFollowingTracer {
    fn trace(&self, raster: &Raster) -> Result<TracedContours> {
        let gray = to_gray_image(raster)?;
        let traced = find_contours::<i32>(&gray);

        let mut contours = Vec::with_capacity(traced.len());
        let mut parents = Vec::with_capacity(traced.len());
        for border in traced {
            let pixels: Vec<(i32, i32)> = border
                .points
                .iter()
                .map(|p| (p.x, p.y))
                .collect();
            let mut contour = Contour::from_pixels(&pixels);

            let area = contour.signed_area();
            let flip = match border.border_type {
                BorderType::Outer => area < 0.0,
                BorderType::Hole => area > 0.0,
            };
            if flip {
                let mut points = contour.points().to_vec();
                points.reverse();
                contour = Contour::new(points);
            }

            contours.push(contour);
            parents.push(border.parent);
        }

        let hierarchy = Hierarchy::from_parents(&parents)?;
        log::debug!("Border following traced {} contours", contours.len());
        Ok(TracedContours::new(contours, hierarchy))
    }
}

fn to_gray_image(raster: &Raster) -> Result<GrayImage> {
    let too_large = || Error::InvalidInput("raster too large for contour tracing".to_string());
    let width = u32::try_from(raster.width()).map_err(|_| too_large())?;
    let height = u32::try_from(raster.height()).map_err(|_| too_large())?;
    GrayImage::from_raw(width, height, raster.data().to_vec()).ok_or_else(too_large)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> bool) -> Raster {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| if f(x, y) { 255 } else { 0 })
            .collect();
        Raster::new(width, height, data).unwrap()
    }

    #[test]
    fn test_blank_raster_has_no_contours() {
        let raster = raster_from_fn(8, 8, |_, _| false);
        let traced = BorderFollowingTracer.trace(&raster).unwrap();
        assert!(traced.contours.is_empty());
        assert!(traced.hierarchy.is_empty());
    }

    #[test]
    fn test_square_with_hole_orientation_and_links() {
        let inside = |v: usize| (1..=10).contains(&v);
        let in_hole = |v: usize| (4..=7).contains(&v);
        let raster = raster_from_fn(12, 12, |x, y| {
            inside(x) && inside(y) && !(in_hole(x) && in_hole(y))
        });

        let traced = BorderFollowingTracer::new().trace(&raster).unwrap();
        assert_eq!(traced.contours.len(), 2);
        assert!(traced.hierarchy.validate(2).is_ok());

        let outer = &traced.contours[0];
        let hole = &traced.contours[1];
        assert!(outer.signed_area() > 0.0);
        assert!(hole.signed_area() < 0.0);

        let root = traced.hierarchy.node(0).unwrap();
        assert!(root.is_top_level());
        assert_eq!(root.first_child, Some(1));
        assert_eq!(traced.hierarchy.node(1).unwrap().parent, Some(0));
    }

    #[test]
    fn test_two_blobs_are_siblings() {
        let raster = raster_from_fn(10, 4, |x, y| (1..=2).contains(&y) && x != 5 && x > 0);
        let traced = BorderFollowingTracer.trace(&raster).unwrap();
        assert_eq!(traced.contours.len(), 2);
        assert_eq!(traced.hierarchy.top_level_count(), 2);
        let first = traced.hierarchy.node(0).unwrap();
        assert_eq!(first.next, Some(1));
        assert_eq!(traced.hierarchy.node(1).unwrap().previous, Some(0));
    }
}
