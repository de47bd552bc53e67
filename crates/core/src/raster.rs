//! Single-channel 8-bit raster input.

use crate::error::{Error, Result};

/// Foreground value written by [`Raster::binarize`].
pub const FOREGROUND: u8 = 255;

/// Background value written by [`Raster::binarize`].
pub const BACKGROUND: u8 = 0;

/// An 8-bit grayscale image stored row-major without padding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a raster, checking that `data` holds exactly `width * height` samples.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| too_large(width, height))?;
        if data.len() != expected {
            return Err(Error::InvalidInput(format!(
                "{}x{} single-channel raster needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Converts interleaved RGB8 samples to luma (BT.601 weights).
    pub fn from_rgb8(width: usize, height: usize, rgb: &[u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| too_large(width, height))?;
        if rgb.len() != expected {
            return Err(Error::InvalidInput(format!(
                "{}x{} RGB raster needs {} bytes, got {}",
                width,
                height,
                expected,
                rgb.len()
            )));
        }
        let data = rgb
            .chunks_exact(3)
            .map(|px| {
                let luma =
                    0.299 * f64::from(px[0]) + 0.587 * f64::from(px[1]) + 0.114 * f64::from(px[2]);
                luma.round().clamp(0.0, 255.0) as u8
            })
            .collect();
        Ok(Self { width, height, data })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns true if the raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the sample at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns a two-level copy: samples above `threshold` become
    /// [`FOREGROUND`], all others [`BACKGROUND`].
    pub fn binarize(&self, threshold: u8) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .map(|&v| if v > threshold { FOREGROUND } else { BACKGROUND })
                .collect(),
        }
    }
}

fn too_large(width: usize, height: usize) -> Error {
    Error::InvalidInput(format!("{}x{} raster is too large", width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(Raster::new(2, 2, vec![0; 4]).is_ok());
        let err = Raster::new(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_raster() {
        let raster = Raster::new(0, 5, Vec::new()).unwrap();
        assert!(raster.is_empty());
        assert!(Raster::default().is_empty());
    }

    #[test]
    fn test_get() {
        let raster = Raster::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.get(0, 0), Some(1));
        assert_eq!(raster.get(2, 1), Some(6));
        assert_eq!(raster.get(3, 0), None);
        assert_eq!(raster.get(0, 2), None);
    }

    #[test]
    fn test_binarize() {
        let raster = Raster::new(4, 1, vec![0, 127, 128, 255]).unwrap();
        let bin = raster.binarize(127);
        assert_eq!(bin.data(), &[0, 0, 255, 255]);
        assert_eq!(bin.width(), 4);
        assert_eq!(bin.height(), 1);
    }

    #[test]
    fn test_from_rgb8() {
        let rgb = vec![255, 255, 255, 0, 0, 0, 255, 0, 0];
        let raster = Raster::from_rgb8(3, 1, &rgb).unwrap();
        assert_eq!(raster.data(), &[255, 0, 76]);

        assert!(Raster::from_rgb8(2, 1, &rgb).is_err());
    }
}
