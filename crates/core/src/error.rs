//! Error types for keyhole.

use thiserror::Error;

/// Result type alias using the keyhole error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the public keyhole operations.
///
/// Degenerate geometry (empty contours, zero-area rings) is never an error;
/// it is skipped where it is encountered. Only input that cannot be processed
/// at all is surfaced here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The raster is empty or its buffer does not match its declared format.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The hierarchy array does not describe the traced contours.
    #[error("invalid hierarchy: {0}")]
    InvalidHierarchy(String),

    /// The contour tracer could not trace the raster.
    #[error("contour tracing failed: {0}")]
    Tracer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("raster is empty".to_string());
        assert_eq!(err.to_string(), "invalid input: raster is empty");

        let err = Error::InvalidHierarchy("link 7 out of range".to_string());
        assert_eq!(err.to_string(), "invalid hierarchy: link 7 out of range");
    }
}
