use thiserror::Error;

/// Errors originating from the plane, evaluator, and navigation model.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid plane: {reason}")]
    InvalidPlane { reason: String },

    #[error("invalid raster dimensions: {width}×{height}")]
    InvalidRaster { width: u32, height: u32 },

    #[error("pixel ({px}, {py}) outside {width}×{height} raster")]
    PixelOutOfBounds {
        px: u32,
        py: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid colour constants: {reason}")]
    InvalidColors { reason: String },

    #[error("zoom limit reached: span would shrink to {width:e}×{height:e}")]
    ZoomLimit { width: f64, height: f64 },
}
