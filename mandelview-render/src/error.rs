use thiserror::Error;

/// Failures reported by a display back-end.
#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    #[error("display unavailable: {0}")]
    Unavailable(String),

    #[error("frame is {got_width}×{got_height}, display expects {width}×{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        got_width: u32,
        got_height: u32,
    },
}

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("buffer is {width}×{height}, raster is {raster_width}×{raster_height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        raster_width: u32,
        raster_height: u32,
    },

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error(transparent)]
    Core(#[from] mandelview_core::CoreError),
}
