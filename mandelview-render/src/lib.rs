pub mod buffer;
pub mod color;
pub mod error;
pub mod renderer;
pub mod viewer;

pub use buffer::PixelBuffer;
pub use color::{ColorMapper, HueBaseline, Rgb, BLACK};
pub use error::{DisplayError, RenderError};
pub use renderer::{render, render_into, render_parallel};
pub use viewer::{Display, GestureSource, RunSummary, Step, Viewer};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
