pub mod complex;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod navigation;
pub mod plane;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use config::{ColorConstants, RenderMode, ViewerConfig};
pub use error::CoreError;
pub use evaluator::{iterations, EvaluatorConfig};
pub use navigation::{Gesture, NavigationController, NavigationSettings, Transition};
pub use plane::{ComplexPlane, Raster};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
