use tracing::{debug, warn};

use crate::complex::Complex;
use crate::evaluator::EvaluatorConfig;
use crate::plane::{ComplexPlane, Raster};

/// A user gesture, already decoded from raw platform events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Quit,
    /// Re-centre on the clicked pixel and zoom in.
    Click { x: u32, y: u32 },
    /// Halve the plane around its origin.
    ZoomInPlace,
    /// Back to the default plane and budget.
    Reset,
}

/// What the caller should do after a gesture has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// View state changed; rebuild the frame.
    Redraw,
    Quit,
}

/// Defaults the controller resets to, and how fast the budget grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    pub default_plane: ComplexPlane,
    pub default_evaluator: EvaluatorConfig,
    pub iteration_step: u32,
}

impl NavigationSettings {
    pub const DEFAULT_ITERATION_STEP: u32 = 10;
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            default_plane: ComplexPlane::default(),
            default_evaluator: EvaluatorConfig::default(),
            iteration_step: Self::DEFAULT_ITERATION_STEP,
        }
    }
}

/// Sole owner of the mutable view state.
///
/// Gestures are applied one at a time; the plane and budget only change
/// inside [`apply`](Self::apply), never while a frame is being built.
#[derive(Debug, Clone)]
pub struct NavigationController {
    plane: ComplexPlane,
    evaluator: EvaluatorConfig,
    settings: NavigationSettings,
}

impl NavigationController {
    pub fn new(settings: NavigationSettings) -> Self {
        Self {
            plane: settings.default_plane,
            evaluator: settings.default_evaluator,
            settings,
        }
    }

    pub fn plane(&self) -> &ComplexPlane {
        &self.plane
    }

    pub fn evaluator(&self) -> &EvaluatorConfig {
        &self.evaluator
    }

    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    /// Apply a gesture to the view state.
    ///
    /// On error the plane and budget are left exactly as they were.
    pub fn apply(&mut self, gesture: Gesture, raster: Raster) -> crate::Result<Transition> {
        match gesture {
            Gesture::Quit => return Ok(Transition::Quit),
            Gesture::Click { x, y } => self.recenter_on_pixel(x, y, raster)?,
            Gesture::ZoomInPlace => {
                if let Err(e) = self.plane.zoom_in_place() {
                    warn!(%e, "Zoom in place rejected");
                    return Err(e);
                }
            }
            Gesture::Reset => self.reset(),
        }
        debug!(
            ?gesture,
            re_start = self.plane.re_start(),
            re_end = self.plane.re_end(),
            im_start = self.plane.im_start(),
            im_end = self.plane.im_end(),
            max_iterations = self.evaluator.max_iterations,
            "Gesture applied"
        );
        Ok(Transition::Redraw)
    }

    /// Restore the default plane and budget.
    pub fn reset(&mut self) {
        self.plane = self.settings.default_plane;
        self.evaluator = self.settings.default_evaluator;
    }

    /// Map the pixel under the cursor to the plane without changing
    /// anything, logging the axes for diagnostics.
    ///
    /// The returned coordinate is truncated to three decimals for display.
    pub fn probe(&self, px: u32, py: u32, raster: Raster) -> crate::Result<Complex> {
        let c = self.plane.checked_pixel_to_complex(px, py, raster)?;
        let shown = Complex::new(truncate3(c.re), truncate3(c.im));
        debug!(
            px,
            py,
            width = self.plane.width(),
            height = self.plane.height(),
            re_start = self.plane.re_start(),
            re_end = self.plane.re_end(),
            re = shown.re,
            im = shown.im,
            "Cursor probe"
        );
        Ok(shown)
    }

    fn recenter_on_pixel(&mut self, x: u32, y: u32, raster: Raster) -> crate::Result<()> {
        let target = self.plane.checked_pixel_to_complex(x, y, raster)?;
        if let Err(e) = self.plane.recenter_and_zoom(target) {
            warn!(%e, %target, "Re-centre zoom rejected");
            return Err(e);
        }
        self.evaluator.increase_iterations(self.settings.iteration_step);
        Ok(())
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavigationSettings::default())
    }
}

#[inline]
fn truncate3(v: f64) -> f64 {
    (v * 1000.0).trunc() / 1000.0
}
