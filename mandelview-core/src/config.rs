use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::evaluator::EvaluatorConfig;
use crate::navigation::NavigationSettings;
use crate::plane::{ComplexPlane, Raster};

/// Constants of the escape-speed colour policy.
///
/// An escaped point with count `m` under budget `max` gets
/// `hue = (m / max) · hue_span + hue_offset`; green and blue are `hue`
/// scaled by their factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConstants {
    pub hue_span: f64,
    pub hue_offset: f64,
    pub green_factor: f64,
    pub blue_factor: f64,
}

impl Default for ColorConstants {
    fn default() -> Self {
        Self {
            hue_span: 180.0,
            hue_offset: 75.0,
            green_factor: 0.9,
            blue_factor: 0.4,
        }
    }
}

/// Which frame-building pass the viewer uses. Both produce identical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Sequential,
    /// Rows are computed concurrently on the rayon pool.
    Parallel,
}

/// Startup configuration for a viewer session.
///
/// Every field falls back to its default when missing, so a partial JSON
/// document is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub raster_width: u32,
    pub raster_height: u32,
    pub default_plane: ComplexPlane,
    pub initial_max_iterations: u32,
    /// Iterations added to the budget on every click-zoom.
    pub iteration_step: u32,
    pub colors: ColorConstants,
    pub render_mode: RenderMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            raster_width: Raster::DEFAULT_WIDTH,
            raster_height: Raster::DEFAULT_HEIGHT,
            default_plane: ComplexPlane::default(),
            initial_max_iterations: EvaluatorConfig::DEFAULT_MAX_ITERATIONS,
            iteration_step: NavigationSettings::DEFAULT_ITERATION_STEP,
            colors: ColorConstants::default(),
            render_mode: RenderMode::default(),
        }
    }
}

impl ViewerConfig {
    /// Check every value the viewer will rely on.
    pub fn validate(&self) -> crate::Result<()> {
        self.raster()?;
        self.evaluator()?;
        let c = &self.colors;
        let factors = [c.hue_span, c.hue_offset, c.green_factor, c.blue_factor];
        if factors.iter().any(|f| !f.is_finite()) {
            return Err(CoreError::InvalidColors {
                reason: format!("colour constants must be finite, got {factors:?}"),
            });
        }
        Ok(())
    }

    pub fn raster(&self) -> crate::Result<Raster> {
        Raster::new(self.raster_width, self.raster_height)
    }

    pub fn evaluator(&self) -> crate::Result<EvaluatorConfig> {
        EvaluatorConfig::new(self.initial_max_iterations)
    }

    pub fn navigation_settings(&self) -> crate::Result<NavigationSettings> {
        Ok(NavigationSettings {
            default_plane: self.default_plane,
            default_evaluator: self.evaluator()?,
            iteration_step: self.iteration_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_view() {
        let cfg = ViewerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.raster().unwrap(), Raster::new(800, 500).unwrap());
        assert_eq!(cfg.evaluator().unwrap().max_iterations, 30);
        assert_eq!(cfg.iteration_step, 10);
        assert_eq!(cfg.default_plane, ComplexPlane::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg: ViewerConfig =
            serde_json::from_str(r#"{ "raster_width": 320, "render_mode": "parallel" }"#).unwrap();
        assert_eq!(cfg.raster_width, 320);
        assert_eq!(cfg.raster_height, 500);
        assert_eq!(cfg.render_mode, RenderMode::Parallel);
        assert_eq!(cfg.colors, ColorConstants::default());
    }

    #[test]
    fn inverted_plane_rejected_on_load() {
        let json = r#"{ "default_plane": { "re_start": 1.0, "re_end": -2.0, "im_start": -1.5, "im_end": 0.5 } }"#;
        assert!(serde_json::from_str::<ViewerConfig>(json).is_err());
    }

    #[test]
    fn zero_dimensions_fail_validation() {
        let cfg = ViewerConfig {
            raster_height: 0,
            ..ViewerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidRaster { width: 800, height: 0 })
        ));
    }

    #[test]
    fn zero_budget_fails_validation() {
        let cfg = ViewerConfig {
            initial_max_iterations: 0,
            ..ViewerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(CoreError::InvalidMaxIterations(0)));
    }
}
