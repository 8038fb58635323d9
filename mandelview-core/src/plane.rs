use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;

/// Smallest span, relative to the largest bound magnitude, that a zoom may
/// produce. This only keeps the span itself representable; pixel steps on a
/// wide raster stop being distinct well before this limit.
pub const MIN_RELATIVE_SPAN: f64 = 16.0 * f64::EPSILON;

/// Pixel dimensions of the raster the plane is mapped onto.
///
/// Fixed at startup; the display collaborator owns a surface of exactly
/// this size. Both dimensions are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Raster {
    width: u32,
    height: u32,
}

/// Deserialization goes through [`Raster::new`] so an empty raster can't be
/// loaded.
impl<'de> Deserialize<'de> for Raster {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            width: u32,
            height: u32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

impl Raster {
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 500;

    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidRaster { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the raster.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px < self.width && py < self.height
    }
}

impl Default for Raster {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// The visible rectangle of the complex plane.
///
/// Both spans are kept strictly positive: every mutating operation either
/// produces a representable rectangle or leaves the plane untouched and
/// returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexPlane {
    re_start: f64,
    re_end: f64,
    im_start: f64,
    im_end: f64,
}

/// Deserialization goes through [`ComplexPlane::new`] so a config file can't
/// smuggle in an inverted or non-finite rectangle.
impl<'de> Deserialize<'de> for ComplexPlane {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            re_start: f64,
            re_end: f64,
            im_start: f64,
            im_end: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.re_start, raw.re_end, raw.im_start, raw.im_end)
            .map_err(serde::de::Error::custom)
    }
}

impl ComplexPlane {
    pub const DEFAULT_RE_START: f64 = -2.0;
    pub const DEFAULT_RE_END: f64 = 1.0;
    pub const DEFAULT_IM_START: f64 = -1.5;
    pub const DEFAULT_IM_END: f64 = 0.5;

    /// Create a plane with explicit bounds.
    pub fn new(re_start: f64, re_end: f64, im_start: f64, im_end: f64) -> crate::Result<Self> {
        let bounds = [re_start, re_end, im_start, im_end];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(CoreError::InvalidPlane {
                reason: format!("bounds must be finite, got {bounds:?}"),
            });
        }
        if re_start >= re_end {
            return Err(CoreError::InvalidPlane {
                reason: format!("re_start {re_start} must be below re_end {re_end}"),
            });
        }
        if im_start >= im_end {
            return Err(CoreError::InvalidPlane {
                reason: format!("im_start {im_start} must be below im_end {im_end}"),
            });
        }
        Ok(Self {
            re_start,
            re_end,
            im_start,
            im_end,
        })
    }

    #[inline]
    pub fn re_start(&self) -> f64 {
        self.re_start
    }

    #[inline]
    pub fn re_end(&self) -> f64 {
        self.re_end
    }

    #[inline]
    pub fn im_start(&self) -> f64 {
        self.im_start
    }

    #[inline]
    pub fn im_end(&self) -> f64 {
        self.im_end
    }

    /// Real-axis span.
    #[inline]
    pub fn width(&self) -> f64 {
        self.re_end - self.re_start
    }

    /// Imaginary-axis span.
    #[inline]
    pub fn height(&self) -> f64 {
        self.im_end - self.im_start
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Complex {
        Complex::new(
            self.re_start + self.width() / 2.0,
            self.im_start + self.height() / 2.0,
        )
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// `(0, 0)` is the top-left pixel and maps to `(re_start, im_end)`.
    /// Screen rows run top-down while the imaginary axis runs bottom-up, so
    /// the row index is inverted before scaling.
    ///
    /// Callers are expected to pass on-raster pixels; rows past the bottom
    /// edge clamp to the bottom row. Use
    /// [`checked_pixel_to_complex`](Self::checked_pixel_to_complex) for
    /// coordinates that come from outside.
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32, raster: Raster) -> Complex {
        let w = raster.width() as f64;
        let h = raster.height() as f64;
        let inverted_py = raster.height().saturating_sub(py.saturating_add(1)) as f64;
        Complex::new(
            self.re_start + (px as f64 / w) * self.width(),
            self.im_start + (inverted_py / h) * self.height(),
        )
    }

    /// Like [`pixel_to_complex`](Self::pixel_to_complex), but rejects
    /// coordinates outside the raster instead of clamping.
    pub fn checked_pixel_to_complex(
        &self,
        px: u32,
        py: u32,
        raster: Raster,
    ) -> crate::Result<Complex> {
        if !raster.contains(px, py) {
            return Err(CoreError::PixelOutOfBounds {
                px,
                py,
                width: raster.width(),
                height: raster.height(),
            });
        }
        Ok(self.pixel_to_complex(px, py, raster))
    }

    /// Halve every bound, shrinking the rectangle towards the origin of the
    /// plane (not towards the current view centre).
    pub fn zoom_in_place(&mut self) -> crate::Result<()> {
        let next = Self {
            re_start: self.re_start / 2.0,
            re_end: self.re_end / 2.0,
            im_start: self.im_start / 2.0,
            im_end: self.im_end / 2.0,
        };
        next.ensure_representable()?;
        *self = next;
        Ok(())
    }

    /// Re-centre on `center` and halve both spans.
    pub fn recenter_and_zoom(&mut self, center: Complex) -> crate::Result<()> {
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(CoreError::InvalidPlane {
                reason: format!("centre must be finite, got {center}"),
            });
        }
        let quarter_w = self.width() / 4.0;
        let quarter_h = self.height() / 4.0;
        let next = Self {
            re_start: center.re - quarter_w,
            re_end: center.re + quarter_w,
            im_start: center.im - quarter_h,
            im_end: center.im + quarter_h,
        };
        next.ensure_representable()?;
        *self = next;
        Ok(())
    }

    /// Restore the default rectangle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reject rectangles whose spans have collapsed below what `f64` can
    /// resolve at their magnitude.
    fn ensure_representable(&self) -> crate::Result<()> {
        let ok = span_representable(self.re_start, self.re_end)
            && span_representable(self.im_start, self.im_end);
        if !ok {
            debug!(
                width = self.width(),
                height = self.height(),
                "Rejecting degenerate plane"
            );
            return Err(CoreError::ZoomLimit {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}

fn span_representable(start: f64, end: f64) -> bool {
    let span = end - start;
    let magnitude = start.abs().max(end.abs());
    span.is_normal() && span > 0.0 && span >= magnitude * MIN_RELATIVE_SPAN
}

impl Default for ComplexPlane {
    fn default() -> Self {
        Self {
            re_start: Self::DEFAULT_RE_START,
            re_end: Self::DEFAULT_RE_END,
            im_start: Self::DEFAULT_IM_START,
            im_end: Self::DEFAULT_IM_END,
        }
    }
}
