use mandelview_core::ColorConstants;

/// An `[r, g, b]` pixel.
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];

const MAX_CHANNEL: f64 = 255.0;

// ---------------------------------------------------------------------------
// Row baseline
// ---------------------------------------------------------------------------

/// The red-channel baseline that cycles down the frame.
///
/// Each row adds `255 / raster_height` to the running value; once the sum
/// passes 255 it wraps modulo 256. The value is accumulated, not derived
/// from the row index, so rounding drift carries from row to row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBaseline {
    value: f64,
    step: f64,
}

impl HueBaseline {
    pub fn new(raster_height: u32) -> Self {
        Self {
            value: 0.0,
            step: MAX_CHANNEL / raster_height.max(1) as f64,
        }
    }

    /// Step to the next row and return its baseline.
    pub fn advance(&mut self) -> f64 {
        let next = self.value + self.step;
        self.value = if next <= MAX_CHANNEL {
            next
        } else {
            next % (MAX_CHANNEL + 1.0)
        };
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Baselines for every row of a frame, in order.
    pub fn rows(raster_height: u32) -> Vec<f64> {
        let mut baseline = Self::new(raster_height);
        (0..raster_height).map(|_| baseline.advance()).collect()
    }
}

// ---------------------------------------------------------------------------
// Mapper
// ---------------------------------------------------------------------------

/// Turns an iteration count into a pixel colour.
///
/// Points that used the whole budget are black. Escaped points get the
/// row baseline in red and an escape-speed hue in green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorMapper {
    constants: ColorConstants,
}

impl ColorMapper {
    pub fn new(constants: ColorConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &ColorConstants {
        &self.constants
    }

    /// Colour for count `m` under budget `max_iterations` on a row whose
    /// baseline is `y_grad`.
    #[inline]
    pub fn color(&self, m: u32, max_iterations: u32, y_grad: f64) -> Rgb {
        if m >= max_iterations {
            return BLACK;
        }
        let c = &self.constants;
        let hue = (m as f64 / max_iterations as f64) * c.hue_span + c.hue_offset;
        [
            channel(y_grad),
            channel(hue * c.green_factor),
            channel(hue * c.blue_factor),
        ]
    }
}

/// Truncate towards zero and clamp into a byte.
#[inline]
fn channel(v: f64) -> u8 {
    v.clamp(0.0, MAX_CHANNEL) as u8
}
