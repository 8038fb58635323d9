use mandelview_core::Raster;

use crate::color::{Rgb, BLACK};

/// An RGB frame, one triple per pixel, row-major from the top-left.
///
/// Row 0 shows the most positive imaginary values of the plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer the size of `raster`, filled with black.
    pub fn new(raster: Raster) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            pixels: vec![BLACK; raster.pixel_count()],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// `true` if the buffer has exactly the raster's dimensions.
    pub fn matches(&self, raster: Raster) -> bool {
        self.width == raster.width() && self.height == raster.height()
    }

    /// Opaque RGBA bytes, 4 per pixel, for texture upload.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &[r, g, b] in &self.pixels {
            out.extend_from_slice(&[r, g, b, 255]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(w: u32, h: u32) -> Raster {
        Raster::new(w, h).unwrap()
    }

    #[test]
    fn new_buffer_is_black() {
        let buf = PixelBuffer::new(raster(4, 3));
        assert_eq!(buf.pixels.len(), 12);
        assert!(buf.pixels.iter().all(|&p| p == BLACK));
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut buf = PixelBuffer::new(raster(5, 4));
        buf.set(2, 1, [10, 20, 30]);
        assert_eq!(buf.get(2, 1), [10, 20, 30]);
        assert_eq!(buf.pixels[5 + 2], [10, 20, 30]);
        assert_eq!(buf.row(1)[2], [10, 20, 30]);
        assert_eq!(buf.get(1, 2), BLACK);
    }

    #[test]
    fn rgba_is_opaque() {
        let mut buf = PixelBuffer::new(raster(2, 1));
        buf.set(1, 0, [1, 2, 3]);
        assert_eq!(buf.to_rgba(), vec![0, 0, 0, 255, 1, 2, 3, 255]);
    }
}
