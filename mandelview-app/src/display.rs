use eframe::egui;

use mandelview_core::Raster;
use mandelview_render::{Display, DisplayError, PixelBuffer};

/// Presents frames by re-uploading a single egui texture.
pub(crate) struct TextureDisplay {
    ctx: egui::Context,
    raster: Raster,
    texture: Option<egui::TextureHandle>,
}

impl TextureDisplay {
    pub(crate) fn new(ctx: &egui::Context, raster: Raster) -> Self {
        Self {
            ctx: ctx.clone(),
            raster,
            texture: None,
        }
    }

    pub(crate) fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}

impl Display for TextureDisplay {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), DisplayError> {
        if !frame.matches(self.raster) {
            return Err(DisplayError::SizeMismatch {
                width: self.raster.width(),
                height: self.raster.height(),
                got_width: frame.width,
                got_height: frame.height,
            });
        }
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [frame.width as usize, frame.height as usize],
            &frame.to_rgba(),
        );
        if let Some(handle) = self.texture.as_mut() {
            handle.set(image, egui::TextureOptions::NEAREST);
        } else {
            self.texture =
                Some(self.ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
        }
        Ok(())
    }

    fn flip(&mut self) -> Result<(), DisplayError> {
        self.ctx.request_repaint();
        Ok(())
    }
}
