use eframe::egui;
use tracing::error;

use mandelview_core::Gesture;
use mandelview_render::{Display, DisplayError, Viewer};

use crate::display::TextureDisplay;
use crate::input;

pub(crate) struct MandelviewApp {
    viewer: Viewer,
    display: TextureDisplay,
}

impl MandelviewApp {
    pub(crate) fn new(ctx: &egui::Context, viewer: Viewer) -> Result<Self, DisplayError> {
        let display = TextureDisplay::new(ctx, viewer.raster());
        Self::with_display(viewer, display)
    }

    /// Present the viewer's current frame on `display` before the first paint.
    fn with_display(viewer: Viewer, mut display: TextureDisplay) -> Result<Self, DisplayError> {
        display.present(viewer.frame())?;
        Ok(Self { viewer, display })
    }

    fn close(ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn dispatch(&mut self, ctx: &egui::Context, gestures: Vec<Gesture>) {
        match self.viewer.dispatch(&mut gestures.into_iter(), &mut self.display) {
            Ok(summary) if summary.quit_requested => Self::close(ctx),
            Ok(_) => {}
            Err(e) => {
                error!(%e, "Frame could not be shown");
                Self::close(ctx);
            }
        }
    }
}

impl eframe::App for MandelviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let raster = self.viewer.raster();
        let size = egui::vec2(raster.width() as f32, raster.height() as f32);

        let canvas = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                if let Some(tex) = self.display.texture() {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter().image(tex.id(), rect, uv, egui::Color32::WHITE);
                }
                if let Some(pos) = response.hover_pos() {
                    if ctx.input(|i| i.pointer.is_moving()) {
                        if let Some((px, py)) = input::canvas_pixel(pos, rect) {
                            // Logged by the viewer; off-raster positions are ignored.
                            self.viewer.probe(px, py).ok();
                        }
                    }
                }
                rect
            })
            .inner;

        let gestures = ctx.input(|i| input::gestures(i, canvas));
        if !gestures.is_empty() {
            self.dispatch(ctx, gestures);
        }
    }
}
