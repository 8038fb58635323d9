use eframe::egui;

use mandelview_core::Gesture;

/// Gesture bound to a key, if any.
pub(crate) fn key_gesture(key: egui::Key) -> Option<Gesture> {
    match key {
        egui::Key::Z => Some(Gesture::ZoomInPlace),
        egui::Key::R => Some(Gesture::Reset),
        egui::Key::Q => Some(Gesture::Quit),
        _ => None,
    }
}

/// Pixel under `pos` relative to the canvas' top-left corner.
///
/// Positions left of or above the canvas have no pixel. Positions past the
/// right or bottom edge are passed through so the controller can reject
/// them.
pub(crate) fn canvas_pixel(pos: egui::Pos2, canvas: egui::Rect) -> Option<(u32, u32)> {
    let rel = pos - canvas.min;
    if rel.x < 0.0 || rel.y < 0.0 {
        return None;
    }
    Some((rel.x.floor() as u32, rel.y.floor() as u32))
}

/// Decode this frame's raw input into gestures, in arrival order.
pub(crate) fn gestures(input: &egui::InputState, canvas: egui::Rect) -> Vec<Gesture> {
    let mut out = Vec::new();
    for event in &input.events {
        match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => out.extend(key_gesture(*key)),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } if canvas.contains(*pos) => {
                if let Some((x, y)) = canvas_pixel(*pos, canvas) {
                    out.push(Gesture::Click { x, y });
                }
            }
            _ => {}
        }
    }
    if input.viewport().close_requested() {
        out.push(Gesture::Quit);
    }
    out
}
