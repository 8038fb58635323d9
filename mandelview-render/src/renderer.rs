use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use mandelview_core::{ComplexPlane, EvaluatorConfig, Raster, RenderMode};

use crate::buffer::PixelBuffer;
use crate::color::{ColorMapper, HueBaseline, Rgb};
use crate::error::RenderError;

/// Colour one row of the frame.
///
/// `row` is the slice for pixel row `py`; `y_grad` is that row's baseline.
#[inline]
fn render_row(
    row: &mut [Rgb],
    py: u32,
    y_grad: f64,
    plane: &ComplexPlane,
    evaluator: &EvaluatorConfig,
    raster: Raster,
    mapper: &ColorMapper,
) {
    let max_iter = evaluator.max_iterations;
    for (px, pixel) in (0..raster.width()).zip(row.iter_mut()) {
        let c = plane.pixel_to_complex(px, py, raster);
        let m = evaluator.iterations(c);
        *pixel = mapper.color(m, max_iter, y_grad);
    }
}

fn check_dimensions(buffer: &PixelBuffer, raster: Raster) -> crate::Result<()> {
    if !buffer.matches(raster) || buffer.pixels.len() != raster.pixel_count() {
        return Err(RenderError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
            raster_width: raster.width(),
            raster_height: raster.height(),
        });
    }
    Ok(())
}

/// Build a full frame, one row at a time from the top.
pub fn render(
    plane: &ComplexPlane,
    evaluator: &EvaluatorConfig,
    raster: Raster,
    mapper: &ColorMapper,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(raster);
    render_rows_sequential(&mut buffer, plane, evaluator, raster, mapper);
    buffer
}

/// Build a full frame with rows spread across the rayon pool.
///
/// Row baselines are accumulated up front in row order, so the output is
/// pixel-identical to [`render`].
pub fn render_parallel(
    plane: &ComplexPlane,
    evaluator: &EvaluatorConfig,
    raster: Raster,
    mapper: &ColorMapper,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(raster);
    render_rows_parallel(&mut buffer, plane, evaluator, raster, mapper);
    buffer
}

/// Overwrite every pixel of `buffer` with a fresh frame.
///
/// The buffer must already have the raster's dimensions.
pub fn render_into(
    buffer: &mut PixelBuffer,
    mode: RenderMode,
    plane: &ComplexPlane,
    evaluator: &EvaluatorConfig,
    raster: Raster,
    mapper: &ColorMapper,
) -> crate::Result<()> {
    check_dimensions(buffer, raster)?;
    let start = Instant::now();
    debug!(
        width = raster.width(),
        height = raster.height(),
        max_iterations = evaluator.max_iterations,
        ?mode,
        "Starting render"
    );

    match mode {
        RenderMode::Sequential => render_rows_sequential(buffer, plane, evaluator, raster, mapper),
        RenderMode::Parallel => render_rows_parallel(buffer, plane, evaluator, raster, mapper),
    }

    info!(
        elapsed_ms = start.elapsed().as_millis(),
        max_iterations = evaluator.max_iterations,
        "Render complete"
    );
    Ok(())
}

fn render_rows_sequential(
    buffer: &mut PixelBuffer,
    plane: &ComplexPlane,
    evaluator: &EvaluatorConfig,
    raster: Raster,
    mapper: &ColorMapper,
) {
    let mut baseline = HueBaseline::new(raster.height());
    let rows = buffer.pixels.chunks_exact_mut(raster.width() as usize);
    for (py, row) in (0..raster.height()).zip(rows) {
        let y_grad = baseline.advance();
        render_row(row, py, y_grad, plane, evaluator, raster, mapper);
    }
}

fn render_rows_parallel(
    buffer: &mut PixelBuffer,
    plane: &ComplexPlane,
    evaluator: &EvaluatorConfig,
    raster: Raster,
    mapper: &ColorMapper,
) {
    let baselines = HueBaseline::rows(raster.height());
    buffer
        .pixels
        .par_chunks_exact_mut(raster.width() as usize)
        .zip(baselines.par_iter())
        .enumerate()
        .for_each(|(py, (row, &y_grad))| {
            render_row(row, py as u32, y_grad, plane, evaluator, raster, mapper);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use mandelview_core::Complex;

    fn raster(w: u32, h: u32) -> Raster {
        Raster::new(w, h).unwrap()
    }

    #[test]
    fn render_fills_whole_raster() {
        let buf = render(
            &ComplexPlane::default(),
            &EvaluatorConfig::default(),
            raster(64, 40),
            &ColorMapper::default(),
        );
        assert_eq!(buf.width, 64);
        assert_eq!(buf.height, 40);
        assert_eq!(buf.pixels.len(), 64 * 40);
    }

    #[test]
    fn origin_pixel_is_black() {
        // Default plane, 300×200: px 200 → re 0, py 49 → im 0.
        let r = raster(300, 200);
        let plane = ComplexPlane::default();
        let c = plane.pixel_to_complex(200, 49, r);
        assert!(c.re.abs() < 1e-12 && c.im.abs() < 1e-12);

        let buf = render(&plane, &EvaluatorConfig::default(), r, &ColorMapper::default());
        assert_eq!(buf.get(200, 49), BLACK);
    }

    #[test]
    fn exterior_pixel_carries_row_baseline() {
        let r = raster(300, 200);
        let plane = ComplexPlane::default();
        let evaluator = EvaluatorConfig::default();
        let buf = render(&plane, &evaluator, r, &ColorMapper::default());

        // Top-left corner (-2, ~0.5) escapes quickly.
        let m = evaluator.iterations(plane.pixel_to_complex(0, 0, r));
        assert!(evaluator.escapes(m));
        let expected = ColorMapper::default().color(m, 30, 255.0 / 200.0);
        assert_eq!(buf.get(0, 0), expected);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut plane = ComplexPlane::default();
        plane.recenter_and_zoom(Complex::new(-0.7, 0.2)).unwrap();
        let evaluator = EvaluatorConfig::new(80).unwrap();
        let r = raster(173, 97);
        let mapper = ColorMapper::default();

        let seq = render(&plane, &evaluator, r, &mapper);
        let par = render_parallel(&plane, &evaluator, r, &mapper);
        assert_eq!(seq, par);
    }

    #[test]
    fn render_into_overwrites_previous_frame() {
        let r = raster(50, 30);
        let mapper = ColorMapper::default();
        let evaluator = EvaluatorConfig::default();
        let mut plane = ComplexPlane::default();

        let mut buf = PixelBuffer::new(r);
        render_into(&mut buf, RenderMode::Sequential, &plane, &evaluator, r, &mapper).unwrap();
        plane.zoom_in_place().unwrap();
        render_into(&mut buf, RenderMode::Parallel, &plane, &evaluator, r, &mapper).unwrap();

        assert_eq!(buf, render(&plane, &evaluator, r, &mapper));
    }

    #[test]
    fn render_into_rejects_wrong_size() {
        let mut buf = PixelBuffer::new(raster(10, 10));
        let err = render_into(
            &mut buf,
            RenderMode::Sequential,
            &ComplexPlane::default(),
            &EvaluatorConfig::default(),
            raster(20, 10),
            &ColorMapper::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { .. }));
    }
}
