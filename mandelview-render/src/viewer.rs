use tracing::{debug, info, warn};

use mandelview_core::{
    Complex, Gesture, NavigationController, Raster, RenderMode, Transition, ViewerConfig,
};

use crate::buffer::PixelBuffer;
use crate::color::ColorMapper;
use crate::error::{DisplayError, RenderError};
use crate::renderer::render_into;

// ---------------------------------------------------------------------------
// Collaborator ports
// ---------------------------------------------------------------------------

/// Where finished frames go.
pub trait Display {
    /// Take a completed frame for presentation.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), DisplayError>;

    /// Make the last presented frame visible.
    fn flip(&mut self) -> Result<(), DisplayError>;
}

/// Where gestures come from. `None` means the stream is exhausted.
pub trait GestureSource {
    fn next_gesture(&mut self) -> Option<Gesture>;
}

impl<I> GestureSource for I
where
    I: Iterator<Item = Gesture>,
{
    fn next_gesture(&mut self) -> Option<Gesture> {
        self.next()
    }
}

// ---------------------------------------------------------------------------
// Viewer
// ---------------------------------------------------------------------------

/// Counters from a [`Viewer::run`] session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub frames_presented: u64,
    /// Gestures the controller refused (off-raster clicks, zoom limit).
    pub gestures_rejected: u64,
    pub quit_requested: bool,
}

/// Outcome of a single [`Viewer::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The view changed and the new frame was presented.
    Presented,
    /// The controller refused the gesture; the frame is unchanged.
    Rejected,
    Quit,
}

/// Application state for one viewing session: the navigation controller,
/// the fixed raster, and the most recent frame.
///
/// The frame is always a complete render of the current view.
#[derive(Debug)]
pub struct Viewer {
    navigation: NavigationController,
    raster: Raster,
    mapper: ColorMapper,
    mode: RenderMode,
    frame: PixelBuffer,
}

impl Viewer {
    /// Build a viewer from startup configuration and draw the first frame.
    pub fn new(config: &ViewerConfig) -> crate::Result<Self> {
        config.validate()?;
        let raster = config.raster()?;
        let mut viewer = Self {
            navigation: NavigationController::new(config.navigation_settings()?),
            raster,
            mapper: ColorMapper::new(config.colors),
            mode: config.render_mode,
            frame: PixelBuffer::new(raster),
        };
        viewer.redraw()?;
        Ok(viewer)
    }

    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// Apply one gesture and, if the view changed, rebuild the frame.
    ///
    /// A rejected gesture leaves both the view and the frame untouched.
    pub fn handle(&mut self, gesture: Gesture) -> crate::Result<Transition> {
        let transition = self.navigation.apply(gesture, self.raster)?;
        if transition == Transition::Redraw {
            self.redraw()?;
        }
        Ok(transition)
    }

    /// Complex coordinate under the cursor, for status display.
    pub fn probe(&self, px: u32, py: u32) -> crate::Result<Complex> {
        Ok(self.navigation.probe(px, py, self.raster)?)
    }

    /// Re-render the current view into the frame buffer.
    pub fn redraw(&mut self) -> crate::Result<()> {
        render_into(
            &mut self.frame,
            self.mode,
            self.navigation.plane(),
            self.navigation.evaluator(),
            self.raster,
            &self.mapper,
        )
    }

    /// Apply one gesture and present the result.
    ///
    /// A gesture the controller refuses is logged and the display is still
    /// flipped. Display and render failures are returned.
    pub fn step<D>(&mut self, gesture: Gesture, display: &mut D) -> crate::Result<Step>
    where
        D: Display + ?Sized,
    {
        match self.handle(gesture) {
            Ok(Transition::Quit) => Ok(Step::Quit),
            Ok(Transition::Redraw) => {
                self.show(display)?;
                Ok(Step::Presented)
            }
            Err(RenderError::Core(e)) => {
                warn!(%e, ?gesture, "Gesture rejected");
                display.flip()?;
                Ok(Step::Rejected)
            }
            Err(e) => Err(e),
        }
    }

    /// Step through gestures until `Quit` or the source runs dry. The
    /// current frame is not presented first.
    pub fn dispatch<S, D>(&mut self, source: &mut S, display: &mut D) -> crate::Result<RunSummary>
    where
        S: GestureSource + ?Sized,
        D: Display + ?Sized,
    {
        let mut summary = RunSummary::default();
        while let Some(gesture) = source.next_gesture() {
            match self.step(gesture, display)? {
                Step::Quit => {
                    summary.quit_requested = true;
                    break;
                }
                Step::Presented => summary.frames_presented += 1,
                Step::Rejected => summary.gestures_rejected += 1,
            }
        }
        Ok(summary)
    }

    /// Drive the session: show the current frame, then process gestures
    /// one at a time until `Quit` or the source runs dry.
    ///
    /// Gestures the controller refuses are logged and counted; display
    /// failures end the session with an error.
    pub fn run<S, D>(&mut self, source: &mut S, display: &mut D) -> crate::Result<RunSummary>
    where
        S: GestureSource + ?Sized,
        D: Display + ?Sized,
    {
        self.show(display)?;
        let mut summary = self.dispatch(source, display)?;
        summary.frames_presented += 1;

        info!(
            frames = summary.frames_presented,
            rejected = summary.gestures_rejected,
            quit = summary.quit_requested,
            "Viewer session ended"
        );
        Ok(summary)
    }

    fn show<D: Display + ?Sized>(&self, display: &mut D) -> crate::Result<()> {
        display.present(&self.frame)?;
        display.flip()?;
        debug!("Frame presented");
        Ok(())
    }
}
