mod app;
mod config;
mod display;
mod input;

use std::path::PathBuf;

use eframe::egui;
use thiserror::Error;
use tracing::{error, info};

use mandelview_render::{RenderError, Viewer};

use app::MandelviewApp;

/// Anything that can stop the viewer before or during startup.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("window system error: {0}")]
    Window(String),
}

fn run() -> Result<(), AppError> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref())?;
    let viewer = Viewer::new(&config)?;
    let raster = viewer.raster();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mandelbrot Set Viewer")
            .with_inner_size([raster.width() as f32, raster.height() as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Mandelview",
        options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<
                Box<dyn eframe::App>,
                Box<dyn std::error::Error + Send + Sync>,
            > {
                let app = MandelviewApp::new(&cc.egui_ctx, viewer)?;
                Ok(Box::new(app))
            },
        ),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Mandelview");

    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}
