use std::fs;
use std::path::Path;

use tracing::{debug, info};

use mandelview_core::ViewerConfig;

use crate::AppError;

/// Load startup configuration from an optional JSON file.
///
/// Without a path the built-in defaults are used. A path that can't be read
/// or parsed is an error rather than a silent fallback.
pub(crate) fn load(path: Option<&Path>) -> Result<ViewerConfig, AppError> {
    let Some(path) = path else {
        debug!("No config path given, using defaults");
        return Ok(ViewerConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&json).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse(json: &str) -> Result<ViewerConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelview_core::RenderMode;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load(None).unwrap(), ViewerConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/mandelview.json"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }

    #[test]
    fn parse_overrides() {
        let cfg = parse(r#"{ "iteration_step": 25, "render_mode": "parallel" }"#).unwrap();
        assert_eq!(cfg.iteration_step, 25);
        assert_eq!(cfg.render_mode, RenderMode::Parallel);
        assert_eq!(cfg.initial_max_iterations, 30);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse("{ not json").is_err());
    }
}
