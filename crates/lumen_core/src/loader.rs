//! JSON scene loading.
//!
//! Scene files are parsed straight into [`SceneDescription`]. The loader only
//! checks syntax and field names; semantic validation is left to the renderer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let description = load_scene("scenes/spheres.json")?;
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let description = load_scene_from_str(&text)?;

    log::info!(
        "Loaded {}: {} surfaces, {} materials, {} lights",
        path.display(),
        description.surface_count(),
        description.materials.len(),
        description.lights.len()
    );

    Ok(description)
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(text)?;

    log::debug!(
        "Parsed scene: {}x{} image, camera at {:?}",
        description.image.width,
        description.image.height,
        description.camera.view_point
    );

    Ok(description)
}
