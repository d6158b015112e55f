//! Lumen Core - Scene description and loading for the Lumen ray caster.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `CameraDescription`,
//!   `MaterialDescription`, `SurfaceDescription`, `LightDescription`
//! - **Scene loading**: JSON scene files via serde
//!
//! The types here are plain data. Validation (material references, camera
//! basis, image size) happens when the renderer builds its runtime scene.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let description = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} surfaces, {} lights",
//!     description.surface_count(),
//!     description.lights.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{
    CameraDescription, ImageDescription, LightDescription, MaterialDescription,
    SceneDescription, SurfaceDescription,
};
