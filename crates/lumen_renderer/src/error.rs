//! Renderer error type.

use lumen_math::Vector3;
use thiserror::Error;

/// Errors raised while building a scene or rendering it.
///
/// Everything here is detected before the first pixel is shaded, except
/// `Cancelled` which is checked between buckets.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Scene has no surfaces")]
    EmptyScene,

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Duplicate material name: {0}")]
    DuplicateMaterial(String),

    #[error("Degenerate camera basis: view up {up} is parallel to projection normal {normal}")]
    DegenerateBasis { up: Vector3, normal: Vector3 },

    #[error("Invalid image size: {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("Invalid view direction: {0}")]
    InvalidViewDirection(Vector3),

    #[error("Invalid projection distance: {0}")]
    InvalidProjectionDistance(f64),

    #[error("Invalid view plane size: {width}x{height}")]
    InvalidViewSize { width: f64, height: f64 },

    #[error("Invalid bucket size: {0}")]
    InvalidBucketSize(u32),

    #[error("Render cancelled")]
    Cancelled,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
