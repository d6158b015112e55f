//! Core ray casting renderer.
//!
//! One primary ray per pixel, nearest hit, then the sum of every light's
//! direct contribution clamped to [0, 1]. No recursion and no sampling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use lumen_math::{Interval, Ray};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Basis;
use crate::color::{clamp_color, Color};
use crate::error::{RenderError, RenderResult};
use crate::image_buffer::ImageBuffer;
use crate::scene::Scene;
use crate::surface::Surface;

/// Render configuration for the parallel renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Checked before each bucket; set it to stop the render early
    pub cancel: Option<Arc<AtomicBool>>,
}

impl RenderConfig {
    /// Set the bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Attach a cancellation flag.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Whether the attached flag has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            cancel: None,
        }
    }
}

/// Compute the color seen by a primary ray.
///
/// Black on a miss; otherwise the clamped sum of all light contributions.
pub fn shade(scene: &Scene, ray: &Ray) -> Color {
    let Some(hit) = scene.group.hit(ray, Interval::POSITIVE) else {
        return Color::ZERO;
    };

    let ctx = scene.shading_context();
    let total = scene
        .lights
        .iter()
        .fold(Color::ZERO, |sum, light| sum + light.illuminate(&hit, ray, &ctx));

    clamp_color(total)
}

/// Render a single pixel.
pub fn render_pixel(scene: &Scene, basis: &Basis, x: u32, y: u32) -> Color {
    let ray = scene.camera.get_ray(basis, scene.width, scene.height, x, y);
    shade(scene, &ray)
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded reference loop.
pub fn render(scene: &Scene) -> RenderResult<ImageBuffer> {
    scene.validate()?;
    let basis = scene.camera.basis()?;

    let start = Instant::now();
    let mut image = ImageBuffer::new(scene.width, scene.height);

    for y in 0..scene.height {
        for x in 0..scene.width {
            image.set(x, y, render_pixel(scene, &basis, x, y));
        }
    }

    log::info!(
        "Rendered {}x{} in {:.2?}",
        scene.width,
        scene.height,
        start.elapsed()
    );

    Ok(image)
}

/// Render the scene in buckets on the rayon thread pool.
///
/// Produces the same pixels as [`render`]. Returns
/// [`RenderError::Cancelled`] if the config's flag is raised before every
/// bucket has started.
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    scene.validate()?;
    let basis = scene.camera.basis()?;
    if config.bucket_size == 0 {
        return Err(RenderError::InvalidBucketSize(config.bucket_size));
    }

    let start = Instant::now();
    let buckets = generate_buckets(scene.width, scene.height, config.bucket_size);
    log::debug!(
        "Rendering {} buckets of {}px on {} threads",
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results = buckets
        .par_iter()
        .map(|bucket| {
            if config.is_cancelled() {
                return Err(RenderError::Cancelled);
            }
            Ok(BucketResult::new(*bucket, render_bucket(bucket, scene, &basis)))
        })
        .collect::<RenderResult<Vec<_>>>()?;

    let mut image = ImageBuffer::new(scene.width, scene.height);
    for result in &results {
        result.write_to(&mut image);
    }

    log::info!(
        "Rendered {}x{} ({} buckets) in {:.2?}",
        scene.width,
        scene.height,
        results.len(),
        start.elapsed()
    );

    Ok(image)
}
