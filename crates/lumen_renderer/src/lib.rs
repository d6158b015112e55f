//! Lumen Renderer - CPU ray casting.
//!
//! A pinhole-camera ray caster: one ray per pixel, nearest hit, direct
//! illumination from ambient, constant, normal and point lights with hard
//! shadows. No recursion, no sampling, no acceleration structure.

mod axis_box;
mod bucket;
mod camera;
mod color;
mod error;
mod image_buffer;
mod light;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod surface;

pub use axis_box::AxisAlignedBox;
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Basis, Camera};
pub use color::{clamp_color, color_to_packed, color_to_rgba, linear_to_gamma, Color, GAMMA};
pub use error::{RenderError, RenderResult};
pub use image_buffer::ImageBuffer;
pub use light::{Light, PointLight, ShadingContext, SHADOW_EPSILON};
pub use material::{Lambertian, Material, Phong};
pub use plane::{Disc, Plane};
pub use renderer::{render, render_parallel, render_pixel, shade, RenderConfig};
pub use scene::Scene;
pub use sphere::Sphere;
pub use surface::{Group, HitRecord, Surface};

/// Re-export common math types from lumen_math
pub use lumen_math::{Interval, Point3, Ray, Vector3};
