//! Material trait for local surface reflectance.

use std::fmt;

use lumen_math::{Ray, Vector3};

use crate::color::Color;
use crate::surface::HitRecord;

/// Trait for materials that describe how a surface reflects direct light.
pub trait Material: Send + Sync + fmt::Debug {
    /// Base (diffuse) color, used by the ambient and constant lights.
    fn color(&self) -> Color;

    /// Reflected color for light arriving along `light_dir`.
    ///
    /// `irradiance` is the light color already scaled by attenuation and the
    /// cosine term; `light_dir` is unit length and points from the hit point
    /// toward the light.
    fn evaluate(&self, hit: &HitRecord, irradiance: Color, light_dir: Vector3, ray: &Ray) -> Color;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    color: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given base color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for Lambertian {
    fn default() -> Self {
        Self::new(Color::ONE)
    }
}

impl Material for Lambertian {
    fn color(&self) -> Color {
        self.color
    }

    fn evaluate(&self, _hit: &HitRecord, irradiance: Color, _light_dir: Vector3, _ray: &Ray) -> Color {
        self.color * irradiance
    }
}

/// Phong material: Lambertian plus a Blinn-Phong half-vector highlight.
#[derive(Debug, Clone)]
pub struct Phong {
    color: Color,
    specular_color: Color,
    exponent: f64,
}

impl Phong {
    /// Create a new Phong material.
    ///
    /// - `color`: diffuse color
    /// - `specular_color`: highlight color
    /// - `exponent`: shininess, larger is tighter
    pub fn new(color: Color, specular_color: Color, exponent: f64) -> Self {
        Self {
            color,
            specular_color,
            exponent,
        }
    }

    /// Specular factor `max(0, n.h)^exponent`, zero when the base is zero.
    fn specular(&self, hit: &HitRecord, light_dir: Vector3, ray: &Ray) -> f64 {
        let view = (ray.origin - ray.at(hit.t)).normalize_or_zero();
        let half = (view + light_dir).normalize_or_zero();
        let base = hit.normal.normalize_or_zero().dot(half).max(0.0);

        if base > 0.0 {
            base.powf(self.exponent)
        } else {
            0.0
        }
    }
}

impl Material for Phong {
    fn color(&self) -> Color {
        self.color
    }

    fn evaluate(&self, hit: &HitRecord, irradiance: Color, light_dir: Vector3, ray: &Ray) -> Color {
        let specular = self.specular(hit, light_dir, ray);
        (self.color + self.specular_color * specular) * irradiance
    }
}
