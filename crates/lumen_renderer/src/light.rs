//! Light sources and direct illumination.
//!
//! Lights form a closed set, so they are an enum rather than a trait. Each
//! light turns a hit into a color; the renderer sums the contributions of
//! every light and clamps the total.

use lumen_math::{Interval, Point3, Ray};

use crate::color::Color;
use crate::surface::{Group, HitRecord, Surface};

/// Lower bound of the shadow-ray range, keeps a surface from shadowing itself.
pub const SHADOW_EPSILON: f64 = 1e-4;

/// Scene state a light needs while shading one hit.
#[derive(Clone, Copy)]
pub struct ShadingContext<'a> {
    /// Every surface in the scene, for shadow tests
    pub group: &'a Group,
    /// Color the ambient light multiplies into the material color
    pub ambient_intensity: Color,
}

/// A point light: inverse-square falloff and hard shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub intensity: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Point3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// Direct contribution of this light at `hit`.
    pub fn illuminate(&self, hit: &HitRecord, ray: &Ray, ctx: &ShadingContext) -> Color {
        let hit_point = hit.point(ray);
        let to_light = self.position - hit_point;
        let light_dir = to_light.normalize_or_zero();

        let cos_theta = light_dir.dot(hit.normal.normalize_or_zero()).max(0.0);
        let attenuation = cos_theta / to_light.length_squared();
        if !attenuation.is_finite() || attenuation <= 0.0 {
            return Color::ZERO;
        }

        // Unnormalized direction: t = 1 lands on the light
        let shadow_ray = Ray::new(hit_point, to_light);
        if ctx
            .group
            .hit(&shadow_ray, Interval::new(SHADOW_EPSILON, 1.0))
            .is_some()
        {
            return Color::ZERO;
        }

        let irradiance = self.intensity * attenuation;
        hit.material.evaluate(hit, irradiance, light_dir, ray)
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// `ambient_intensity * material color`
    Ambient,
    /// Material color, unlit
    Constant,
    /// Normal mapped from [-1, 1] to [0, 1] per channel
    Normal,
    Point(PointLight),
}

impl Light {
    /// Contribution of this light at `hit`.
    pub fn illuminate(&self, hit: &HitRecord, ray: &Ray, ctx: &ShadingContext) -> Color {
        match self {
            Light::Ambient => ctx.ambient_intensity * hit.material.color(),
            Light::Constant => hit.material.color(),
            Light::Normal => (hit.normal + Color::ONE) / 2.0,
            Light::Point(light) => light.illuminate(hit, ray, ctx),
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}
