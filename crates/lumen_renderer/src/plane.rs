//! Infinite plane and bounded disc primitives.
//!
//! Both report the stored normal as-is. Unlike spheres, it is never
//! re-oriented toward the ray, so a plane seen from behind shades dark
//! under point lights.

use std::sync::Arc;

use lumen_math::{Interval, Point3, Ray, Vector3};

use crate::material::Material;
use crate::surface::{HitRecord, Surface};

/// An infinite plane through `point` with normal `normal`.
pub struct Plane {
    point: Point3,
    normal: Vector3,
    material: Arc<dyn Material>,
}

impl Plane {
    /// Create a new plane.
    pub fn new(point: Point3, normal: Vector3, material: Arc<dyn Material>) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }

    /// Solve for the ray parameter where the ray meets the plane.
    ///
    /// No range check is applied. Returns `None` for rays parallel to the
    /// plane (including a zero normal or direction) and non-finite `t`.
    fn solve(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom == 0.0 {
            return None;
        }

        let t = -(ray.origin - self.point).dot(self.normal) / denom;
        t.is_finite().then_some(t)
    }
}

impl Surface for Plane {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = self.solve(ray)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord::new(t, self.normal, self.material.as_ref()))
    }
}

/// A disc: the part of a plane within `radius` of its center point.
pub struct Disc {
    plane: Plane,
    radius: f64,
}

impl Disc {
    /// Create a new disc centered on `center`.
    pub fn new(center: Point3, normal: Vector3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            plane: Plane::new(center, normal, material),
            radius,
        }
    }
}

impl Surface for Disc {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = self.plane.solve(ray)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        if ray.at(t).distance(self.plane.point) > self.radius {
            return None;
        }

        Some(HitRecord::new(t, self.plane.normal, self.plane.material.as_ref()))
    }
}
