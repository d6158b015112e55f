//! Surface trait, HitRecord and Group for ray-surface intersection.

use lumen_math::{Interval, Point3, Ray, Vector3};

use crate::material::Material;

/// Record of a ray-surface intersection.
///
/// Borrowed from the surface that produced it; copied out of a [`Group`]
/// scan and discarded once the pixel is shaded.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Surface normal at the intersection (not necessarily unit length)
    pub normal: Vector3,
    /// Material of the surface that was hit
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// Create a new hit record.
    pub fn new(t: f64, normal: Vector3, material: &'a dyn Material) -> Self {
        Self { t, normal, material }
    }

    /// The intersection point along `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Point3 {
        ray.at(self.t)
    }
}

/// Trait for surfaces that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Test if a ray hits this surface at some `t` strictly inside `ray_t`.
    ///
    /// Returns the nearest such hit, or `None`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// An ordered collection of surfaces, intersected by linear scan.
///
/// Groups are surfaces themselves and may be nested.
pub struct Group {
    surfaces: Vec<Box<dyn Surface>>,
}

impl Group {
    /// Create a new empty group.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// Add a surface to the group.
    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    /// Add a surface, builder style.
    pub fn with(mut self, surface: impl Surface + 'static) -> Self {
        self.add(Box::new(surface));
        self
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Group {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut range = ray_t;

        // Ties keep the earlier surface since `surrounds` excludes the bound
        for surface in &self.surfaces {
            if let Some(rec) = surface.hit(ray, range) {
                range = range.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::material::Lambertian;
    use crate::sphere::Sphere;
    use std::sync::Arc;

    fn sphere_at(z: f64, color: Color) -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, z), 0.5, Arc::new(Lambertian::new(color)))
    }

    fn forward_ray() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::NEG_Z)
    }

    #[test]
    fn test_empty_group_never_hits() {
        let group = Group::new();
        assert!(group.is_empty());
        assert!(group.hit(&forward_ray(), Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_group_returns_closest_hit() {
        // Far sphere added first so the scan has to replace it
        let group = Group::new()
            .with(sphere_at(-5.0, Color::X))
            .with(sphere_at(0.0, Color::Y))
            .with(sphere_at(-2.0, Color::Z));
        assert_eq!(group.len(), 3);

        let rec = group.hit(&forward_ray(), Interval::POSITIVE).unwrap();
        assert!((rec.t - 9.5).abs() < 1e-12);
        assert_eq!(rec.material.color(), Color::Y);
    }

    #[test]
    fn test_group_respects_range() {
        let group = Group::new()
            .with(sphere_at(0.0, Color::X))
            .with(sphere_at(-5.0, Color::Y));

        // Both roots of the near sphere (9.5, 10.5) fall outside (11, 20)
        let rec = group.hit(&forward_ray(), Interval::new(11.0, 20.0)).unwrap();
        assert!((rec.t - 14.5).abs() < 1e-12);
        assert_eq!(rec.material.color(), Color::Y);

        assert!(group.hit(&forward_ray(), Interval::new(0.0, 5.0)).is_none());
    }

    #[test]
    fn test_group_tie_keeps_first() {
        let group = Group::new()
            .with(sphere_at(0.0, Color::X))
            .with(sphere_at(0.0, Color::Y));

        let rec = group.hit(&forward_ray(), Interval::POSITIVE).unwrap();
        assert_eq!(rec.material.color(), Color::X);
    }

    #[test]
    fn test_nested_groups() {
        let inner = Group::new().with(sphere_at(2.0, Color::Z));
        let outer = Group::new().with(sphere_at(-5.0, Color::X)).with(inner);

        let rec = outer.hit(&forward_ray(), Interval::POSITIVE).unwrap();
        assert!((rec.t - 7.5).abs() < 1e-12);
        assert_eq!(rec.material.color(), Color::Z);
    }

    #[test]
    fn test_hit_record_point() {
        let material = Lambertian::default();
        let rec = HitRecord::new(2.0, Vector3::Z, &material);
        let ray = Ray::new(Point3::ZERO, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(rec.point(&ray), Point3::new(2.0, 0.0, 0.0));
    }
}
