//! Axis-aligned box primitive.

use std::sync::Arc;

use lumen_math::{Aabb, Interval, Point3, Ray};

use crate::material::Material;
use crate::surface::{HitRecord, Surface};

/// A solid axis-aligned box.
///
/// Only the entry face is ever reported, so a ray starting inside the box
/// (entry `t` behind the origin) misses it.
pub struct AxisAlignedBox {
    bounds: Aabb,
    material: Arc<dyn Material>,
}

impl AxisAlignedBox {
    /// Create a box from two opposite corners, in any order.
    pub fn new(min: Point3, max: Point3, material: Arc<dyn Material>) -> Self {
        Self {
            bounds: Aabb::from_points(min, max),
            material,
        }
    }
}

impl Surface for AxisAlignedBox {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let slab = self.bounds.slab(ray)?;
        if !ray_t.surrounds(slab.t_enter) {
            return None;
        }

        Some(HitRecord::new(
            slab.t_enter,
            slab.enter_normal(),
            self.material.as_ref(),
        ))
    }
}
