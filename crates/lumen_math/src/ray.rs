use crate::{Point3, Vector3};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length. Camera rays carry the
/// unnormalized pixel offset and shadow rays carry the full hit-to-light
/// displacement, so `t` is only a distance when the caller normalized it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let direction = Vector3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(2.0, 3.0, 4.0), Vector3::X);

        assert_eq!(ray.at(0.0), Point3::new(2.0, 3.0, 4.0));
        assert_eq!(ray.at(1.0), Point3::new(3.0, 3.0, 4.0));
        assert_eq!(ray.at(-1.0), Point3::new(1.0, 3.0, 4.0));
        assert_eq!(ray.at(2.5), Point3::new(4.5, 3.0, 4.0));
    }

    #[test]
    fn test_ray_at_does_not_normalize() {
        // t = 1 lands exactly on origin + direction, whatever its length
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 4.0, 0.0));
        assert_eq!(ray.at(1.0), Point3::new(0.0, 4.0, 0.0));
        assert_eq!(ray.at(0.25), Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Point3::ZERO, Vector3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
