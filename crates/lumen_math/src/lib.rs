// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
mod interval;
mod ray;

pub use aabb::{Aabb, SlabHit};
pub use interval::Interval;
pub use ray::Ray;

/// A location in world space.
pub type Point3 = DVec3;

/// A direction or displacement in world space (no fixed origin).
pub type Vector3 = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(b.cross(a), Vector3::new(3.0, -6.0, 3.0));
    }

    #[test]
    fn test_normalize_is_unit_length() {
        let v = Vector3::new(1.0, 2.0, 3.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let p1 = Point3::new(3.0, 2.0, 1.0);
        let p2 = Point3::new(5.0, 6.0, 7.0);
        assert_eq!(p1 - p2, Vector3::new(-2.0, -4.0, -6.0));
    }
}
