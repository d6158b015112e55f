use crate::{Interval, Point3, Ray, Vector3};

/// Axis-aligned box defined by three intervals (one per axis).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

/// Result of clipping a ray against the three slabs of an [`Aabb`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlabHit {
    /// Largest of the per-axis lower bounds
    pub t_enter: f64,
    /// Smallest of the per-axis upper bounds
    pub t_exit: f64,
    /// Axis (0=X, 1=Y, 2=Z) whose slab produced `t_enter`
    pub enter_axis: usize,
    /// Whether `t_enter` came from the max-corner face of that slab
    pub enter_max_face: bool,
}

impl SlabHit {
    /// Unit normal of the face the ray entered through.
    ///
    /// Points along `+axis` for the max-corner face and `-axis` for the
    /// min-corner face.
    pub fn enter_normal(&self) -> Vector3 {
        let sign = if self.enter_max_face { 1.0 } else { -1.0 };
        let mut normal = Vector3::ZERO;
        normal[self.enter_axis] = sign;
        normal
    }
}

impl Aabb {
    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Point3, b: Point3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));

        Self { x, y, z }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Clip a ray against the box with the slab method.
    ///
    /// Every axis contributes a `[lower, upper]` pair of `t` values; the
    /// entry is the max of the lowers and the exit the min of the uppers.
    /// The axis and face responsible for the entry are recorded while
    /// reducing, so the caller never has to re-compare floats to find the
    /// normal. A zero direction component means the ray is parallel to that
    /// slab: it is unbounded there if the origin lies inside the slab and a
    /// miss otherwise.
    ///
    /// Returns `None` when the ray misses (entry after exit), when the
    /// direction is zero on every axis, or when it has a NaN or infinite
    /// component.
    pub fn slab(&self, ray: &Ray) -> Option<SlabHit> {
        if !ray.direction.is_finite() {
            return None;
        }

        let mut t_enter = f64::NEG_INFINITY;
        let mut t_exit = f64::INFINITY;
        let mut enter_axis = 0;
        let mut enter_max_face = false;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];

            if direction == 0.0 {
                if !slab.contains(origin) {
                    return None;
                }
                continue;
            }

            let t_max_face = (slab.max - origin) / direction;
            let t_min_face = (slab.min - origin) / direction;
            let (lower, upper, lower_is_max_face) = if t_max_face < t_min_face {
                (t_max_face, t_min_face, true)
            } else {
                (t_min_face, t_max_face, false)
            };

            if lower > t_enter {
                t_enter = lower;
                enter_axis = axis;
                enter_max_face = lower_is_max_face;
            }
            if upper < t_exit {
                t_exit = upper;
            }
        }

        if !t_enter.is_finite() || t_enter > t_exit {
            return None;
        }

        Some(SlabHit {
            t_enter,
            t_exit,
            enter_axis,
            enter_max_face,
        })
    }
}
