/// A closed range of ray parameters, `[min, max]`.
///
/// Intersection routines use `surrounds` (open bounds) to decide whether a
/// root is acceptable, so `Interval::POSITIVE` admits every `t > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    ///
    /// NaN is never surrounded.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// The same interval with its upper bound lowered to `max`.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// The forward half of a ray, surrounding every `t > 0`.
    pub const POSITIVE: Interval = Interval {
        min: 0.0,
        max: f64::INFINITY,
    };
}
