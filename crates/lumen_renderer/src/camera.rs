//! Pinhole camera: basis construction and per-pixel ray generation.

use lumen_core::CameraDescription;
use lumen_math::{Point3, Ray, Vector3};

use crate::error::{RenderError, RenderResult};

/// Orthonormal camera frame. `u` points right, `v` up and `w` along the
/// projection normal (away from the scene).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub u: Vector3,
    pub v: Vector3,
    pub w: Vector3,
}

impl Basis {
    /// Build the frame from an up vector and the projection normal.
    ///
    /// Fails when either input is zero or non-finite, or when they are
    /// parallel, since no unique `u` exists then.
    pub fn new(view_up: Vector3, proj_normal: Vector3) -> RenderResult<Self> {
        let degenerate = || RenderError::DegenerateBasis {
            up: view_up,
            normal: proj_normal,
        };

        let w = proj_normal.try_normalize().ok_or_else(degenerate)?;
        let u = view_up.cross(w).try_normalize().ok_or_else(degenerate)?;
        let v = w.cross(u).try_normalize().ok_or_else(degenerate)?;

        Ok(Self { u, v, w })
    }
}

/// Pinhole camera with a rectangular view plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view_point: Point3,
    pub view_dir: Vector3,
    pub view_up: Vector3,
    pub proj_normal: Vector3,
    pub proj_distance: f64,
    pub view_width: f64,
    pub view_height: f64,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    pub fn new() -> Self {
        Self {
            view_point: Point3::ZERO,
            view_dir: Vector3::NEG_Z,
            view_up: Vector3::Y,
            proj_normal: Vector3::Z,
            proj_distance: 1.0,
            view_width: 1.0,
            view_height: 1.0,
        }
    }

    /// Set eye position and orientation.
    ///
    /// The projection normal is reset to `-view_dir`; call
    /// [`Camera::with_proj_normal`] afterwards for an oblique view plane.
    pub fn with_position(mut self, view_point: Point3, view_dir: Vector3, view_up: Vector3) -> Self {
        self.view_point = view_point;
        self.view_dir = view_dir;
        self.view_up = view_up;
        self.proj_normal = -view_dir;
        self
    }

    /// Set the projection normal.
    pub fn with_proj_normal(mut self, proj_normal: Vector3) -> Self {
        self.proj_normal = proj_normal;
        self
    }

    /// Set view plane distance and size.
    pub fn with_view_plane(mut self, distance: f64, width: f64, height: f64) -> Self {
        self.proj_distance = distance;
        self.view_width = width;
        self.view_height = height;
        self
    }

    /// Build a camera from its scene description.
    pub fn from_description(desc: &CameraDescription) -> Self {
        Self {
            view_point: desc.view_point,
            view_dir: desc.view_dir,
            view_up: desc.view_up,
            proj_normal: desc.projection_normal(),
            proj_distance: desc.proj_distance,
            view_width: desc.view_width,
            view_height: desc.view_height,
        }
    }

    /// Check the view direction, projection distance and view plane size.
    ///
    /// `view_dir` must be finite and non-zero; the distance and both sides
    /// of the view plane must be positive and finite.
    pub fn validate(&self) -> RenderResult<()> {
        let valid = |x: f64| x.is_finite() && x > 0.0;
        if self.view_dir.try_normalize().is_none() {
            return Err(RenderError::InvalidViewDirection(self.view_dir));
        }
        if !valid(self.proj_distance) {
            return Err(RenderError::InvalidProjectionDistance(self.proj_distance));
        }
        if !valid(self.view_width) || !valid(self.view_height) {
            return Err(RenderError::InvalidViewSize {
                width: self.view_width,
                height: self.view_height,
            });
        }
        Ok(())
    }

    /// Compute the camera basis.
    pub fn basis(&self) -> RenderResult<Basis> {
        Basis::new(self.view_up, self.proj_normal)
    }

    /// World-space direction from the eye through the center of pixel (i, j).
    ///
    /// Row 0 is the bottom of the view plane (`v` points up). The result is
    /// not normalized.
    pub fn ray_direction(&self, basis: &Basis, image_width: u32, image_height: u32, i: u32, j: u32) -> Vector3 {
        let pixel_width = self.view_width / image_width as f64;
        let pixel_height = self.view_height / image_height as f64;

        let center = self.view_point + self.proj_distance * self.view_dir.normalize_or_zero();

        let u_offset = -self.view_width / 2.0 + pixel_width / 2.0 + i as f64 * pixel_width;
        let v_offset = -self.view_height / 2.0 + pixel_height / 2.0 + j as f64 * pixel_height;
        let sample = center + u_offset * basis.u + v_offset * basis.v;

        sample - self.view_point
    }

    /// The primary ray through pixel (i, j).
    pub fn get_ray(&self, basis: &Basis, image_width: u32, image_height: u32, i: u32, j: u32) -> Ray {
        Ray::new(
            self.view_point,
            self.ray_direction(basis, image_width, image_height, i, j),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(actual: Vector3, expected: Vector3, tolerance: f64) {
        assert!(
            (actual - expected).length() < tolerance,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn assert_orthonormal(basis: &Basis) {
        for axis in [basis.u, basis.v, basis.w] {
            assert!((axis.length() - 1.0).abs() < 1e-6);
        }
        assert!(basis.u.dot(basis.v).abs() < 1e-6);
        assert!(basis.v.dot(basis.w).abs() < 1e-6);
        assert!(basis.w.dot(basis.u).abs() < 1e-6);
    }

    #[test]
    fn test_basis_looking_down_positive_z() {
        let basis = Basis::new(Vector3::Y, Vector3::new(0.0, 0.0, -1.0)).unwrap();

        assert_vec_near(basis.u, Vector3::new(-1.0, 0.0, 0.0), 1e-6);
        assert_vec_near(basis.v, Vector3::Y, 1e-6);
        assert_vec_near(basis.w, Vector3::new(0.0, 0.0, -1.0), 1e-6);
        assert_orthonormal(&basis);
    }

    #[test]
    fn test_basis_oblique() {
        let basis = Basis::new(Vector3::Y, Vector3::new(1.0, 1.0, 1.0)).unwrap();

        assert_vec_near(basis.u, Vector3::new(0.707, 0.0, -0.707), 1e-3);
        assert_vec_near(basis.v, Vector3::new(-0.408, 0.816, -0.408), 1e-3);
        assert_vec_near(basis.w, Vector3::new(0.577, 0.577, 0.577), 1e-3);
        assert_orthonormal(&basis);
    }

    #[test]
    fn test_basis_orthonormal_for_arbitrary_inputs() {
        let cases = [
            (Vector3::new(0.3, 2.0, -0.1), Vector3::new(1.0, -0.5, 4.0)),
            (Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0)),
            (Vector3::new(-5.0, 1.0, 0.0), Vector3::new(0.2, 0.2, -3.0)),
        ];
        for (up, normal) in cases {
            assert_orthonormal(&Basis::new(up, normal).unwrap());
        }
    }

    #[test]
    fn test_basis_degenerate() {
        // Up parallel to the projection normal
        assert!(matches!(
            Basis::new(Vector3::Y, Vector3::new(0.0, 2.0, 0.0)),
            Err(RenderError::DegenerateBasis { .. })
        ));
        assert!(Basis::new(Vector3::Y, Vector3::NEG_Y).is_err());
        assert!(Basis::new(Vector3::ZERO, Vector3::Z).is_err());
        assert!(Basis::new(Vector3::Y, Vector3::ZERO).is_err());
        assert!(Basis::new(Vector3::Y, Vector3::new(f64::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn test_ray_direction_default_camera() {
        let camera = Camera::new();
        let basis = camera.basis().unwrap();

        let direction = camera.ray_direction(&basis, 2, 2, 0, 0);
        assert_vec_near(direction, Vector3::new(-0.25, -0.25, -1.0), 1e-12);

        let direction = camera.ray_direction(&basis, 2, 2, 1, 1);
        assert_vec_near(direction, Vector3::new(0.25, 0.25, -1.0), 1e-12);
    }

    #[test]
    fn test_ray_direction_looking_down_positive_z() {
        let camera = Camera::new()
            .with_position(Point3::ZERO, Vector3::Z, Vector3::Y)
            .with_proj_normal(Vector3::NEG_Z)
            .with_view_plane(2.0, 2.0, 2.0);
        let basis = camera.basis().unwrap();

        let direction = camera.ray_direction(&basis, 2, 8, 0, 7);
        assert_vec_near(direction, Vector3::new(0.5, 0.875, 2.0), 1e-9);
    }

    #[test]
    fn test_ray_direction_looking_down_negative_x() {
        let camera = Camera::new()
            .with_position(Point3::ZERO, Vector3::NEG_X, Vector3::Y)
            .with_proj_normal(Vector3::X)
            .with_view_plane(1.0, 1.0, 2.0);
        let basis = camera.basis().unwrap();
        assert_vec_near(basis.u, Vector3::NEG_Z, 1e-12);

        let direction = camera.ray_direction(&basis, 8, 8, 7, 0);
        assert_vec_near(direction, Vector3::new(-1.0, -0.875, -0.4375), 1e-9);
    }

    #[test]
    fn test_ray_direction_is_relative_to_view_point() {
        let camera = Camera::new().with_position(Point3::new(3.0, -2.0, 7.0), Vector3::NEG_Z, Vector3::Y);
        let basis = camera.basis().unwrap();

        let ray = camera.get_ray(&basis, 2, 2, 0, 0);
        assert_eq!(ray.origin, Point3::new(3.0, -2.0, 7.0));
        assert_vec_near(ray.direction, Vector3::new(-0.25, -0.25, -1.0), 1e-12);
    }

    #[test]
    fn test_ray_direction_uses_unit_view_dir() {
        // Scaling view_dir must not move the view plane
        let short = Camera::new();
        let long = Camera::new().with_position(Point3::ZERO, Vector3::new(0.0, 0.0, -10.0), Vector3::Y);
        let basis = short.basis().unwrap();

        assert_eq!(
            short.ray_direction(&basis, 4, 4, 1, 2),
            long.ray_direction(&basis, 4, 4, 1, 2)
        );
    }

    #[test]
    fn test_from_description() {
        let desc = CameraDescription {
            view_point: Point3::new(0.0, 0.0, 5.0),
            proj_distance: 2.0,
            ..Default::default()
        };
        let camera = Camera::from_description(&desc);

        assert_eq!(camera.view_point, Point3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.proj_normal, Vector3::Z);
        assert_eq!(camera.proj_distance, 2.0);
    }

    #[test]
    fn test_validate_view_size() {
        assert!(Camera::new().validate().is_ok());
        assert!(matches!(
            Camera::new().with_view_plane(1.0, 0.0, 1.0).validate(),
            Err(RenderError::InvalidViewSize { .. })
        ));
        assert!(Camera::new().with_view_plane(1.0, 1.0, -2.0).validate().is_err());
        assert!(Camera::new().with_view_plane(1.0, f64::INFINITY, 1.0).validate().is_err());
    }

    #[test]
    fn test_validate_view_direction() {
        // An explicit projection normal keeps the basis valid, so only
        // validate can catch the collapsed view plane
        let zero = Camera::new()
            .with_position(Point3::new(0.0, 0.0, 5.0), Vector3::ZERO, Vector3::Y)
            .with_proj_normal(Vector3::Z);
        assert!(zero.basis().is_ok());
        assert!(matches!(
            zero.validate(),
            Err(RenderError::InvalidViewDirection(_))
        ));

        let nan = Camera::new().with_position(Point3::ZERO, Vector3::new(f64::NAN, 0.0, -1.0), Vector3::Y);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_validate_projection_distance() {
        for distance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Camera::new().with_view_plane(distance, 1.0, 1.0).validate(),
                Err(RenderError::InvalidProjectionDistance(_))
            ));
        }
    }

    #[test]
    fn test_with_position_tracks_projection_normal() {
        let camera = Camera::new().with_position(Point3::new(0.0, 3.0, 0.0), Vector3::NEG_Y, Vector3::NEG_Z);
        assert_eq!(camera.proj_normal, Vector3::Y);
        assert!(camera.basis().is_ok());

        let oblique = camera.with_proj_normal(Vector3::new(0.0, 1.0, 0.2));
        assert_eq!(oblique.proj_normal, Vector3::new(0.0, 1.0, 0.2));
    }
}
