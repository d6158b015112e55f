//! Scene description types for Lumen.
//!
//! This module defines the on-disk representation of a scene. It mirrors the
//! runtime scene one-to-one but stays renderer-agnostic: materials are
//! referenced by name, the camera basis is not yet built, and nothing is
//! validated beyond what serde enforces.

use lumen_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

fn white() -> DVec3 {
    DVec3::ONE
}

fn one() -> f64 {
    1.0
}

fn default_view_dir() -> Vector3 {
    Vector3::NEG_Z
}

fn default_view_up() -> Vector3 {
    Vector3::Y
}

/// Output image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageDescription {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageDescription {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
        }
    }
}

/// Pinhole camera parameters.
///
/// The defaults describe a camera at the origin looking down -Z with a 1x1
/// view plane one unit in front of it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    /// Eye position
    #[serde(default)]
    pub view_point: Point3,

    /// Direction the camera looks along (need not be unit length)
    #[serde(default = "default_view_dir")]
    pub view_dir: Vector3,

    /// Approximate up direction, used to build the basis
    #[serde(default = "default_view_up")]
    pub view_up: Vector3,

    /// Normal of the view plane; `-view_dir` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proj_normal: Option<Vector3>,

    /// Distance from the eye to the view plane along `view_dir`
    #[serde(default = "one")]
    pub proj_distance: f64,

    /// View plane width in world units
    #[serde(default = "one")]
    pub view_width: f64,

    /// View plane height in world units
    #[serde(default = "one")]
    pub view_height: f64,
}

impl CameraDescription {
    /// The projection normal, falling back to the reversed view direction.
    pub fn projection_normal(&self) -> Vector3 {
        self.proj_normal.unwrap_or(-self.view_dir)
    }
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            view_point: Point3::ZERO,
            view_dir: default_view_dir(),
            view_up: default_view_up(),
            proj_normal: None,
            proj_distance: 1.0,
            view_width: 1.0,
            view_height: 1.0,
        }
    }
}

/// A named material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Diffuse-only reflectance.
    Lambertian {
        name: String,
        #[serde(default = "white")]
        color: DVec3,
    },
    /// Diffuse plus a Blinn-Phong highlight.
    Phong {
        name: String,
        #[serde(default = "white")]
        color: DVec3,
        #[serde(default = "white")]
        specular_color: DVec3,
        #[serde(default = "one")]
        exponent: f64,
    },
}

impl MaterialDescription {
    /// The name surfaces use to reference this material.
    pub fn name(&self) -> &str {
        match self {
            MaterialDescription::Lambertian { name, .. } => name,
            MaterialDescription::Phong { name, .. } => name,
        }
    }
}

/// A surface in the scene. `material` names an entry of
/// [`SceneDescription::materials`]; the scene default applies when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceDescription {
    Sphere {
        #[serde(default)]
        center: Point3,
        #[serde(default = "one")]
        radius: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<String>,
    },
    Plane {
        point: Point3,
        normal: Vector3,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<String>,
    },
    Disc {
        point: Point3,
        normal: Vector3,
        #[serde(default = "one")]
        radius: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<String>,
    },
    Box {
        min: Point3,
        max: Point3,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<String>,
    },
    Group {
        #[serde(default)]
        surfaces: Vec<SurfaceDescription>,
    },
}

impl SurfaceDescription {
    /// Number of leaf surfaces, descending into groups.
    pub fn leaf_count(&self) -> usize {
        match self {
            SurfaceDescription::Group { surfaces } => {
                surfaces.iter().map(SurfaceDescription::leaf_count).sum()
            }
            _ => 1,
        }
    }
}

/// A light source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightDescription {
    /// Scene ambient intensity times the material color.
    Ambient,
    /// The material color, unlit.
    Constant,
    /// Surface normal mapped to a color, for debugging.
    Normal,
    /// Distance-attenuated, shadowed point source.
    Point {
        position: Point3,
        #[serde(default = "white")]
        intensity: DVec3,
    },
}

/// A complete scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub image: ImageDescription,

    #[serde(default)]
    pub camera: CameraDescription,

    /// Color the ambient light multiplies into material colors
    #[serde(default = "white")]
    pub ambient_intensity: DVec3,

    #[serde(default)]
    pub materials: Vec<MaterialDescription>,

    #[serde(default)]
    pub surfaces: Vec<SurfaceDescription>,

    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Total number of leaf surfaces, descending into groups.
    pub fn surface_count(&self) -> usize {
        self.surfaces.iter().map(SurfaceDescription::leaf_count).sum()
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            image: ImageDescription::default(),
            camera: CameraDescription::default(),
            ambient_intensity: white(),
            materials: Vec::new(),
            surfaces: Vec::new(),
            lights: Vec::new(),
        }
    }
}
