//! Runtime scene: camera, surfaces, lights and materials ready to render.

use std::collections::HashMap;
use std::sync::Arc;

use lumen_core::{LightDescription, MaterialDescription, SceneDescription, SurfaceDescription};

use crate::axis_box::AxisAlignedBox;
use crate::camera::Camera;
use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::light::{Light, PointLight, ShadingContext};
use crate::material::{Lambertian, Material, Phong};
use crate::plane::{Disc, Plane};
use crate::sphere::Sphere;
use crate::surface::{Group, Surface};

/// A renderable scene.
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub group: Group,
    /// Named materials, in declaration order
    pub materials: Vec<(String, Arc<dyn Material>)>,
    pub width: u32,
    pub height: u32,
    pub ambient_intensity: Color,
    default_material: Arc<dyn Material>,
}

impl Scene {
    /// Create an empty scene with the given camera and image size.
    pub fn new(camera: Camera, width: u32, height: u32) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            group: Group::new(),
            materials: Vec::new(),
            width,
            height,
            ambient_intensity: Color::ONE,
            default_material: Arc::new(Lambertian::default()),
        }
    }

    /// Add a surface.
    pub fn with_surface(mut self, surface: impl Surface + 'static) -> Self {
        self.group.add(Box::new(surface));
        self
    }

    /// Add a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Set the ambient intensity.
    pub fn with_ambient_intensity(mut self, intensity: Color) -> Self {
        self.ambient_intensity = intensity;
        self
    }

    /// The material shared by surfaces that do not name one (white Lambertian).
    pub fn default_material(&self) -> Arc<dyn Material> {
        Arc::clone(&self.default_material)
    }

    /// Build and validate a scene from its description.
    pub fn from_description(desc: &SceneDescription) -> RenderResult<Self> {
        // Groups that only nest other empty groups count as nothing
        if desc.surface_count() == 0 {
            return Err(RenderError::EmptyScene);
        }

        let mut scene = Scene::new(
            Camera::from_description(&desc.camera),
            desc.image.width,
            desc.image.height,
        )
        .with_ambient_intensity(desc.ambient_intensity);

        let mut by_name: HashMap<&str, Arc<dyn Material>> = HashMap::new();
        for material_desc in &desc.materials {
            let name = material_desc.name();
            let material = build_material(material_desc);
            if by_name.insert(name, Arc::clone(&material)).is_some() {
                return Err(RenderError::DuplicateMaterial(name.to_string()));
            }
            scene.materials.push((name.to_string(), material));
        }

        for surface_desc in &desc.surfaces {
            let surface = build_surface(surface_desc, &by_name, &scene.default_material)?;
            scene.group.add(surface);
        }

        scene.lights = desc.lights.iter().map(build_light).collect();

        scene.validate()?;
        if scene.lights.is_empty() {
            log::warn!("Scene has no lights, every pixel will be black");
        }

        log::info!(
            "Built scene: {}x{}, {} surfaces, {} materials, {} lights",
            scene.width,
            scene.height,
            desc.surface_count(),
            scene.materials.len(),
            scene.lights.len()
        );

        Ok(scene)
    }

    /// Check everything that must hold before rendering.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.group.is_empty() {
            return Err(RenderError::EmptyScene);
        }
        self.camera.validate()?;
        self.camera.basis()?;
        Ok(())
    }

    /// Shading context shared by every pixel.
    pub fn shading_context(&self) -> ShadingContext<'_> {
        ShadingContext {
            group: &self.group,
            ambient_intensity: self.ambient_intensity,
        }
    }
}

fn build_material(desc: &MaterialDescription) -> Arc<dyn Material> {
    match desc {
        MaterialDescription::Lambertian { color, .. } => Arc::new(Lambertian::new(*color)),
        MaterialDescription::Phong {
            color,
            specular_color,
            exponent,
            ..
        } => Arc::new(Phong::new(*color, *specular_color, *exponent)),
    }
}

fn resolve_material(
    name: Option<&str>,
    by_name: &HashMap<&str, Arc<dyn Material>>,
    default: &Arc<dyn Material>,
) -> RenderResult<Arc<dyn Material>> {
    match name {
        None => Ok(Arc::clone(default)),
        Some(name) => by_name
            .get(name)
            .cloned()
            .ok_or_else(|| RenderError::UnknownMaterial(name.to_string())),
    }
}

fn build_surface(
    desc: &SurfaceDescription,
    by_name: &HashMap<&str, Arc<dyn Material>>,
    default: &Arc<dyn Material>,
) -> RenderResult<Box<dyn Surface>> {
    let surface: Box<dyn Surface> = match desc {
        SurfaceDescription::Sphere {
            center,
            radius,
            material,
        } => {
            if *radius <= 0.0 {
                log::warn!("Sphere at {} has radius {} and will never be hit", center, radius);
            }
            Box::new(Sphere::new(
                *center,
                *radius,
                resolve_material(material.as_deref(), by_name, default)?,
            ))
        }
        SurfaceDescription::Plane {
            point,
            normal,
            material,
        } => Box::new(Plane::new(
            *point,
            *normal,
            resolve_material(material.as_deref(), by_name, default)?,
        )),
        SurfaceDescription::Disc {
            point,
            normal,
            radius,
            material,
        } => Box::new(Disc::new(
            *point,
            *normal,
            *radius,
            resolve_material(material.as_deref(), by_name, default)?,
        )),
        SurfaceDescription::Box { min, max, material } => Box::new(AxisAlignedBox::new(
            *min,
            *max,
            resolve_material(material.as_deref(), by_name, default)?,
        )),
        SurfaceDescription::Group { surfaces } => {
            if surfaces.is_empty() {
                log::warn!("Empty surface group will never be hit");
            }
            let mut group = Group::new();
            for child in surfaces {
                group.add(build_surface(child, by_name, default)?);
            }
            Box::new(group)
        }
    };

    Ok(surface)
}

fn build_light(desc: &LightDescription) -> Light {
    match desc {
        LightDescription::Ambient => Light::Ambient,
        LightDescription::Constant => Light::Constant,
        LightDescription::Normal => Light::Normal,
        LightDescription::Point {
            position,
            intensity,
        } => Light::Point(PointLight::new(*position, *intensity)),
    }
}
