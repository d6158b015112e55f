//! Simple ray casting example.
//!
//! Builds a scene in code (spheres on a ground plane, a box and a disc),
//! renders it in parallel and saves it as PNG.
//!
//! Run with: cargo run --example simple_render

use std::sync::Arc;

use lumen_renderer::{
    render_parallel, AxisAlignedBox, Camera, Color, Disc, Lambertian, Light, Material, Phong,
    Plane, Point3, PointLight, RenderConfig, Scene, Sphere, Vector3,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Lumen Ray Caster - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    println!("Rendering {}x{}...", scene.width, scene.height);

    let start = std::time::Instant::now();
    let image = match render_parallel(&scene, &RenderConfig::default()) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Render failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    if let Err(e) = image.save(filename) {
        eprintln!("Failed to save image: {}", e);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let camera = Camera::new()
        .with_position(
            Point3::new(0.0, 2.0, 8.0),
            Vector3::new(0.0, -0.2, -1.0),
            Vector3::Y,
        )
        .with_proj_normal(Vector3::new(0.0, 0.2, 1.0))
        .with_view_plane(1.0, 1.6, 0.9);

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.2, 0.1)));
    let blue: Arc<dyn Material> = Arc::new(Phong::new(
        Color::new(0.1, 0.2, 0.8),
        Color::ONE,
        40.0,
    ));
    let gold: Arc<dyn Material> = Arc::new(Phong::new(
        Color::new(0.7, 0.6, 0.2),
        Color::new(1.0, 0.9, 0.6),
        10.0,
    ));

    Scene::new(camera, 800, 450)
        .with_surface(Plane::new(Point3::ZERO, Vector3::Y, ground))
        .with_surface(Sphere::new(Point3::new(-1.5, 1.0, 0.0), 1.0, red))
        .with_surface(Sphere::new(Point3::new(1.5, 1.0, 0.0), 1.0, blue))
        .with_surface(AxisAlignedBox::new(
            Point3::new(-0.4, 0.0, 1.5),
            Point3::new(0.4, 0.8, 2.3),
            gold.clone(),
        ))
        .with_surface(Disc::new(
            Point3::new(0.0, 2.5, -1.5),
            Vector3::new(0.0, 0.3, 1.0),
            0.8,
            gold,
        ))
        .with_light(Light::Ambient)
        .with_light(Light::Point(PointLight::new(
            Point3::new(4.0, 6.0, 5.0),
            Color::splat(60.0),
        )))
        .with_light(Light::Point(PointLight::new(
            Point3::new(-5.0, 3.0, 2.0),
            Color::splat(15.0),
        )))
        .with_ambient_intensity(Color::splat(0.1))
}
