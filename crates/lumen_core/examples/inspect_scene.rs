//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/spheres.json

use std::env;

use lumen_core::{load_scene, LightDescription, SurfaceDescription};

fn describe(surface: &SurfaceDescription, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    match surface {
        SurfaceDescription::Sphere {
            center,
            radius,
            material,
        } => println!(
            "{}sphere center=({:.2}, {:.2}, {:.2}) radius={:.2} material={:?}",
            indent, center.x, center.y, center.z, radius, material
        ),
        SurfaceDescription::Plane {
            point,
            normal,
            material,
        } => println!(
            "{}plane point=({:.2}, {:.2}, {:.2}) normal=({:.2}, {:.2}, {:.2}) material={:?}",
            indent, point.x, point.y, point.z, normal.x, normal.y, normal.z, material
        ),
        SurfaceDescription::Disc {
            point,
            radius,
            material,
            ..
        } => println!(
            "{}disc point=({:.2}, {:.2}, {:.2}) radius={:.2} material={:?}",
            indent, point.x, point.y, point.z, radius, material
        ),
        SurfaceDescription::Box { min, max, material } => println!(
            "{}box ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2}) material={:?}",
            indent, min.x, min.y, min.z, max.x, max.y, max.z, material
        ),
        SurfaceDescription::Group { surfaces } => {
            println!("{}group ({} children)", indent, surfaces.len());
            for child in surfaces {
                describe(child, depth + 1);
            }
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== {} ===", path);
            println!("Image: {}x{}", scene.image.width, scene.image.height);
            println!(
                "Camera: eye ({:.2}, {:.2}, {:.2}), view plane {:.2}x{:.2} at distance {:.2}",
                scene.camera.view_point.x,
                scene.camera.view_point.y,
                scene.camera.view_point.z,
                scene.camera.view_width,
                scene.camera.view_height,
                scene.camera.proj_distance
            );

            println!("\n--- Materials ({}) ---", scene.materials.len());
            for material in &scene.materials {
                println!("  {:?}", material);
            }

            println!("\n--- Surfaces ({}) ---", scene.surface_count());
            for surface in &scene.surfaces {
                describe(surface, 0);
            }

            println!("\n--- Lights ({}) ---", scene.lights.len());
            for light in &scene.lights {
                match light {
                    LightDescription::Point {
                        position,
                        intensity,
                    } => println!(
                        "  point at ({:.2}, {:.2}, {:.2}) intensity ({:.2}, {:.2}, {:.2})",
                        position.x, position.y, position.z, intensity.x, intensity.y, intensity.z
                    ),
                    other => println!("  {:?}", other),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
