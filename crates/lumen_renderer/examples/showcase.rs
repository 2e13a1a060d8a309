//! Showcase scene.
//!
//! Renders a grid of spheres with increasing reflectivity in front of a
//! per-vertex colored triangle, over a mirrored ground plane, and saves a PNG.
//!
//! Usage: `cargo run --example showcase -- [config.json] [output.png]`

use std::sync::Arc;

use anyhow::Result;
use lumen_math::{gray, palette, Vec3};
use lumen_renderer::{
    AmbientLight, AntialiasingLevel, Camera, DirectionalLight, Material, RenderConfig, Renderer,
    Scene, Sphere, Triangle, Vertex,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RenderConfig::load(&path)?,
        None => RenderConfig::default()
            .with_antialiasing(AntialiasingLevel::X2)
            .with_max_depth(2)
            .with_background(gray(80)),
    };
    let output = args.next().unwrap_or_else(|| "showcase.png".to_string());

    let scene = build_scene();
    let camera = Camera::new()
        .with_position(Vec3::new(0.0, 6.0, 6.0), Vec3::new(0.0, 3.0, -4.0), Vec3::Y)
        .with_fov(45.0)
        .with_aspect_ratio(WIDTH as f32 / HEIGHT as f32);

    let mut renderer = Renderer::new(WIDTH, HEIGHT, config)?;
    let frame = renderer.render(&scene, &camera);
    frame.save_png(&output)?;

    let stats = renderer.last_stats();
    log::info!(
        "Rendered in {:.2?} ({} primary, {} shadow, {} reflection rays)",
        stats.elapsed,
        stats.primary_rays,
        stats.shadow_rays,
        stats.reflection_rays
    );

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Backdrop triangle blending red, green and blue across its face
    let corner = |position: Vec3, color| {
        let material = Material::new(color)
            .with_specular(500.0)
            .with_reflectivity(0.7);
        Vertex::new(position + Vec3::Y, Arc::new(material))
    };
    scene.add_drawable(Triangle::new(
        corner(Vec3::new(-2.0, -2.0, -7.0), palette::RED),
        corner(Vec3::new(0.0, 2.0, -7.0), palette::GREEN),
        corner(Vec3::new(2.0, -2.0, -7.0), palette::BLUE),
    ));

    let sphere = |center: Vec3, radius: f32, material: Material| {
        Sphere::new(center, radius, Arc::new(material))
    };
    scene.add_drawable(sphere(
        Vec3::new(0.0, 0.0, -2.0),
        0.4,
        Material::new(palette::MAGENTA).with_specular(500.0),
    ));

    // Two rows of three, reflectivity rising from 0 to 1
    let grid = [
        (Vec3::new(-1.0, 0.5, -3.0), palette::RED, 0.0),
        (Vec3::new(0.0, 0.5, -3.0), palette::GREEN, 0.2),
        (Vec3::new(1.0, 0.5, -3.0), palette::BLUE, 0.4),
        (Vec3::new(-1.0, -0.5, -3.0), palette::YELLOW, 0.6),
        (Vec3::new(0.0, -0.5, -3.0), palette::CYAN, 0.8),
        (Vec3::new(1.0, -0.5, -3.0), palette::WHITE, 1.0),
    ];
    for (center, color, reflectivity) in grid {
        let material = Material::new(color)
            .with_specular(500.0)
            .with_reflectivity(reflectivity);
        scene.add_drawable(sphere(center, 0.5, material));
    }

    // Dark mirror floor
    let floor = Arc::new(
        Material::new(palette::BLACK)
            .with_specular(500.0)
            .with_reflectivity(0.6),
    );
    scene.add_drawable(Triangle::flat(
        Vec3::new(-15.0, -1.5, 2.0),
        Vec3::new(0.0, -1.0, -17.0),
        Vec3::new(15.0, -1.5, 2.0),
        floor,
    ));

    scene.add_light(DirectionalLight::new(Vec3::new(1.0, -1.0, -2.0), palette::WHITE, 1.0));
    scene.add_light(AmbientLight::new(palette::WHITE, 0.1));

    scene
}
