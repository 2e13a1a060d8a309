//! Recursive Whitted shading.
//!
//! Local illumination is diffuse plus Phong specular from every light, with
//! hard shadows from point lights. Reflective surfaces blend in the color seen
//! along the mirror direction, up to `max_depth` bounces.

use std::ops::AddAssign;

use crate::{HitRecord, Illuminant, RenderConfig, Scene, SpecularBlend};
use lumen_math::{reflect, saturate, Color, Ray, RAY_EPSILON};

/// Ray counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub primary_rays: u64,
    pub shadow_rays: u64,
    pub reflection_rays: u64,
}

impl AddAssign for TraceStats {
    fn add_assign(&mut self, other: Self) {
        self.primary_rays += other.primary_rays;
        self.shadow_rays += other.shadow_rays;
        self.reflection_rays += other.reflection_rays;
    }
}

/// Per-tile tracing context. Borrows the scene and config for one frame.
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    stats: TraceStats,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Self {
            scene,
            config,
            stats: TraceStats::default(),
        }
    }

    /// Trace a camera ray.
    pub fn trace_primary(&mut self, ray: &Ray) -> Color {
        self.stats.primary_rays += 1;
        self.trace_ray(ray, 0)
    }

    /// Color seen along `ray`, `depth` bounces below the camera.
    pub fn trace_ray(&mut self, ray: &Ray, depth: u32) -> Color {
        let scene = self.scene;
        let Some(rec) = scene.find_nearest_intersection(ray) else {
            return self.config.background;
        };

        let local = self.shade(&rec);
        let reflectivity = rec.material.reflective_index;
        if depth >= self.config.max_depth || reflectivity <= 0.0 {
            return saturate(local);
        }

        let bounce = Ray::offset(
            rec.p,
            rec.normal,
            reflect(ray.direction(), rec.normal),
            RAY_EPSILON,
        );
        self.stats.reflection_rays += 1;
        let reflected = self.trace_ray(&bounce, depth + 1);

        saturate(local * (1.0 - reflectivity) + reflected * reflectivity)
    }

    /// Local illumination at a hit, before reflection.
    pub fn shade(&mut self, rec: &HitRecord<'_>) -> Color {
        let material = rec.material.as_ref();
        let view = -rec.ray.direction();

        let mut diffuse = Color::ZERO;
        let mut specular = Color::ZERO;

        for light in self.scene.lights() {
            let occluded = match light.shadow_probe(rec.p, rec.normal) {
                Some((to_light, distance)) => {
                    self.stats.shadow_rays += 1;
                    self.scene.is_occluded(rec.p, rec.normal, to_light, distance)
                }
                None => false,
            };

            let Some(lit) = light.illuminate(rec.p, rec.normal, occluded) else {
                continue;
            };
            diffuse += lit.color;

            if material.specular_index <= 0.0 {
                continue;
            }
            if let Some(to_light) = lit.direction {
                let mirror = reflect(-to_light, rec.normal);
                let highlight =
                    lit.intensity * mirror.dot(view).max(0.0).powf(material.specular_index);
                specular += match self.config.specular {
                    SpecularBlend::Additive => Color::splat(highlight),
                    SpecularBlend::LightTinted | SpecularBlend::MaterialTinted => {
                        light.color() * highlight
                    }
                };
            }
        }

        if self.config.specular == SpecularBlend::MaterialTinted {
            specular *= material.color;
        }

        material.color * diffuse + specular
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }
}
