//! Scene container: drawables, lights, and the queries the tracer runs on them.

use std::sync::Arc;

use rand::Rng;

use crate::{Drawable, HitRecord, Hittable, Light, Material, Mesh, RenderResult, Sphere};
use lumen_math::{Color, Interval, Ray, Vec3, RAY_EPSILON};

/// Handle to a drawable, returned by [`Scene::add_drawable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(usize);

/// Handle to a light, returned by [`Scene::add_light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(usize);

/// Drawables and lights, scanned linearly.
///
/// Insertion order only matters for ties: when two surfaces are hit at
/// exactly the same distance, the one added first wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    drawables: Vec<Drawable>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable.
    pub fn add_drawable(&mut self, drawable: impl Into<Drawable>) -> DrawableId {
        self.drawables.push(drawable.into());
        DrawableId(self.drawables.len() - 1)
    }

    /// Append a light.
    pub fn add_light(&mut self, light: impl Into<Light>) -> LightId {
        self.lights.push(light.into());
        LightId(self.lights.len() - 1)
    }

    /// Append every face of `mesh` as a flat triangle.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: Arc<Material>) -> RenderResult<Vec<DrawableId>> {
        let triangles = mesh.triangles(material)?;
        Ok(triangles.into_iter().map(|t| self.add_drawable(t)).collect())
    }

    /// Scatter `count` random spheres inside the cube `[-extent, extent]^3`.
    ///
    /// Takes the generator explicitly so a seeded one gives a reproducible scene.
    pub fn scatter_spheres<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        extent: f32,
    ) -> Vec<DrawableId> {
        (0..count)
            .map(|_| {
                let center = Vec3::new(
                    rng.gen_range(-extent..=extent),
                    rng.gen_range(-extent..=extent),
                    rng.gen_range(-extent..=extent),
                );
                let material = Material::new(Color::new(rng.gen(), rng.gen(), rng.gen()))
                    .with_specular(rng.gen_range(0.0..500.0))
                    .with_reflectivity(rng.gen_range(0.0..0.8));

                self.add_drawable(Sphere::new(center, rng.gen_range(0.5..1.0), Arc::new(material)))
            })
            .collect()
    }

    pub fn drawable(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(id.0)
    }

    /// Mutable access for between-frame edits. Rendering borrows the scene
    /// immutably, so this can never race with a frame in flight.
    pub fn drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(id.0)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0)
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of drawables.
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Check if the scene has no drawables.
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Remove all drawables and lights. Previously issued handles become dangling.
    pub fn clear(&mut self) {
        self.drawables.clear();
        self.lights.clear();
    }

    /// Closest hit in front of the ray origin.
    pub fn find_nearest_intersection(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hit(ray, Interval::POSITIVE)
    }

    /// Closest hit with `t` strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for drawable in &self.drawables {
            let interval = ray_t.with_max(closest.as_ref().map_or(ray_t.max, |rec| rec.t));
            if let Some(rec) = drawable.hit(ray, interval) {
                closest = Some(rec);
            }
        }

        closest
    }

    /// True if anything lies between `point` and a light `max_distance` away
    /// along the unit `light_dir`.
    ///
    /// The shadow ray starts `RAY_EPSILON` above the surface along `normal`.
    pub fn is_occluded(&self, point: Vec3, normal: Vec3, light_dir: Vec3, max_distance: f32) -> bool {
        let shadow_ray = Ray::offset(point, normal, light_dir, RAY_EPSILON);
        let range = Interval::new(RAY_EPSILON, max_distance);
        self.drawables
            .iter()
            .any(|drawable| drawable.hit(&shadow_ray, range).is_some())
    }
}
