//! Hittable trait, HitRecord, and the closed set of scene drawables.

use std::borrow::Cow;

use crate::{Material, Sphere, Triangle};
use lumen_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Created per intersection test and consumed right away by shading.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection (always points against the ray)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Material at the intersection point. Borrowed from the drawable unless
    /// the surface blends several materials.
    pub material: Cow<'a, Material>,
    /// The ray that produced this hit
    pub ray: Ray,
}

impl<'a> HitRecord<'a> {
    /// Build a record, flipping `outward_normal` so it faces the incoming ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: Cow<'a, Material>) -> Self {
        let normal = if ray.direction().dot(outward_normal) < 0.0 {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.at(t),
            normal,
            t,
            material,
            ray: *ray,
        }
    }
}

/// Capability shared by everything a ray can strike.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Nearest intersection in front of the ray origin.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hit(ray, Interval::POSITIVE)
    }

    /// Reference point used for interactive moves (sphere center, triangle centroid).
    fn position(&self) -> Vec3;

    /// Move the object by `delta`.
    fn translate(&mut self, delta: Vec3);
}

/// A surface owned by the scene.
#[derive(Debug, Clone)]
pub enum Drawable {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Drawable {
    /// The material at the surface's first vertex / whole surface.
    pub fn material(&self) -> &Material {
        match self {
            Drawable::Sphere(sphere) => sphere.material(),
            Drawable::Triangle(triangle) => triangle.vertices()[0].material(),
        }
    }

    pub fn as_sphere_mut(&mut self) -> Option<&mut Sphere> {
        match self {
            Drawable::Sphere(sphere) => Some(sphere),
            _ => None,
        }
    }

    pub fn as_triangle_mut(&mut self) -> Option<&mut Triangle> {
        match self {
            Drawable::Triangle(triangle) => Some(triangle),
            _ => None,
        }
    }
}

impl Hittable for Drawable {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Drawable::Sphere(sphere) => sphere.hit(ray, ray_t),
            Drawable::Triangle(triangle) => triangle.hit(ray, ray_t),
        }
    }

    fn position(&self) -> Vec3 {
        match self {
            Drawable::Sphere(sphere) => sphere.position(),
            Drawable::Triangle(triangle) => triangle.position(),
        }
    }

    fn translate(&mut self, delta: Vec3) {
        match self {
            Drawable::Sphere(sphere) => sphere.translate(delta),
            Drawable::Triangle(triangle) => triangle.translate(delta),
        }
    }
}

impl From<Sphere> for Drawable {
    fn from(sphere: Sphere) -> Self {
        Drawable::Sphere(sphere)
    }
}

impl From<Triangle> for Drawable {
    fn from(triangle: Triangle) -> Self {
        Drawable::Triangle(triangle)
    }
}
