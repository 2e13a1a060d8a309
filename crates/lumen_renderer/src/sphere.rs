//! Sphere primitive for ray tracing.

use std::borrow::Cow;
use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Ray, Vec3};

/// Squared direction lengths below this are treated as degenerate rays.
const MIN_DIRECTION_SQUARED: f32 = 1e-12;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        assert!(radius >= 0.0, "sphere radius must be non-negative, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Change the radius.
    ///
    /// # Panics
    /// A negative radius is a construction bug and panics.
    pub fn set_radius(&mut self, radius: f32) {
        assert!(radius >= 0.0, "sphere radius must be non-negative, got {radius}");
        self.radius = radius;
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Arc<Material>) {
        self.material = material;
    }
}

impl Hittable for Sphere {
    /// Only the near root of the quadratic is considered. A ray starting
    /// inside the sphere has its near root behind the origin and so reports
    /// no hit.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let k = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a < MIN_DIRECTION_SQUARED {
            return None;
        }

        let b = 2.0 * k.dot(ray.direction());
        let c = k.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        let outward_normal = (p - self.center).normalize_or_zero();
        if outward_normal == Vec3::ZERO {
            // Zero-radius sphere
            return None;
        }

        Some(HitRecord::new(
            ray,
            t,
            outward_normal,
            Cow::Borrowed(self.material.as_ref()),
        ))
    }

    fn position(&self) -> Vec3 {
        self.center
    }

    fn translate(&mut self, delta: Vec3) {
        self.center += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::palette;

    fn gray_sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Arc::new(Material::new(Vec3::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.intersect(&ray).expect("ray aims at the sphere");
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_negative_discriminant_is_no_hit() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        // Parallel to -Z but offset by 2 units: passes the sphere entirely
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_ray_leaving_surface_along_normal_is_no_hit() {
        let center = Vec3::new(1.0, -2.0, -4.0);
        let sphere = gray_sphere(center, 0.75);

        for dir in [
            Vec3::X,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.8, -0.2).normalize(),
        ] {
            let origin = center + dir * 0.75;
            let ray = Ray::new(origin, dir);
            assert!(sphere.intersect(&ray).is_none(), "outward ray along {dir:?} hit");
        }
    }

    #[test]
    fn test_origin_inside_sphere_is_no_hit() {
        let sphere = gray_sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_zero_direction_is_no_hit() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_respects_interval_max() {
        let sphere = gray_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.hit(&ray, Interval::new(0.0, 5.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.0, 9.5)).is_some());
    }

    #[test]
    fn test_material_is_borrowed() {
        let material = Arc::new(Material::new(palette::CYAN).with_specular(50.0));
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, material.clone());
        let rec = sphere.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();

        assert!(matches!(rec.material, Cow::Borrowed(_)));
        assert_eq!(*rec.material, *material);
    }

    #[test]
    fn test_set_radius() {
        let mut sphere = gray_sphere(Vec3::ZERO, 1.0);
        sphere.set_radius(3.0);
        assert_eq!(sphere.radius(), 3.0);
    }

    #[test]
    #[should_panic]
    fn test_negative_radius_panics() {
        let mut sphere = gray_sphere(Vec3::ZERO, 1.0);
        sphere.set_radius(-1.0);
    }
}
