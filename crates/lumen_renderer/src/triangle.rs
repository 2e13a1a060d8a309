//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::borrow::Cow;
use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Mat4, Ray, Vec3};

/// Determinants below this mean the ray is parallel to the plane or the
/// triangle is degenerate.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A triangle corner with its own material.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Vec3,
    material: Arc<Material>,
}

impl Vertex {
    pub fn new(position: Vec3, material: Arc<Material>) -> Self {
        Self { position, material }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// A triangle primitive.
///
/// When all three vertices share one material the triangle is flat shaded;
/// otherwise the material is blended barycentrically across the face.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Vertex; 3],
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Create a flat triangle with a single shared material.
    pub fn flat(p0: Vec3, p1: Vec3, p2: Vec3, material: Arc<Material>) -> Self {
        Self::new(
            Vertex::new(p0, material.clone()),
            Vertex::new(p1, material.clone()),
            Vertex::new(p2, material),
        )
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex; 3] {
        &mut self.vertices
    }

    /// Unit face normal following counter-clockwise winding, or zero for a
    /// degenerate triangle.
    pub fn face_normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.positions();
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Apply an affine transform to every vertex.
    pub fn transform(&mut self, matrix: &Mat4) {
        for vertex in &mut self.vertices {
            vertex.position = matrix.transform_point3(vertex.position);
        }
    }

    fn positions(&self) -> [Vec3; 3] {
        [
            self.vertices[0].position,
            self.vertices[1].position,
            self.vertices[2].position,
        ]
    }

    fn material_at(&self, weights: [f32; 3]) -> Cow<'_, Material> {
        let [a, b, c] = &self.vertices;
        if Arc::ptr_eq(&a.material, &b.material) && Arc::ptr_eq(&a.material, &c.material) {
            Cow::Borrowed(a.material.as_ref())
        } else {
            Cow::Owned(Material::blend(
                [a.material(), b.material(), c.material()],
                weights,
            ))
        }
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let [v0, v1, v2] = self.positions();
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle, or the triangle has no area
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - v0;
        let u = f * s.dot(h);
        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        let w = 1.0 - u - v;

        // Barycentric containment
        let inside = |x: f32| (0.0..=1.0).contains(&x);
        if !(inside(u) && inside(v) && inside(w)) {
            return None;
        }

        let t = f * edge2.dot(q);
        if !ray_t.surrounds(t) {
            return None;
        }

        let normal = edge1.cross(edge2).normalize_or_zero();
        if normal == Vec3::ZERO {
            return None;
        }

        Some(HitRecord::new(ray, t, normal, self.material_at([w, u, v])))
    }

    /// Centroid of the three vertices.
    fn position(&self) -> Vec3 {
        let [v0, v1, v2] = self.positions();
        (v0 + v1 + v2) / 3.0
    }

    fn translate(&mut self, delta: Vec3) {
        for vertex in &mut self.vertices {
            vertex.position += delta;
        }
    }
}
