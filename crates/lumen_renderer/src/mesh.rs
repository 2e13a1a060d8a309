//! Indexed triangle lists handed over by asset loaders.
//!
//! Loading files is someone else's job; this module only turns
//! already-loaded positions and indices into scene triangles.

use std::sync::Arc;

use crate::{Material, RenderError, RenderResult, Triangle};
use lumen_math::Vec3;

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Center of the bounding box, or the origin for an empty mesh.
    pub fn center(&self) -> Vec3 {
        if self.positions.is_empty() {
            return Vec3::ZERO;
        }

        let (min, max) = self.positions.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        (min + max) * 0.5
    }

    /// Build flat triangles sharing one material.
    ///
    /// Faces with zero area are skipped; they could never be hit anyway.
    pub fn triangles(&self, material: Arc<Material>) -> RenderResult<Vec<Triangle>> {
        if self.indices.len() % 3 != 0 {
            return Err(RenderError::RaggedIndices(self.indices.len()));
        }

        let vertex_count = self.positions.len();
        let fetch = |index: u32| {
            self.positions
                .get(index as usize)
                .copied()
                .ok_or(RenderError::IndexOutOfRange {
                    index,
                    vertex_count,
                })
        };

        let mut triangles = Vec::with_capacity(self.triangle_count());
        let mut skipped = 0;

        for face in self.indices.chunks_exact(3) {
            let triangle = Triangle::flat(
                fetch(face[0])?,
                fetch(face[1])?,
                fetch(face[2])?,
                material.clone(),
            );

            if triangle.face_normal() == Vec3::ZERO {
                skipped += 1;
                continue;
            }
            triangles.push(triangle);
        }

        if skipped > 0 {
            log::warn!("Skipped {} degenerate faces out of {}", skipped, self.triangle_count());
        }

        Ok(triangles)
    }
}
