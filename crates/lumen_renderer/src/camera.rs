//! Pinhole camera for primary ray generation.

use lumen_math::{Quat, Ray, Vec2, Vec3};

/// Camera for generating rays into the scene.
///
/// Mutated by user input between frames, read-only while a frame renders.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,

    // Orthonormal basis, kept in sync by update_basis()
    forward: Vec3,
    right: Vec3,
    up: Vec3,

    vfov: f32, // Vertical field of view in degrees
    aspect_ratio: f32,
}

impl Camera {
    /// Camera at the origin looking down -Z with a 45 degree field of view.
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            world_up: Vec3::Y,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            vfov: 45.0,
            aspect_ratio: 1.0,
        };
        camera.update_basis();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.position = look_from;
        self.world_up = vup.try_normalize().unwrap_or(Vec3::Y);
        self.look_at(look_at);
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.set_fov(vfov);
        self
    }

    /// Set the width / height ratio of the image.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.set_aspect_ratio(aspect_ratio);
        self
    }

    /// Generate the primary ray through the centre of pixel (x, y) of a
    /// `viewport_width` x `viewport_height` grid.
    ///
    /// Pixel (0, 0) is the top-left corner.
    pub fn generate_ray(&self, x: u32, y: u32, viewport_width: u32, viewport_height: u32) -> Ray {
        let scale = (self.vfov.to_radians() / 2.0).tan();

        let ndc_x = 2.0 * (x as f32 + 0.5) / viewport_width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * (y as f32 + 0.5) / viewport_height as f32;

        let direction = self.forward
            + self.right * (ndc_x * self.aspect_ratio * scale)
            + self.up * (ndc_y * scale);

        Ray::towards(self.position, direction)
    }

    /// Turn the camera by `angle` radians, split between pitch
    /// (`weights.x`, about the right axis) and yaw (`weights.y`, about world up).
    pub fn rotate(&mut self, angle: f32, weights: Vec2) {
        let yaw = Quat::from_axis_angle(self.world_up, angle * weights.y);
        let pitch = Quat::from_axis_angle(self.right, angle * weights.x);
        let forward = ((yaw * pitch) * self.forward).normalize();

        // Refuse to look straight along world up, the basis would collapse
        if forward.dot(self.world_up).abs() > 0.999 {
            return;
        }

        self.forward = forward;
        self.update_basis();
    }

    /// Swing the camera around `target` by `yaw` and `pitch` radians, keeping
    /// it aimed at the target.
    pub fn orbit(&mut self, target: Vec3, yaw: f32, pitch: f32) {
        let rotation =
            Quat::from_axis_angle(self.world_up, yaw) * Quat::from_axis_angle(self.right, pitch);
        let offset = rotation * (self.position - target);

        if offset.normalize_or_zero().dot(self.world_up).abs() > 0.999 {
            return;
        }

        self.position = target + offset;
        self.look_at(target);
    }

    /// Translate the camera.
    pub fn move_for(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Aim the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        if let Some(forward) = (target - self.position).try_normalize() {
            self.forward = forward;
            self.update_basis();
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_fov(&mut self, vfov: f32) {
        self.vfov = vfov.clamp(1.0, 179.0);
    }

    /// Update aspect ratio (e.g., on window resize)
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            self.aspect_ratio = aspect_ratio;
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov(&self) -> f32 {
        self.vfov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Recompute right/up from forward and world up.
    fn update_basis(&mut self) {
        self.right = self
            .forward
            .cross(self.world_up)
            .try_normalize()
            .unwrap_or_else(|| self.forward.any_orthonormal_vector());
        self.up = self.right.cross(self.forward);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
