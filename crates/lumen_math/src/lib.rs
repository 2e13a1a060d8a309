// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod color;
mod interval;
mod ray;
mod vector;

pub use color::{gray, pack_rgba, palette, saturate, unpack_rgba, Color};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, refract, RAY_EPSILON};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_is_vec3() {
        let c: Color = palette::RED + palette::GREEN;
        assert_eq!(c, Vec3::new(1.0, 1.0, 0.0));
    }
}
