//! Linear RGB colors and their packed `0xRRGGBBAA` frame-buffer form.

use crate::{Interval, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Named colors.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::ZERO;
    pub const WHITE: Color = Color::ONE;
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
}

/// A gray with all channels at `level / 255`.
pub fn gray(level: u8) -> Color {
    Color::splat(level as f32 / 255.0)
}

/// Clamp every channel to [0, 1].
#[inline]
pub fn saturate(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

#[inline]
fn to_byte(channel: f32) -> u32 {
    (255.0 * Interval::UNIT.clamp(channel)).round() as u32
}

/// Pack a color as `0xRRGGBBAA` with an opaque alpha.
pub fn pack_rgba(color: Color) -> u32 {
    (to_byte(color.x) << 24) | (to_byte(color.y) << 16) | (to_byte(color.z) << 8) | 0xFF
}

/// Unpack a `0xRRGGBBAA` value, discarding alpha.
pub fn unpack_rgba(rgba: u32) -> Color {
    let channel = |shift: u32| ((rgba >> shift) & 0xFF) as f32 / 255.0;
    Color::new(channel(24), channel(16), channel(8))
}
