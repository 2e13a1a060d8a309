//! Vector helpers shared by shading and secondary-ray generation.

use crate::Vec3;

/// Offset applied along the surface normal to the origin of every
/// secondary ray (shadow and reflection) to avoid shadow acne.
pub const RAY_EPSILON: f32 = 1e-3;

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with unit normal `n`.
///
/// `n1_over_n2` is the ratio of refraction indices on either side.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, n1_over_n2: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = n1_over_n2 * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
