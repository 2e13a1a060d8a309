use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Primary and secondary rays are created fresh for every cast. Shading code
/// expects `direction` to be unit length; constructors do not normalize, so
/// callers that build rays from arbitrary vectors should use [`Ray::towards`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray with a normalized direction.
    ///
    /// A zero-length direction stays zero; intersection routines report
    /// "no hit" for such rays.
    #[inline]
    pub fn towards(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction.normalize_or_zero())
    }

    /// Create a secondary ray whose origin is pushed `bias` along `normal`.
    ///
    /// Used for shadow and reflection rays so they do not re-hit the surface
    /// they start on.
    #[inline]
    pub fn offset(point: Vec3, normal: Vec3, direction: Vec3, bias: f32) -> Self {
        Self::new(point + normal * bias, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}
