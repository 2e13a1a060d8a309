//! Surface material for Whitted-style shading.

use lumen_math::Color;

/// Surface properties consulted by the shading step.
///
/// Materials are shared between drawables through `Arc<Material>`, e.g. a
/// single ground material used by several triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base (diffuse) color
    pub color: Color,
    /// Phong exponent. Zero disables the specular highlight.
    pub specular_index: f32,
    /// Fraction of light that is mirror-reflected, in [0, 1]
    pub reflective_index: f32,
    /// Index of refraction (stored for scene descriptions, not used by shading)
    pub refraction_index: f32,
}

impl Material {
    /// Create a matte material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular_index: 0.0,
            reflective_index: 0.0,
            refraction_index: 1.0,
        }
    }

    /// Set the Phong exponent.
    pub fn with_specular(mut self, specular_index: f32) -> Self {
        self.specular_index = specular_index.max(0.0);
        self
    }

    /// Set the mirror-reflection fraction.
    ///
    /// - `0.0`: no reflection ray is ever traced
    /// - `1.0`: perfect mirror, the base color is not visible
    pub fn with_reflectivity(mut self, reflective_index: f32) -> Self {
        self.reflective_index = reflective_index.clamp(0.0, 1.0);
        self
    }

    /// Set the index of refraction (1.0 = air, 1.5 = glass).
    pub fn with_refraction(mut self, refraction_index: f32) -> Self {
        self.refraction_index = refraction_index.max(1.0);
        self
    }

    /// True if shading this material spawns a reflection ray.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.reflective_index > 0.0
    }

    /// Barycentric blend of three materials. Weights are expected to sum to 1.
    pub fn blend(materials: [&Material; 3], weights: [f32; 3]) -> Material {
        let mix = |f: fn(&Material) -> f32| {
            materials
                .iter()
                .zip(weights)
                .map(|(m, w)| f(*m) * w)
                .sum::<f32>()
        };

        Material {
            color: materials
                .iter()
                .zip(weights)
                .fold(Color::ZERO, |acc, (m, w)| acc + m.color * w),
            specular_index: mix(|m| m.specular_index),
            reflective_index: mix(|m| m.reflective_index),
            refraction_index: mix(|m| m.refraction_index),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::splat(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::palette;

    #[test]
    fn test_builder_clamps_ranges() {
        let m = Material::new(palette::RED)
            .with_specular(-3.0)
            .with_reflectivity(1.7)
            .with_refraction(0.5);

        assert_eq!(m.specular_index, 0.0);
        assert_eq!(m.reflective_index, 1.0);
        assert_eq!(m.refraction_index, 1.0);
    }

    #[test]
    fn test_is_reflective() {
        assert!(!Material::new(palette::RED).is_reflective());
        assert!(Material::new(palette::RED).with_reflectivity(0.2).is_reflective());
    }

    #[test]
    fn test_blend_at_vertex_returns_that_material() {
        let red = Material::new(palette::RED).with_specular(100.0);
        let green = Material::new(palette::GREEN).with_reflectivity(0.5);
        let blue = Material::new(palette::BLUE);

        let blended = Material::blend([&red, &green, &blue], [0.0, 1.0, 0.0]);
        assert_eq!(blended, green);
    }

    #[test]
    fn test_blend_centroid_averages() {
        let red = Material::new(palette::RED);
        let green = Material::new(palette::GREEN);
        let blue = Material::new(palette::BLUE).with_reflectivity(0.9);

        let third = 1.0 / 3.0;
        let blended = Material::blend([&red, &green, &blue], [third, third, third]);

        assert!((blended.color - Color::splat(third)).length() < 1e-6);
        assert!((blended.reflective_index - 0.3).abs() < 1e-6);
    }
}
