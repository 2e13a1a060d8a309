//! Scene illuminants. Color and intensity are kept separate.

use lumen_math::{Color, Vec3};

/// One light's contribution at a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Diffuse term: `color * intensity * cos` (no cosine for ambient)
    pub color: Color,
    /// The light's scalar intensity, used by the specular term
    pub intensity: f32,
    /// Unit vector from the surface toward the light. `None` for ambient light.
    pub direction: Option<Vec3>,
}

/// Capability shared by every light type.
pub trait Illuminant: Send + Sync {
    /// Direction toward the light and the distance to test for blockers, if
    /// this light can be shadowed at `point`.
    ///
    /// Lights that cannot be blocked, or that face away from the surface,
    /// return `None`, so no shadow ray is cast.
    fn shadow_probe(&self, _point: Vec3, _normal: Vec3) -> Option<(Vec3, f32)> {
        None
    }

    /// Contribution at `point` with unit `normal`. `occluded` is the result
    /// of the shadow test for the probe returned by [`Illuminant::shadow_probe`].
    fn illuminate(&self, point: Vec3, normal: Vec3, occluded: bool) -> Option<Illumination>;
}

/// Constant illumination floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub const fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }
}

impl Illuminant for AmbientLight {
    fn illuminate(&self, _point: Vec3, _normal: Vec3, _occluded: bool) -> Option<Illumination> {
        Some(Illumination {
            color: self.color * self.intensity,
            intensity: self.intensity,
            direction: None,
        })
    }
}

/// Light arriving from infinitely far away along a fixed direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit direction the light travels in
    direction: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl DirectionalLight {
    /// `direction` is the way the light travels; it is normalized here.
    pub fn new(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
            intensity,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
    }
}

impl Illuminant for DirectionalLight {
    fn illuminate(&self, _point: Vec3, normal: Vec3, _occluded: bool) -> Option<Illumination> {
        let to_light = -self.direction;
        let cos = normal.dot(to_light);
        if cos <= 0.0 {
            return None;
        }

        Some(Illumination {
            color: self.color * self.intensity * cos,
            intensity: self.intensity,
            direction: Some(to_light),
        })
    }
}

/// Omnidirectional light at a point. Blocked by any opaque surface in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl PointLight {
    pub const fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    fn facing(&self, point: Vec3, normal: Vec3) -> Option<(Vec3, f32, f32)> {
        let offset = self.position - point;
        let distance = offset.length();
        let to_light = offset.normalize_or_zero();
        let cos = normal.dot(to_light);
        (cos > 0.0).then_some((to_light, distance, cos))
    }
}

impl Illuminant for PointLight {
    fn shadow_probe(&self, point: Vec3, normal: Vec3) -> Option<(Vec3, f32)> {
        self.facing(point, normal)
            .map(|(to_light, distance, _)| (to_light, distance))
    }

    fn illuminate(&self, point: Vec3, normal: Vec3, occluded: bool) -> Option<Illumination> {
        if occluded {
            return None;
        }

        let (to_light, _, cos) = self.facing(point, normal)?;
        Some(Illumination {
            color: self.color * self.intensity * cos,
            intensity: self.intensity,
            direction: Some(to_light),
        })
    }
}

/// A light owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    pub fn color(&self) -> Color {
        match self {
            Light::Ambient(light) => light.color,
            Light::Directional(light) => light.color,
            Light::Point(light) => light.color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient(light) => light.intensity,
            Light::Directional(light) => light.intensity,
            Light::Point(light) => light.intensity,
        }
    }

    pub fn as_point_mut(&mut self) -> Option<&mut PointLight> {
        match self {
            Light::Point(light) => Some(light),
            _ => None,
        }
    }
}

impl Illuminant for Light {
    #[inline]
    fn shadow_probe(&self, point: Vec3, normal: Vec3) -> Option<(Vec3, f32)> {
        match self {
            Light::Ambient(light) => light.shadow_probe(point, normal),
            Light::Directional(light) => light.shadow_probe(point, normal),
            Light::Point(light) => light.shadow_probe(point, normal),
        }
    }

    #[inline]
    fn illuminate(&self, point: Vec3, normal: Vec3, occluded: bool) -> Option<Illumination> {
        match self {
            Light::Ambient(light) => light.illuminate(point, normal, occluded),
            Light::Directional(light) => light.illuminate(point, normal, occluded),
            Light::Point(light) => light.illuminate(point, normal, occluded),
        }
    }
}

impl From<AmbientLight> for Light {
    fn from(light: AmbientLight) -> Self {
        Light::Ambient(light)
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::palette;

    #[test]
    fn test_ambient_is_unconditional() {
        let light = AmbientLight::new(palette::WHITE, 0.1);

        for normal in [Vec3::X, Vec3::NEG_X, Vec3::Y] {
            for occluded in [false, true] {
                let lit = light.illuminate(Vec3::new(3.0, -2.0, 1.0), normal, occluded).unwrap();
                assert_eq!(lit.color, Color::splat(0.1));
                assert_eq!(lit.direction, None);
            }
        }
        assert!(light.shadow_probe(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_directional_head_on() {
        let light = DirectionalLight::new(Vec3::NEG_Y, palette::WHITE, 0.8);
        let lit = light.illuminate(Vec3::ZERO, Vec3::Y, false).unwrap();

        assert!((lit.color - Color::splat(0.8)).length() < 1e-6);
        assert_eq!(lit.direction, Some(Vec3::Y));
    }

    #[test]
    fn test_surface_facing_away_from_directional_light_gets_nothing() {
        let light = DirectionalLight::new(Vec3::new(1.0, -2.0, 0.5), palette::WHITE, 1.0);
        // Normal pointing the same way the light travels: surface faces away
        let normal = light.direction();
        assert!(light.illuminate(Vec3::ZERO, normal, false).is_none());
    }

    #[test]
    fn test_directional_is_not_shadowed() {
        let light = DirectionalLight::new(Vec3::NEG_Y, palette::WHITE, 1.0);
        assert!(light.shadow_probe(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_point_light_cosine() {
        let light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), palette::WHITE, 1.0);

        let overhead = light.illuminate(Vec3::ZERO, Vec3::Y, false).unwrap();
        assert!((overhead.color - Color::ONE).length() < 1e-6);

        // 45 degrees off the normal
        let tilted = Vec3::new(1.0, 1.0, 0.0).normalize();
        let lit = light.illuminate(Vec3::ZERO, tilted, false).unwrap();
        assert!((lit.color.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_point_light_behind_surface() {
        let light = PointLight::new(Vec3::new(0.0, -2.0, 0.0), palette::WHITE, 1.0);
        assert!(light.illuminate(Vec3::ZERO, Vec3::Y, false).is_none());
        assert!(light.shadow_probe(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_point_light_occluded() {
        let light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), palette::WHITE, 1.0);

        let (dir, distance) = light.shadow_probe(Vec3::ZERO, Vec3::Y).unwrap();
        assert_eq!(dir, Vec3::Y);
        assert!((distance - 2.0).abs() < 1e-6);

        assert!(light.illuminate(Vec3::ZERO, Vec3::Y, true).is_none());
    }

    #[test]
    fn test_light_enum_dispatch() {
        let mut light = Light::from(PointLight::new(Vec3::ZERO, palette::RED, 0.5));
        assert_eq!(light.color(), palette::RED);
        assert_eq!(light.intensity(), 0.5);

        light.as_point_mut().unwrap().translate(Vec3::new(0.0, 1.0, 0.0));
        let lit = light.illuminate(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, false).unwrap();
        assert!((lit.color - Color::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }
}
