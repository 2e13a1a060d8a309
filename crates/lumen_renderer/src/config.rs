//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{RenderError, RenderResult};
use lumen_math::Color;

/// Supersamples per axis. A level of L casts L * L rays per output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AntialiasingLevel {
    #[default]
    None = 1,
    X2 = 2,
    X4 = 4,
    X8 = 8,
}

impl AntialiasingLevel {
    /// Supersamples per axis.
    #[inline]
    pub fn factor(self) -> u32 {
        self as u32
    }

    /// Rays traced per output pixel.
    pub fn samples_per_pixel(self) -> u32 {
        self.factor() * self.factor()
    }
}

impl TryFrom<u32> for AntialiasingLevel {
    type Error = RenderError;

    fn try_from(factor: u32) -> Result<Self, Self::Error> {
        match factor {
            1 => Ok(Self::None),
            2 => Ok(Self::X2),
            4 => Ok(Self::X4),
            8 => Ok(Self::X8),
            other => Err(RenderError::InvalidAntialiasing(other)),
        }
    }
}

impl From<AntialiasingLevel> for u32 {
    fn from(level: AntialiasingLevel) -> Self {
        level.factor()
    }
}

/// How the Phong highlight is combined with the diffuse color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecularBlend {
    /// White highlight added on top, tinted by neither light nor material
    #[default]
    Additive,
    /// Highlight takes the color of the light
    LightTinted,
    /// Highlight is multiplied by the material color as well
    MaterialTinted,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Supersampling level
    pub antialiasing: AntialiasingLevel,
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Color of rays that hit nothing
    pub background: Color,
    /// Highlight blend policy
    pub specular: SpecularBlend,
    /// Worker threads; 0 uses every hardware thread
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            antialiasing: AntialiasingLevel::None,
            max_depth: 2,
            background: Color::ZERO,
            specular: SpecularBlend::Additive,
            threads: 0,
        }
    }
}

impl RenderConfig {
    pub fn with_antialiasing(mut self, antialiasing: AntialiasingLevel) -> Self {
        self.antialiasing = antialiasing;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_specular(mut self, specular: SpecularBlend) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config from disk.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
