//! Lumen Renderer - CPU Whitted Ray Tracing
//!
//! A recursive ray tracer for spheres and triangles with hard shadows,
//! Phong highlights and mirror reflection. Frames are supersampled, split
//! into row bands that render in parallel on a fixed worker pool, and
//! box-filtered down into a packed RGBA frame buffer.

mod camera;
mod config;
mod error;
mod frame;
mod hittable;
mod light;
mod material;
mod mesh;
mod pool;
mod renderer;
mod scene;
mod sphere;
mod tile;
mod tracer;
mod triangle;

pub use camera::Camera;
pub use config::{AntialiasingLevel, RenderConfig, SpecularBlend};
pub use error::{RenderError, RenderResult};
pub use frame::{box_filter, Frame};
pub use hittable::{Drawable, HitRecord, Hittable};
pub use light::{AmbientLight, DirectionalLight, Illuminant, Illumination, Light, PointLight};
pub use material::Material;
pub use mesh::Mesh;
pub use pool::WorkerPool;
pub use renderer::{FrameStats, Renderer};
pub use scene::{DrawableId, LightId, Scene};
pub use sphere::Sphere;
pub use tile::{band_height, generate_bands, Tile};
pub use tracer::{TraceStats, Tracer};
pub use triangle::{Triangle, Vertex};

/// Re-export common math types from lumen_math
pub use lumen_math::{palette, Color, Interval, Ray, Vec3};
