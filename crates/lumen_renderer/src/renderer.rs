//! Frame renderer.
//!
//! Each frame traces a supersample grid `L` times the output size on each
//! axis. The grid is cut into row bands, one job per band on the worker pool,
//! and every job writes only its own slice of the supersample buffer. After
//! the pool joins, each output pixel is box-filtered from its `L * L`
//! supersamples and packed into the frame.

use std::time::{Duration, Instant};

use crate::tile::{band_height, generate_bands};
use crate::{
    AntialiasingLevel, Camera, Frame, RenderConfig, RenderResult, Scene, SpecularBlend, Tile,
    TraceStats, Tracer, WorkerPool,
};
use lumen_math::Color;

/// Counters for the last rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub primary_rays: u64,
    pub shadow_rays: u64,
    pub reflection_rays: u64,
    pub elapsed: Duration,
}

impl FrameStats {
    fn new(trace: TraceStats, elapsed: Duration) -> Self {
        Self {
            primary_rays: trace.primary_rays,
            shadow_rays: trace.shadow_rays,
            reflection_rays: trace.reflection_rays,
            elapsed,
        }
    }
}

/// Multithreaded Whitted renderer.
///
/// Owns the supersample buffer, the output frame and the worker pool, all of
/// which are reused from frame to frame.
pub struct Renderer {
    config: RenderConfig,
    width: u32,
    height: u32,
    samples: Vec<Color>,
    frame: Frame,
    pool: WorkerPool,
    stats: FrameStats,
}

impl Renderer {
    /// Renderer for `width` x `height` frames. Starts `config.threads` workers.
    pub fn new(width: u32, height: u32, config: RenderConfig) -> RenderResult<Self> {
        let pool = WorkerPool::new(config.threads)?;
        log::info!(
            "Renderer {}x{}, antialiasing x{}, reflection depth {}",
            width,
            height,
            config.antialiasing.factor(),
            config.max_depth
        );

        Ok(Self {
            config,
            width,
            height,
            samples: Vec::new(),
            frame: Frame::new(width, height),
            pool,
            stats: FrameStats::default(),
        })
    }

    /// Render one frame. The returned frame stays valid until the next call.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> &Frame {
        let start = Instant::now();
        let level = self.config.antialiasing.factor();
        let samples_width = self.width * level;
        let samples_height = self.height * level;

        self.samples.clear();
        self.samples
            .resize(samples_width as usize * samples_height as usize, Color::ZERO);

        if samples_width == 0 || samples_height == 0 {
            self.stats = FrameStats::default();
            return &self.frame;
        }

        let rows = band_height(samples_height, self.pool.threads());
        let tiles = generate_bands(samples_width, samples_height, rows);

        let config = &self.config;
        let jobs: Vec<_> = tiles
            .into_iter()
            .zip(self.samples.chunks_mut(rows as usize * samples_width as usize))
            .map(|(tile, chunk)| {
                let grid = (samples_width, samples_height);
                move || render_tile(scene, camera, config, tile, grid, chunk)
            })
            .collect();

        let mut trace = TraceStats::default();
        for tile_stats in self.pool.run(jobs) {
            trace += tile_stats;
        }

        let (frame, samples) = (&mut self.frame, &self.samples);
        self.pool.install(|| frame.resolve(samples, level));

        self.stats = FrameStats::new(trace, start.elapsed());
        log::debug!(
            "Frame {}x{} in {:.2?}: {} primary, {} shadow, {} reflection rays",
            self.width,
            self.height,
            self.stats.elapsed,
            self.stats.primary_rays,
            self.stats.shadow_rays,
            self.stats.reflection_rays
        );

        &self.frame
    }

    /// Resize the output. The next frame is rendered at the new size.
    pub fn set_output_frame_size(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        log::info!("Resizing output to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.frame.resize(width, height);
    }

    pub fn set_antialiasing_level(&mut self, level: AntialiasingLevel) {
        self.config.antialiasing = level;
    }

    pub fn set_reflection_depth(&mut self, depth: u32) {
        self.config.max_depth = depth;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.config.background = color;
    }

    pub fn set_specular_blend(&mut self, blend: SpecularBlend) {
        self.config.specular = blend;
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn output_frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn antialiasing_level(&self) -> AntialiasingLevel {
        self.config.antialiasing
    }

    pub fn reflection_depth(&self) -> u32 {
        self.config.max_depth
    }

    pub fn background_color(&self) -> Color {
        self.config.background
    }

    pub fn specular_blend(&self) -> SpecularBlend {
        self.config.specular
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Counters for the most recently rendered frame.
    pub fn last_stats(&self) -> FrameStats {
        self.stats
    }

    pub fn threads(&self) -> usize {
        self.pool.threads()
    }
}

/// Trace every supersample of `tile` into `out`, the tile's own rows of the
/// supersample buffer.
fn render_tile(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    tile: Tile,
    (grid_width, grid_height): (u32, u32),
    out: &mut [Color],
) -> TraceStats {
    let mut tracer = Tracer::new(scene, config);

    for row in 0..tile.height {
        for x in 0..tile.width {
            let ray = camera.generate_ray(tile.x + x, tile.y + row, grid_width, grid_height);
            out[(row * tile.width + x) as usize] = tracer.trace_primary(&ray);
        }
    }

    tracer.stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AmbientLight, Material, PointLight, Sphere};
    use lumen_math::{pack_rgba, palette, Vec3};
    use std::sync::Arc;

    fn small_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_drawable(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            0.4,
            Arc::new(Material::new(palette::RED)),
        ));
        scene.add_light(AmbientLight::new(palette::WHITE, 0.1));
        scene
    }

    fn busy_scene() -> Scene {
        let mut scene = small_sphere_scene();
        scene.add_drawable(Sphere::new(
            Vec3::new(1.0, 0.5, -4.0),
            0.8,
            Arc::new(
                Material::new(palette::YELLOW)
                    .with_specular(50.0)
                    .with_reflectivity(0.5),
            ),
        ));
        scene.add_light(PointLight::new(Vec3::new(2.0, 3.0, 0.0), palette::WHITE, 0.8));
        scene
    }

    #[test]
    fn test_small_sphere_frame() {
        let background = Color::new(0.2, 0.3, 0.4);
        let config = RenderConfig::default()
            .with_max_depth(0)
            .with_background(background)
            .with_threads(2);
        let mut renderer = Renderer::new(32, 32, config).unwrap();

        let frame = renderer.render(&small_sphere_scene(), &Camera::new());

        let center = frame.get(16, 16).unwrap();
        assert_ne!(center, 0);
        assert_eq!(center, pack_rgba(Color::new(0.1, 0.0, 0.0)));
        assert_eq!(frame.get(0, 0), Some(pack_rgba(background)));
        assert_eq!(frame.get(31, 31), Some(pack_rgba(background)));
    }

    #[test]
    fn test_render_is_repeatable() {
        let config = RenderConfig::default()
            .with_antialiasing(AntialiasingLevel::X2)
            .with_threads(3);
        let mut renderer = Renderer::new(24, 16, config).unwrap();
        let scene = busy_scene();
        let camera = Camera::new().with_aspect_ratio(1.5);

        let first = renderer.render(&scene, &camera).clone();
        let second = renderer.render(&scene, &camera).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_thread_count_does_not_change_image() {
        let scene = busy_scene();
        let camera = Camera::new();
        let config = RenderConfig::default().with_antialiasing(AntialiasingLevel::X2);

        let mut single = Renderer::new(20, 15, config.clone().with_threads(1)).unwrap();
        let mut many = Renderer::new(20, 15, config.with_threads(4)).unwrap();

        assert_eq!(single.render(&scene, &camera), many.render(&scene, &camera));
    }

    #[test]
    fn test_antialiasing_counts_supersamples() {
        let config = RenderConfig::default()
            .with_antialiasing(AntialiasingLevel::X4)
            .with_threads(2);
        let mut renderer = Renderer::new(10, 6, config).unwrap();
        renderer.render(&small_sphere_scene(), &Camera::new());

        assert_eq!(renderer.last_stats().primary_rays, 10 * 6 * 16);
        assert_eq!(renderer.last_stats().reflection_rays, 0);
    }

    #[test]
    fn test_uniform_background_survives_downsampling() {
        let background = Color::new(0.5, 0.25, 1.0);
        let config = RenderConfig::default()
            .with_antialiasing(AntialiasingLevel::X8)
            .with_background(background);
        let mut renderer = Renderer::new(4, 4, config).unwrap();

        let frame = renderer.render(&Scene::new(), &Camera::new());
        assert!(frame.pixels().iter().all(|&p| p == pack_rgba(background)));
    }

    #[test]
    fn test_resize_between_frames() {
        let mut renderer = Renderer::new(8, 8, RenderConfig::default()).unwrap();
        let scene = small_sphere_scene();
        renderer.render(&scene, &Camera::new());

        renderer.set_output_frame_size(12, 5);
        let frame = renderer.render(&scene, &Camera::new());
        assert_eq!((frame.width(), frame.height()), (12, 5));
        assert_eq!(frame.pixels().len(), 60);
        assert_eq!(renderer.output_frame_size(), (12, 5));
    }

    #[test]
    fn test_empty_frame() {
        let mut renderer = Renderer::new(0, 0, RenderConfig::default()).unwrap();
        let frame = renderer.render(&small_sphere_scene(), &Camera::new());

        assert!(frame.pixels().is_empty());
        assert_eq!(renderer.last_stats(), FrameStats::default());
    }

    #[test]
    fn test_setters() {
        let mut renderer = Renderer::new(4, 4, RenderConfig::default()).unwrap();
        renderer.set_antialiasing_level(AntialiasingLevel::X4);
        renderer.set_reflection_depth(7);
        renderer.set_background_color(palette::CYAN);
        renderer.set_specular_blend(SpecularBlend::LightTinted);

        assert_eq!(renderer.antialiasing_level(), AntialiasingLevel::X4);
        assert_eq!(renderer.reflection_depth(), 7);
        assert_eq!(renderer.background_color(), palette::CYAN);
        assert_eq!(renderer.specular_blend(), SpecularBlend::LightTinted);
    }

    #[test]
    fn test_background_change_shows_next_frame() {
        let mut renderer = Renderer::new(4, 4, RenderConfig::default()).unwrap();
        let scene = Scene::new();
        renderer.render(&scene, &Camera::new());
        assert_eq!(renderer.frame().get(0, 0), Some(pack_rgba(palette::BLACK)));

        renderer.set_background_color(palette::MAGENTA);
        renderer.render(&scene, &Camera::new());
        assert_eq!(renderer.frame().get(0, 0), Some(pack_rgba(palette::MAGENTA)));
    }
}
