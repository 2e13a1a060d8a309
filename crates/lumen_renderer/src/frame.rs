//! Output frame buffer and supersample resolve.

use std::path::Path;

use rayon::prelude::*;

use crate::RenderResult;
use lumen_math::{pack_rgba, unpack_rgba, Color};

/// Row-major frame of packed `0xRRGGBBAA` pixels, top row first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// Create a frame cleared to zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed pixel at (x, y), or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Pixel at (x, y) decoded back to a color.
    pub fn color(&self, x: u32, y: u32) -> Option<Color> {
        self.get(x, y).map(unpack_rgba)
    }

    /// Set the pixel at (x, y). Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.pixels[index] = pack_rgba(color);
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Resize, discarding the contents.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, 0);
    }

    /// Box-filter a supersample grid `level` times larger on each axis into
    /// this frame, one rayon task per output row.
    pub(crate) fn resolve(&mut self, samples: &[Color], level: u32) {
        let width = self.width;
        if width == 0 {
            return;
        }
        let samples_width = width * level;

        self.pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let color = box_filter(samples, samples_width, x as u32, y as u32, level);
                    *pixel = pack_rgba(color);
                }
            });
    }

    /// Unpack into `[r, g, b, a]` bytes per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
    }

    /// Write the frame as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        log::info!("Saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Mean of the `level` x `level` block of supersamples behind output pixel (x, y).
pub fn box_filter(samples: &[Color], samples_width: u32, x: u32, y: u32, level: u32) -> Color {
    let level = level.max(1);
    let mut sum = Color::ZERO;

    for sy in y * level..(y + 1) * level {
        let row = sy as usize * samples_width as usize;
        for sx in x * level..(x + 1) * level {
            sum += samples[row + sx as usize];
        }
    }

    sum / (level * level) as f32
}
