//! Owned RGBA raster
//!
//! Straight (non-premultiplied) RGBA8, row-major, one `[u8; 4]` per pixel.
//! Pixel `(x, y)` covers the square `[x, x + 1) x [y, y + 1)`; shape tests use
//! the pixel center.

use glam::Vec2;

/// One RGBA8 pixel
pub type Rgba = [u8; 4];

/// Fully transparent pixel (what a destination-out erase leaves behind)
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Create a fully transparent raster
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel at `(x, y)`, `None` when out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Alpha at `(x, y)` (0 when out of bounds)
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.get(x, y).map(|p| p[3]).unwrap_or(0)
    }

    /// Write a pixel, ignoring out-of-bounds coordinates
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.pixels[idx] = color;
    }

    /// Overwrite every pixel with `shade(x, y)`
    pub fn fill_with<F>(&mut self, mut shade: F)
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let width = self.width.max(1) as usize;
        for (i, px) in self.pixels.iter_mut().enumerate() {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            *px = shade(x, y);
        }
    }

    /// Fill an axis-aligned rectangle (clipped to the raster)
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgba) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    /// Destination-out a filled disc: every pixel whose center lies within
    /// `radius` of `center` becomes fully transparent.
    ///
    /// Only ever lowers alpha. Returns how many pixels went from visible to
    /// cleared.
    pub fn erase_disc(&mut self, center: Vec2, radius: f32) -> usize {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return 0;
        }

        let min = (center - Vec2::splat(radius)).floor().max(Vec2::ZERO);
        let max = (center + Vec2::splat(radius))
            .ceil()
            .min(Vec2::new(self.width as f32, self.height as f32));
        if min.x >= max.x || min.y >= max.y {
            return 0;
        }

        let r2 = radius * radius;
        let mut cleared = 0;
        for y in min.y as u32..max.y as u32 {
            let dy = y as f32 + 0.5 - center.y;
            for x in min.x as u32..max.x as u32 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let idx = self.index(x, y);
                if self.pixels[idx][3] != 0 {
                    cleared += 1;
                }
                self.pixels[idx] = TRANSPARENT;
            }
        }
        cleared
    }

    /// Count pixels on a `stride`-spaced grid whose alpha is below `threshold`
    ///
    /// Returns `(below, sampled)`. The grid always starts at `(0, 0)`, so the
    /// sample set is fixed for a given raster size and stride.
    pub fn count_alpha_below(&self, threshold: u8, stride: u32) -> (usize, usize) {
        let stride = stride.max(1) as usize;
        let width = self.width as usize;
        let mut below = 0;
        let mut sampled = 0;

        if stride == 1 {
            sampled = self.pixels.len();
            below = self.pixels.iter().filter(|p| p[3] < threshold).count();
            return (below, sampled);
        }

        for y in (0..self.height as usize).step_by(stride) {
            let row = &self.pixels[y * width..(y + 1) * width];
            for px in row.iter().step_by(stride) {
                sampled += 1;
                if px[3] < threshold {
                    below += 1;
                }
            }
        }
        (below, sampled)
    }

    /// Raw RGBA bytes, ready for an `ImageData` upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
