//! Owned pixel surface for software rasterization.
//!
//! A [`Surface`] is a fixed-size, row-major buffer of packed ARGB8888 pixels.
//! Row index increases downward. The buffer is created once and mutated in
//! place by the drawing functions in [`crate::raster`]; it is never resized.

use std::path::Path;

use crate::colors::{self, Color};

pub struct Surface {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Surface {
    /// Create a surface of `width * height` pixels cleared to the background
    /// color.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            pixels: vec![colors::BACKGROUND.pack(); size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Set a pixel, silently ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.pixels[index] = color.pack();
        }
    }

    /// Set a pixel without the silent-drop bounds guard.
    ///
    /// The caller must guarantee `0 <= x < width` and `0 <= y < height`; the
    /// rasterizer inner loops uphold this by clipping their scan region to
    /// the surface extent first. An out-of-range coordinate is a caller bug
    /// and panics.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: i32, y: i32, color: Color) {
        debug_assert!(self.in_bounds(x, y));
        let index = (y as u32 * self.width + x as u32) as usize;
        self.pixels[index] = color.pack();
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let index = (y as u32 * self.width + x as u32) as usize;
            Some(Color::unpack(self.pixels[index]))
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.pack());
    }

    /// Raw byte view of the buffer: row-major, top-to-bottom, 4 bytes per
    /// pixel in B,G,R,A order. This is the presentation contract.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Export the frame as a PNG image.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::unpack(self.pixels[(y * self.width + x) as usize]);
            image::Rgb([c.r, c.g, c.b])
        });
        img.save(path)
    }
}
