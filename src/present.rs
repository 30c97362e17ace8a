//! Presentation seam between the rasterization core and the platform.
//!
//! The core's output contract is fixed: row-major bytes, top-to-bottom,
//! left-to-right, 4 bytes per pixel in B,G,R,A order. Anything that can copy
//! such a buffer to a visible target (a window, a stream, a test capture)
//! implements [`PresentationSink`]; the core itself has no dependency on any
//! windowing toolkit.

use crate::surface::Surface;

/// A target that can display one finished frame.
pub trait PresentationSink {
    /// Copy the pixel bytes onto the visible target. `pixels` holds
    /// `width * height * 4` bytes in the layout described in the module doc;
    /// whether the target stretches or maps 1:1 is its own business.
    fn present(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<(), String>;
}

/// Present a finished surface on a sink.
pub fn present_frame<S: PresentationSink>(sink: &mut S, surface: &Surface) -> Result<(), String> {
    sink.present(surface.as_bytes(), surface.width(), surface.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;

    struct CaptureSink {
        frames: Vec<(Vec<u8>, u32, u32)>,
    }

    impl PresentationSink for CaptureSink {
        fn present(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<(), String> {
            self.frames.push((pixels.to_vec(), width, height));
            Ok(())
        }
    }

    #[test]
    fn frame_arrives_with_dimensions_and_full_buffer() {
        let mut sink = CaptureSink { frames: Vec::new() };
        let mut surface = Surface::new(4, 3);
        surface.set_pixel(0, 0, Color::rgb(1, 2, 3));

        present_frame(&mut sink, &surface).unwrap();

        let (pixels, width, height) = &sink.frames[0];
        assert_eq!((*width, *height), (4, 3));
        assert_eq!(pixels.len(), 4 * 3 * 4);
        assert_eq!(&pixels[..4], &[3, 2, 1, 0xFF]);
    }
}
