//! In-memory pixel surface.
//!
//! `PixelBuffer` is the headless [`Surface`]: it keeps the last presented
//! frame next to the working buffer so tests (and hosts that diff frames) can
//! see exactly what reached the display.

use std::convert::Infallible;

use crate::hal::Surface;
use crate::types::Rgb;

/// 2D buffer of RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u8,
    height: u8,
    pixels: Vec<Rgb>,
    presented: Vec<Rgb>,
    present_count: u32,
}

impl PixelBuffer {
    pub fn new(width: u8, height: u8) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; len],
            presented: vec![Rgb::BLACK; len],
            present_count: 0,
        }
    }

    #[inline(always)]
    fn idx(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Working buffer, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Frame as of the last `present`, row-major.
    pub fn presented_pixels(&self) -> &[Rgb] {
        &self.presented
    }

    /// Pixel as of the last `present`.
    pub fn presented_pixel(&self, x: i8, y: i8) -> Rgb {
        self.idx(x, y)
            .map(|i| self.presented[i])
            .unwrap_or(Rgb::BLACK)
    }

    /// Number of lit pixels in the last presented frame.
    pub fn presented_lit(&self) -> usize {
        self.presented.iter().filter(|p| !p.is_black()).count()
    }

    pub fn present_count(&self) -> u32 {
        self.present_count
    }

    /// Mark the current working buffer as presented.
    ///
    /// Hosts that wrap a `PixelBuffer` call this after they flushed the frame.
    pub fn commit_frame(&mut self) {
        self.presented.copy_from_slice(&self.pixels);
        self.present_count = self.present_count.wrapping_add(1);
    }
}

impl Surface for PixelBuffer {
    type Error = Infallible;

    fn width(&self) -> u8 {
        self.width
    }

    fn height(&self) -> u8 {
        self.height
    }

    fn set_pixel(&mut self, x: i8, y: i8, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    fn get_pixel(&self, x: i8, y: i8) -> Rgb {
        self.idx(x, y).map(|i| self.pixels[i]).unwrap_or(Rgb::BLACK)
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.commit_frame();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipped_writes_are_ignored() {
        let mut fb = PixelBuffer::new(4, 2);
        fb.set_pixel(-1, 0, Rgb::gray(1.0));
        fb.set_pixel(4, 0, Rgb::gray(1.0));
        fb.set_pixel(0, 2, Rgb::gray(1.0));
        assert!(fb.pixels().iter().all(Rgb::is_black));
        assert_eq!(fb.get_pixel(-3, -3), Rgb::BLACK);
    }

    #[test]
    fn present_snapshots_working_buffer() {
        let mut fb = PixelBuffer::new(4, 2);
        fb.draw_row(1, Rgb::gray(0.5));
        assert_eq!(fb.presented_lit(), 0);

        fb.present().unwrap();
        assert_eq!(fb.presented_lit(), 4);
        assert_eq!(fb.present_count(), 1);

        fb.clear();
        assert_eq!(fb.get_pixel(0, 1), Rgb::BLACK);
        assert_eq!(fb.presented_pixel(0, 1), Rgb::gray(0.5));
    }
}
