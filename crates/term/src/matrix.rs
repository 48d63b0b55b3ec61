//! `TerminalMatrix`: the LED matrix surface, emulated in a terminal.
//!
//! Drawing goes to an in-memory [`PixelBuffer`]; `present` diffs it against
//! the frame that was last presented and writes only the changed pixels.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{PixelBuffer, Surface};
use crate::renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
use crate::types::Rgb;

pub struct TerminalMatrix<W: Write = io::Stdout> {
    back: PixelBuffer,
    gain: f32,
    full_redraw: bool,
    renderer: TerminalRenderer<W>,
}

impl TerminalMatrix<io::Stdout> {
    pub fn new(width: u8, height: u8, gain: f32) -> Self {
        Self::with_writer(width, height, gain, io::stdout())
    }
}

impl<W: Write> TerminalMatrix<W> {
    pub fn with_writer(width: u8, height: u8, gain: f32, out: W) -> Self {
        Self {
            back: PixelBuffer::new(width, height),
            gain,
            full_redraw: true,
            renderer: TerminalRenderer::with_writer(out),
        }
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.back
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    /// Force the next present to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.full_redraw = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl<W: Write> Surface for TerminalMatrix<W> {
    type Error = anyhow::Error;

    fn width(&self) -> u8 {
        self.back.width()
    }

    fn height(&self) -> u8 {
        self.back.height()
    }

    fn set_pixel(&mut self, x: i8, y: i8, color: Rgb) {
        self.back.set_pixel(x, y, color);
    }

    fn get_pixel(&self, x: i8, y: i8) -> Rgb {
        self.back.get_pixel(x, y)
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn present(&mut self) -> Result<()> {
        let (width, height) = (self.back.width(), self.back.height());
        let out = self.renderer.begin_frame();
        if self.full_redraw {
            encode_full_into(self.back.pixels(), width, height, self.gain, out)?;
        } else {
            encode_diff_into(
                self.back.presented_pixels(),
                self.back.pixels(),
                width,
                self.gain,
                out,
            )?;
        }
        self.renderer.flush_frame()?;

        self.back.commit_frame();
        self.full_redraw = false;
        Ok(())
    }
}
