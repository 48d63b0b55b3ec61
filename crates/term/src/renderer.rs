//! TerminalRenderer: flushes pixel frames to a real terminal.
//!
//! Every matrix pixel is drawn as two terminal columns so the LED grid keeps a
//! roughly square aspect ratio. The grid sits inside a one-cell border; only
//! full redraws touch the border, later frames re-encode changed pixel runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::types::Rgb;

/// Glyph printed for one pixel.
pub const PIXEL_GLYPH: &str = "██";

/// Terminal columns per pixel.
pub const PIXEL_COLS: u16 = 2;

const BORDER_COLOR: Color = Color::Rgb {
    r: 90,
    g: 90,
    b: 90,
};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_frame()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_frame()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Start encoding a new frame; returns the (empty) command buffer.
    pub fn begin_frame(&mut self) -> &mut Vec<u8> {
        self.buf.clear();
        &mut self.buf
    }

    /// Write the encoded frame to the terminal.
    pub fn flush_frame(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Convert a (brightness-scaled) pixel color to 8-bit terminal channels.
pub fn to_rgb8(color: Rgb, gain: f32) -> (u8, u8, u8) {
    let channel = |c: f32| ((c * gain).clamp(0.0, 1.0) * 255.0).round() as u8;
    (channel(color.r), channel(color.g), channel(color.b))
}

fn pixel_color(color: Rgb, gain: f32) -> Color {
    let (r, g, b) = to_rgb8(color, gain);
    Color::Rgb { r, g, b }
}

/// Terminal cell of pixel `(x, y)` (inside the border).
pub fn pixel_origin(x: u8, y: u8) -> (u16, u16) {
    (1 + x as u16 * PIXEL_COLS, 1 + y as u16)
}

/// Encode a full-frame redraw, border included, into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(
    pixels: &[Rgb],
    width: u8,
    height: u8,
    gain: f32,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border_into(out, width, height)?;

    let mut current: Option<Color> = None;
    for y in 0..height {
        let (col, row) = pixel_origin(0, y);
        out.queue(cursor::MoveTo(col, row))?;
        for x in 0..width {
            let idx = y as usize * width as usize + x as usize;
            let color = pixels.get(idx).copied().unwrap_or(Rgb::BLACK);
            print_pixel_into(out, color, gain, &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &[Rgb],
    next: &[Rgb],
    width: u8,
    gain: f32,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<Color> = None;

    for_each_changed_run(prev, next, width, |x, y, len| {
        let (col, row) = pixel_origin(x, y);
        out.queue(cursor::MoveTo(col, row))?;
        for dx in 0..len {
            let idx = y as usize * width as usize + (x + dx) as usize;
            let color = next.get(idx).copied().unwrap_or(Rgb::BLACK);
            print_pixel_into(out, color, gain, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn print_pixel_into(
    out: &mut Vec<u8>,
    color: Rgb,
    gain: f32,
    current: &mut Option<Color>,
) -> Result<()> {
    let fg = pixel_color(color, gain);
    if *current != Some(fg) {
        out.queue(SetForegroundColor(fg))?;
        *current = Some(fg);
    }
    out.queue(Print(PIXEL_GLYPH))?;
    Ok(())
}

fn draw_border_into(out: &mut Vec<u8>, width: u8, height: u8) -> Result<()> {
    let inner = width as u16 * PIXEL_COLS;
    let bottom = height as u16 + 1;
    let horizontal = "─".repeat(inner as usize);

    out.queue(SetForegroundColor(BORDER_COLOR))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{horizontal}┐")))?;
    for y in 1..bottom {
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(Print('│'))?;
        out.queue(cursor::MoveTo(inner + 1, y))?;
        out.queue(Print('│'))?;
    }
    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{horizontal}┘")))?;
    Ok(())
}

fn for_each_changed_run(
    prev: &[Rgb],
    next: &[Rgb],
    width: u8,
    mut f: impl FnMut(u8, u8, u8) -> Result<()>,
) -> Result<()> {
    if width == 0 {
        return Ok(());
    }
    let w = width as usize;
    let h = next.len() / w;

    if prev.len() != next.len() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..h {
            f(0, y as u8, width)?;
        }
        return Ok(());
    }

    for y in 0..h {
        let row_prev = &prev[y * w..(y + 1) * w];
        let row_next = &next[y * w..(y + 1) * w];
        let mut x = 0;
        while x < w {
            if row_prev[x] == row_next[x] {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && row_prev[x] != row_next[x] {
                x += 1;
            }
            f(start as u8, y as u8, (x - start) as u8)?;
        }
    }

    Ok(())
}
