use std::time::Instant;

use crate::canvas::Canvas;
use crate::dots::braille_char;

/// How cell colors are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// One white-on-black escape per frame; the color buffer is ignored.
    Fixed,
    /// 256-color escapes from the per-cell color buffer, coalesced across
    /// runs of identical pairs.
    PerCell,
}

/// Serializes a [`Canvas`] into an ANSI byte stream.
///
/// Always repaints the full frame — there is no diffing against a previous
/// frame. The caller owns the output buffer and performs the single
/// write + flush per frame.
pub struct Renderer {
    color_mode: ColorMode,
    last_frame: Option<Instant>,
}

impl Renderer {
    pub fn new(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            last_frame: None,
        }
    }

    /// Render the canvas into `buf`: cursor home + attribute reset, color
    /// escapes per [`ColorMode`], then exactly one code point per cell
    /// (the overlay character if set, else `U+2800 + glyph`).
    pub fn render(&self, canvas: &Canvas, buf: &mut Vec<u8>) {
        buf.clear();
        buf.extend_from_slice(b"\x1b[H\x1b[0m");

        match self.color_mode {
            ColorMode::Fixed => {
                buf.extend_from_slice(b"\x1b[38;5;15m\x1b[48;5;0m");
                for p in 0..canvas.cell_count() {
                    push_cell(buf, canvas.glyphs()[p], canvas.overlay()[p]);
                }
            }
            ColorMode::PerCell => {
                let mut prev = (0u8, 0u8);
                let mut first = true;
                for p in 0..canvas.cell_count() {
                    let packed = canvas.colors()[p];
                    let pair = ((packed >> 8) as u8, (packed & 0xff) as u8);
                    if first || pair != prev {
                        write_fg(buf, pair.0);
                        write_bg(buf, pair.1);
                        prev = pair;
                        first = false;
                    }
                    push_cell(buf, canvas.glyphs()[p], canvas.overlay()[p]);
                }
            }
        }
    }

    /// Render with a frame-rate overlay. `now` is the caller's clock
    /// reading for this frame; once a previous reading exists, the rate is
    /// formatted into the first cells of the canvas text overlay.
    ///
    /// The overlay is ordinary text-override state: it stays in the canvas
    /// until the next `clear()`, so a second render without an intervening
    /// clear repaints it over whatever drawing is underneath.
    pub fn render_timed(&mut self, canvas: &mut Canvas, now: Instant, buf: &mut Vec<u8>) {
        if let Some(prev) = self.last_frame {
            let dt = now.duration_since(prev).as_secs_f64();
            let rate = if dt > 0.0 { 1.0 / dt } else { 0.0 };
            canvas.write_text(0, &format!("{rate:5.1} fps"));
        }
        self.last_frame = Some(now);
        self.render(canvas, buf);
    }
}

fn push_cell(buf: &mut Vec<u8>, glyph: u8, overlay: Option<char>) {
    let ch = match overlay {
        Some(c) => c,
        None => braille_char(glyph),
    };
    let mut utf8 = [0u8; 4];
    buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
}

fn write_fg(buf: &mut Vec<u8>, idx: u8) {
    buf.extend_from_slice(b"\x1b[38;5;");
    write_u8(buf, idx);
    buf.push(b'm');
}

fn write_bg(buf: &mut Vec<u8>, idx: u8) {
    buf.extend_from_slice(b"\x1b[48;5;");
    write_u8(buf, idx);
    buf.push(b'm');
}

/// Fast integer-to-ASCII for u8 values (0-255), no allocation.
fn write_u8(buf: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        buf.push(b'0' + v / 100);
        buf.push(b'0' + (v / 10) % 10);
        buf.push(b'0' + v % 10);
    } else if v >= 10 {
        buf.push(b'0' + v / 10);
        buf.push(b'0' + v % 10);
    } else {
        buf.push(b'0' + v);
    }
}
