use crate::dots::dot_bit;

/// Sentinel color pair: foreground 0, background 255. This is what every
/// cell holds until a caller sets an explicit color.
pub const DEFAULT_COLOR: u16 = 0x00ff;

/// A pixel canvas backed by one terminal character grid.
///
/// Owns three index-aligned buffers, one entry per cell: the glyph byte
/// (which Braille dots are lit), the packed color pair `fg << 8 | bg`, and
/// an optional single-character text override used for diagnostic overlays.
///
/// Virtual pixel space is `2·cols` wide by `5·rows` tall. Only 4 of the 5
/// virtual rows per cell correspond to Braille dots; setting a pixel on the
/// fifth row lands in the right cell but lights nothing.
pub struct Canvas {
    cols: u16,
    rows: u16,
    w: u32,
    h: u32,
    gfx: Vec<u8>,
    clr: Vec<u16>,
    txt: Vec<Option<char>>,
}

impl Canvas {
    /// Create a canvas for a `cols` × `rows` cell grid, all cells blank.
    pub fn new(cols: u16, rows: u16) -> anyhow::Result<Self> {
        if cols == 0 || rows == 0 {
            anyhow::bail!("canvas dimensions must be non-zero: {cols}x{rows}");
        }
        let size = cols as usize * rows as usize;
        Ok(Self {
            cols,
            rows,
            w: 2 * cols as u32,
            h: 5 * rows as u32,
            gfx: vec![0; size],
            clr: vec![DEFAULT_COLOR; size],
            txt: vec![None; size],
        })
    }

    /// Reset all three buffers to their blank defaults, keeping dimensions.
    pub fn clear(&mut self) {
        self.gfx.fill(0);
        self.clr.fill(DEFAULT_COLOR);
        self.txt.fill(None);
    }

    /// Light the dot at virtual pixel `(x, y)`.
    ///
    /// Fractional coordinates are truncated toward zero. Coordinates outside
    /// the open interval `(0, w)` × `(0, h)` are silently dropped — note the
    /// edge coordinates 0 and max are rejected too, so one pixel row and
    /// column on each border is never drawn.
    pub fn set_pixel(&mut self, x: f64, y: f64) {
        if !(x > 0.0 && x < self.w as f64 && y > 0.0 && y < self.h as f64) {
            return;
        }

        let xi = x as u32;
        let yi = y as u32;
        let (px, cx) = (xi / 2, xi % 2);
        let (py, cy) = (yi / 5, yi % 5);

        let p = py as usize * self.cols as usize + px as usize;
        self.gfx[p] |= dot_bit(cx, cy);
    }

    /// Light a dot and color its cell in one call. Bounds-checked like
    /// [`set_pixel`](Self::set_pixel): out-of-range coordinates change
    /// neither buffer.
    pub fn set_pixel_colored(&mut self, x: f64, y: f64, fg: u8, bg: Option<u8>) {
        if !(x > 0.0 && x < self.w as f64 && y > 0.0 && y < self.h as f64) {
            return;
        }
        self.set_pixel(x, y);
        self.set_color(x, y, fg, bg);
    }

    /// Set the color pair of the cell containing virtual pixel `(x, y)`.
    ///
    /// An omitted `bg` means background index 0, not "leave unchanged".
    /// Unlike `set_pixel` there is no bounds check; out-of-range coordinates
    /// panic on the buffer index. Callers are expected to stay in range.
    pub fn set_color(&mut self, x: f64, y: f64, fg: u8, bg: Option<u8>) {
        let bg = bg.unwrap_or(0);
        let px = x as i64 / 2;
        let py = y as i64 / 5;
        let p = (py * self.cols as i64 + px) as usize;
        self.clr[p] = (fg as u16) << 8 | bg as u16;
    }

    /// Overlay `text` one character per cell starting at `cell`, clipped at
    /// the end of the grid. Overlaid cells render the character instead of
    /// their glyph until the next [`clear`](Self::clear).
    pub fn write_text(&mut self, cell: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            match self.txt.get_mut(cell + i) {
                Some(slot) => *slot = Some(ch),
                None => break,
            }
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Virtual pixel width (`2·cols`).
    pub fn width(&self) -> u32 {
        self.w
    }

    /// Virtual pixel height (`5·rows`).
    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn cell_count(&self) -> usize {
        self.gfx.len()
    }

    /// Glyph byte per cell, row-major.
    pub fn glyphs(&self) -> &[u8] {
        &self.gfx
    }

    /// Packed color pair per cell, row-major.
    pub fn colors(&self) -> &[u16] {
        &self.clr
    }

    /// Text override per cell, row-major.
    pub fn overlay(&self) -> &[Option<char>] {
        &self.txt
    }
}
