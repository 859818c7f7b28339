//! Braille dot encoding.
//!
//! Each terminal cell is a 2×4 grid of dots. The Unicode Braille block
//! (U+2800..U+28FF) maps every 8-bit dot mask directly onto a code point
//! offset, so a cell's glyph is just `U+2800 + mask`.
//!
//! Bit layout follows the Braille dot numbering (dots 1-2-3-7 in the left
//! column, 4-5-6-8 in the right):
//!
//! ```text
//!   col 0   col 1
//!    1        8
//!    2       16
//!    4       32
//!   64      128
//! ```

/// Bit value for each in-cell dot position, indexed `[col][row]`.
const DOT_BITS: [[u8; 4]; 2] = [[1, 2, 4, 64], [8, 16, 32, 128]];

/// Bit to OR into a cell's glyph byte for the dot at `(col, row)`.
///
/// Positions outside the 2×4 grid yield 0 (a no-op set). The coordinate
/// mapping hands row 4 to every fifth virtual pixel row, so that row is
/// silently unaddressable.
pub const fn dot_bit(col: u32, row: u32) -> u8 {
    if col < 2 && row < 4 {
        DOT_BITS[col as usize][row as usize]
    } else {
        0
    }
}

/// The Braille character for an 8-bit dot mask. Mask 0 is the blank
/// Braille pattern U+2800, not an ASCII space.
pub const fn braille_char(bits: u8) -> char {
    match char::from_u32(0x2800 + bits as u32) {
        Some(c) => c,
        // Unreachable: 0x2800..=0x28FF are all valid scalar values.
        None => ' ',
    }
}
