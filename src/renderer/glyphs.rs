//! 5x7 bitmap font for the cover label
//!
//! Uppercase ASCII, space and `!`. Each glyph is seven rows of five bits,
//! most significant bit on the left.

use crate::engine::raster::{Raster, Rgba};

/// Glyph width in cells
pub const GLYPH_WIDTH: i64 = 5;
/// Glyph height in cells
pub const GLYPH_HEIGHT: i64 = 7;
/// Horizontal advance in cells (glyph + 1 cell gap)
pub const GLYPH_ADVANCE: i64 = GLYPH_WIDTH + 1;

macro_rules! g {
    ($($row:expr),* $(,)?) => { Some([$($row),*]) };
}

/// Row bitmaps for `ch`, `None` if the font has no such glyph
pub fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    match ch.to_ascii_uppercase() {
        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        ' ' => g!(0, 0, 0, 0, 0, 0, 0),
        '!' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100),

        _ => None,
    }
}

/// Width in raster pixels of `text` drawn with `cell`-pixel cells
pub fn text_width(text: &str, cell: i64) -> i64 {
    let n = text.chars().count() as i64;
    if n == 0 {
        return 0;
    }
    (n * GLYPH_ADVANCE - 1) * cell
}

/// Draw one glyph with its top-left at `(x, y)`; each font bit becomes a
/// `cell` x `cell` block
fn draw_glyph(raster: &mut Raster, x: i64, y: i64, ch: char, cell: i64, color: Rgba) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (ry, bits) in rows.iter().enumerate() {
        for rx in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - rx)) != 0 {
                raster.fill_rect(x + rx * cell, y + ry as i64 * cell, cell, cell, color);
            }
        }
    }
}

/// Draw `text` centered on `(cx, cy)`
pub fn draw_text_centered(
    raster: &mut Raster,
    cx: i64,
    cy: i64,
    text: &str,
    cell: i64,
    color: Rgba,
) {
    let cell = cell.max(1);
    let mut x = cx - text_width(text, cell) / 2;
    let y = cy - GLYPH_HEIGHT * cell / 2;
    for ch in text.chars() {
        draw_glyph(raster, x, y, ch, cell, color);
        x += GLYPH_ADVANCE * cell;
    }
}
