//! Scratch-off cover painting
//!
//! Paints the opaque layer the player scratches away: a diagonal two-stop
//! gradient with two lines of centered label text. Everything painted here is
//! fully opaque, so a fresh cover measures as 0% scratched.

use glam::Vec2;

use super::glyphs::{GLYPH_HEIGHT, draw_text_centered};
use crate::engine::raster::{Raster, Rgba};
use crate::settings::{Rgb, Settings};

/// Headline label
pub const TITLE_TEXT: &str = "SCRATCH HERE!";
/// Hint label under the headline
pub const HINT_TEXT: &str = "DRAG TO REVEAL YOUR PRIZE";

/// Label font sizes in logical pixels
const TITLE_FONT_PX: f32 = 24.0;
const HINT_FONT_PX: f32 = 16.0;
/// Vertical offset of each label from the card center (logical pixels)
const LABEL_OFFSET_PX: f32 = 20.0;

#[inline]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn opaque(rgb: Rgb) -> Rgba {
    [rgb[0], rgb[1], rgb[2], 255]
}

/// Gradient parameter of a pixel along the top-left to bottom-right diagonal
#[inline]
fn diagonal_t(p: Vec2, size: Vec2) -> f32 {
    let len2 = size.length_squared();
    if len2 <= 0.0 {
        return 0.0;
    }
    (p.dot(size) / len2).clamp(0.0, 1.0)
}

/// Cell size (backing pixels) for a 5x7 glyph rendered at `font_px`
#[inline]
fn cell_for(font_px: f32, scale: f32) -> i64 {
    // 7 glyph rows + 1 row of leading
    ((font_px * scale) / (GLYPH_HEIGHT + 1) as f32).round().max(1.0) as i64
}

/// Paint the cover over the whole raster
///
/// `scale` is backing pixels per logical pixel (the device pixel ratio), used
/// so label text keeps the same visual size on high-DPI displays.
pub fn paint_cover(raster: &mut Raster, scale: f32, settings: &Settings) {
    let size = Vec2::new(raster.width() as f32, raster.height() as f32);
    let (start, end) = (settings.cover_start, settings.cover_end);

    raster.fill_with(|x, y| {
        let t = diagonal_t(Vec2::new(x as f32 + 0.5, y as f32 + 0.5), size);
        [
            lerp_u8(start[0], end[0], t),
            lerp_u8(start[1], end[1], t),
            lerp_u8(start[2], end[2], t),
            255,
        ]
    });

    if !settings.show_labels {
        return;
    }

    let color = opaque(settings.label_color);
    let center = size / 2.0;
    let offset = LABEL_OFFSET_PX * scale;
    draw_text_centered(
        raster,
        center.x as i64,
        (center.y - offset) as i64,
        TITLE_TEXT,
        cell_for(TITLE_FONT_PX, scale),
        color,
    );
    draw_text_centered(
        raster,
        center.x as i64,
        (center.y + offset) as i64,
        HINT_TEXT,
        cell_for(HINT_FONT_PX, scale),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_is_fully_opaque() {
        let mut raster = Raster::new(300, 200);
        paint_cover(&mut raster, 1.0, &Settings::default());
        assert_eq!(raster.count_alpha_below(255, 1), (0, 300 * 200));
    }

    #[test]
    fn test_gradient_runs_corner_to_corner() {
        let settings = Settings {
            show_labels: false,
            cover_start: [0, 0, 0],
            cover_end: [200, 100, 50],
            ..Default::default()
        };
        let mut raster = Raster::new(100, 100);
        paint_cover(&mut raster, 1.0, &settings);

        let first = raster.get(0, 0).unwrap();
        let last = raster.get(99, 99).unwrap();
        assert!(first[0] <= 2);
        assert!(last[0] >= 198);
        // Anti-diagonal corners sit halfway
        let mid = raster.get(99, 0).unwrap();
        assert!((mid[0] as i32 - 100).abs() <= 2);
    }

    #[test]
    fn test_labels_drawn_in_label_color() {
        let settings = Settings {
            label_color: [1, 2, 3],
            ..Default::default()
        };
        let mut raster = Raster::new(600, 400);
        paint_cover(&mut raster, 1.0, &settings);
        let mut label_pixels = 0;
        for y in 0..400 {
            for x in 0..600 {
                if raster.get(x, y) == Some([1, 2, 3, 255]) {
                    label_pixels += 1;
                }
            }
        }
        assert!(label_pixels > 0);
    }

    #[test]
    fn test_cell_scales_with_pixel_ratio() {
        assert_eq!(cell_for(TITLE_FONT_PX, 1.0), 3);
        assert_eq!(cell_for(TITLE_FONT_PX, 2.0), 6);
        assert_eq!(cell_for(HINT_FONT_PX, 1.0), 2);
        assert_eq!(cell_for(1.0, 1.0), 1);
    }
}
