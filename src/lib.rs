//! Scratch & Win - a browser scratch card game
//!
//! Core modules:
//! - `engine`: Scratch-reveal engine (occlusion raster, reveal state machine, reward draw)
//! - `renderer`: Software painting of the cover layer (gradient + bitmap label text)
//! - `game`: Host-side bookkeeping (current card, total points, cards scratched)
//! - `display`: Reward presentation keyed by category
//! - `settings`: Data-driven tuning of the brush and cover

pub mod display;
pub mod engine;
pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;

pub use error::SurfaceError;
pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Erased fraction that must be *exceeded* to reveal the card
    pub const REVEAL_THRESHOLD: f32 = 0.5;
    /// Alpha below this counts as scratched (out of 255)
    pub const VISIBLE_ALPHA_THRESHOLD: u8 = 128;

    /// Brush radius in logical (CSS) pixels
    pub const DEFAULT_BRUSH_RADIUS: f32 = 30.0;

    /// Scratch progress is only shown while strictly between these (percent)
    pub const PROGRESS_LABEL_MIN: f32 = 0.0;
    pub const PROGRESS_LABEL_MAX: f32 = 50.0;
}

/// Scale factor from logical (CSS) space to backing-pixel space
#[inline]
pub fn backing_scale(logical: Vec2, backing: Vec2) -> Vec2 {
    backing / logical
}

/// Map a point measured against the element's on-screen box into logical space
///
/// The element may have been resized since the surface was allocated; the
/// point is stretched by `logical / rendered` per axis. A collapsed box
/// leaves the point as is.
#[inline]
pub fn rendered_to_logical(point: Vec2, rendered: Vec2, logical: Vec2) -> Vec2 {
    if !(rendered.x > 0.0 && rendered.y > 0.0) {
        return point;
    }
    point * (logical / rendered)
}

/// Backing raster size for a logical area at a device pixel ratio
///
/// Always at least one pixel in each dimension.
#[inline]
pub fn backing_size(logical: Vec2, device_pixel_ratio: f32) -> (u32, u32) {
    let scaled = (logical * device_pixel_ratio).round().max(Vec2::ONE);
    (scaled.x as u32, scaled.y as u32)
}
