//! Scratch-reveal engine
//!
//! Everything that decides what the player sees lives here:
//! - Owned raster only (no ambient canvas state)
//! - Gestures in, one-shot reveal out
//! - Seeded RNG only
//! - No platform dependencies

pub mod raster;
pub mod reveal;
pub mod reward;
pub mod surface;

pub use raster::{Raster, Rgba};
pub use reveal::{GestureEvent, GestureSession, RevealController, RevealState, Step};
pub use reward::{
    Card, CardId, REWARD_WEIGHTS, RewardGenerator, RewardKind, TOTAL_WEIGHT, draw_reward,
};
pub use surface::{DrawableArea, OcclusionSurface, ScratchSurface};
