//! Surface creation errors
//!
//! The only failure a card can hit is not getting something to draw on.
//! None of these are retried: the card is simply left non-interactive.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The host could not hand us a canvas or its 2D context
    #[error("drawing context unavailable: {0}")]
    ContextUnavailable(String),
    /// Logical size must be finite and strictly positive
    #[error("drawable area is empty ({width} x {height})")]
    EmptyArea { width: f32, height: f32 },
    #[error("invalid device pixel ratio: {0}")]
    InvalidPixelRatio(f32),
}
