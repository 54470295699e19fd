//! Reveal controller
//!
//! Turns pointer/touch gestures into erases and watches the scratched
//! fraction. The card flips from `Hidden` to `Revealed` the first time a
//! measurement goes strictly above `REVEAL_THRESHOLD`; there is no way back.

use glam::Vec2;

use super::surface::ScratchSurface;
use crate::consts::REVEAL_THRESHOLD;

/// Input events, in surface-local logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    PointerLeave,
    TouchStart(Vec2),
    TouchMove(Vec2),
    TouchEnd,
}

/// Whether the prize is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    /// Terminal
    Revealed,
}

/// Per-stroke state, reset when the pointer lifts or leaves
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    pub active: bool,
    pub last_point: Option<Vec2>,
}

/// What handling one event did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing to do (move with no stroke in progress, or card already revealed)
    Ignored,
    /// Erased and re-measured; still hidden
    Scratched { fraction: f32 },
    /// This event revealed the card
    Revealed { fraction: f32 },
    /// Stroke finished
    StrokeEnded,
}

#[derive(Debug, Clone)]
pub struct RevealController {
    state: RevealState,
    session: GestureSession,
    /// Logical brush radius
    brush_radius: f32,
    /// Last measured fraction
    fraction: f32,
}

impl RevealController {
    pub fn new(brush_radius: f32) -> Self {
        Self {
            state: RevealState::Hidden,
            session: GestureSession::default(),
            brush_radius,
            fraction: 0.0,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Last measured scratched fraction, `[0, 1]`
    pub fn erased_fraction(&self) -> f32 {
        self.fraction
    }

    /// Last measured scratched percentage, `[0, 100]`
    pub fn scratch_percentage(&self) -> f32 {
        self.fraction * 100.0
    }

    /// Feed one input event.
    ///
    /// `on_revealed` runs synchronously, and only on the event that moves the
    /// card to `Revealed`.
    pub fn handle<S, F>(&mut self, event: GestureEvent, surface: &mut S, on_revealed: F) -> Step
    where
        S: ScratchSurface + ?Sized,
        F: FnOnce(),
    {
        match event {
            GestureEvent::PointerUp | GestureEvent::PointerLeave | GestureEvent::TouchEnd => {
                self.session = GestureSession::default();
                Step::StrokeEnded
            }
            _ if self.is_revealed() => Step::Ignored,
            GestureEvent::PointerDown(p) | GestureEvent::TouchStart(p) => {
                self.session.active = true;
                self.scratch(p, surface, on_revealed)
            }
            GestureEvent::PointerMove(p) | GestureEvent::TouchMove(p) => {
                if !self.session.active {
                    return Step::Ignored;
                }
                self.scratch(p, surface, on_revealed)
            }
        }
    }

    /// Erase at `point`, re-measure, and fire the reveal if we just crossed
    fn scratch<S, F>(&mut self, point: Vec2, surface: &mut S, on_revealed: F) -> Step
    where
        S: ScratchSurface + ?Sized,
        F: FnOnce(),
    {
        self.session.last_point = Some(point);
        surface.erase_at(point, self.brush_radius);
        self.fraction = surface.measure_erased_fraction();
        log::debug!("Scratched {:.1}%", self.scratch_percentage());

        if !self.try_reveal() {
            return Step::Scratched {
                fraction: self.fraction,
            };
        }

        surface.freeze();
        self.session = GestureSession::default();
        log::info!("Card revealed at {:.1}%", self.scratch_percentage());
        on_revealed();
        Step::Revealed {
            fraction: self.fraction,
        }
    }

    /// Hidden -> Revealed, only when the last measurement is over the line
    fn try_reveal(&mut self) -> bool {
        if self.state != RevealState::Hidden || self.fraction <= REVEAL_THRESHOLD {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}
