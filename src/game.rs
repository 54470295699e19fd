//! Host-side game state
//!
//! Holds the card in play and the running tally. The engine only reports
//! reveals; adding up points and counting cards happens here.

use crate::display::{RewardDisplay, progress_label};
use crate::engine::{
    Card, DrawableArea, GestureEvent, OcclusionSurface, RevealController, RewardGenerator, Step,
};
use crate::error::SurfaceError;
use crate::settings::Settings;

/// A card together with its cover and reveal state
///
/// Replaced wholesale on "new card"; nothing carries over.
#[derive(Debug, Clone)]
pub struct ScratchCard {
    card: Card,
    surface: OcclusionSurface,
    controller: RevealController,
}

impl ScratchCard {
    pub fn new(card: Card, area: DrawableArea, settings: &Settings) -> Result<Self, SurfaceError> {
        Ok(Self {
            card,
            surface: OcclusionSurface::new(area, settings)?,
            controller: RevealController::new(settings.brush_radius),
        })
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn surface(&self) -> &OcclusionSurface {
        &self.surface
    }

    pub fn controller(&self) -> &RevealController {
        &self.controller
    }

    /// Feed a gesture; `on_revealed` sees the card the moment it is revealed
    pub fn handle_gesture<F>(&mut self, event: GestureEvent, on_revealed: F) -> Step
    where
        F: FnOnce(&Card),
    {
        let card = &mut self.card;
        self.controller.handle(event, &mut self.surface, || {
            card.mark_revealed();
            on_revealed(&*card);
        })
    }
}

/// Whole-session state: current card plus totals
#[derive(Debug, Clone)]
pub struct Game {
    generator: RewardGenerator,
    settings: Settings,
    area: DrawableArea,
    current: ScratchCard,
    total_points: u64,
    games_played: u32,
}

impl Game {
    /// Start a session and deal the first card
    pub fn new(seed: u64, area: DrawableArea, settings: Settings) -> Result<Self, SurfaceError> {
        let mut generator = RewardGenerator::new(seed);
        let current = ScratchCard::new(generator.request_new_card(), area, &settings)?;
        Ok(Self {
            generator,
            settings,
            area,
            current,
            total_points: 0,
            games_played: 0,
        })
    }

    /// Deal a fresh card over the same area. Totals are kept.
    pub fn new_card(&mut self) -> Result<&Card, SurfaceError> {
        if !self.current.card().is_revealed() {
            log::warn!("Replacing unrevealed card {}", self.current.card().id);
        }
        let card = self.generator.request_new_card();
        self.current = ScratchCard::new(card, self.area, &self.settings)?;
        Ok(self.current.card())
    }

    /// Route an input event to the current card
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Step {
        let total_points = &mut self.total_points;
        let games_played = &mut self.games_played;
        self.current.handle_gesture(event, |card| {
            *total_points += card.points as u64;
            *games_played += 1;
            log::info!(
                "Card {} paid {} (total {}, cards {})",
                card.id,
                card.points,
                total_points,
                games_played
            );
        })
    }

    pub fn card(&self) -> &Card {
        self.current.card()
    }

    pub fn current(&self) -> &ScratchCard {
        &self.current
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_revealed(&self) -> bool {
        self.current.controller().is_revealed()
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Scratched percentage of the current card, `[0, 100]`
    pub fn scratch_percentage(&self) -> f32 {
        self.current.controller().scratch_percentage()
    }

    /// Progress pill text, if it should be showing
    pub fn scratch_label(&self) -> Option<String> {
        if self.is_revealed() {
            return None;
        }
        progress_label(self.scratch_percentage())
    }

    /// Prize panel contents for the current card
    pub fn reward_display(&self) -> RewardDisplay {
        RewardDisplay::for_reward(self.card().reward)
    }
}
