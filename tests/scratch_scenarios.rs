//! End-to-end scratch scenarios through the public API

use glam::Vec2;
use scratch_win::engine::{
    Card, CardId, DrawableArea, GestureEvent, RewardKind, ScratchSurface, Step,
};
use scratch_win::game::ScratchCard;
use scratch_win::{Game, Settings};

/// Minimal stand-in for the host's score keeping
#[derive(Default)]
struct Tally {
    total_points: u64,
    games_played: u32,
}

/// One dab = press, release
fn dab(card: &mut ScratchCard, tally: &mut Tally, x: f32) -> Step {
    let step = card.handle_gesture(GestureEvent::PointerDown(Vec2::new(x, 0.5)), |c| {
        tally.total_points += c.points as u64;
        tally.games_played += 1;
    });
    card.handle_gesture(GestureEvent::PointerUp, |_| {});
    step
}

#[test]
fn points_50_card_reveals_on_third_stroke() {
    // A 1000x1 strip: a dab of radius 150 clears exactly 300 columns
    let settings = Settings {
        brush_radius: 150.0,
        ..Default::default()
    };
    let card = Card::new(CardId::new("card-e2e"), RewardKind::Points50);
    let mut card = ScratchCard::new(card, DrawableArea::new(1000.0, 1.0, 1.0), &settings).unwrap();
    let mut tally = Tally::default();

    assert_eq!(card.controller().scratch_percentage(), 0.0);
    assert_eq!(tally.total_points, 0);

    assert_eq!(dab(&mut card, &mut tally, 150.0), Step::Scratched { fraction: 0.3 });
    assert_eq!(dab(&mut card, &mut tally, 300.0), Step::Scratched { fraction: 0.45 });
    assert_eq!(tally.games_played, 0);
    assert_eq!(dab(&mut card, &mut tally, 450.0), Step::Revealed { fraction: 0.6 });

    assert!(card.card().is_revealed());
    assert_eq!(tally.total_points, 50);
    assert_eq!(tally.games_played, 1);

    // Frozen from here on
    assert_eq!(dab(&mut card, &mut tally, 700.0), Step::Ignored);
    assert_eq!(card.surface().measure_erased_fraction(), 0.6);
    assert_eq!(tally.total_points, 50);
    assert_eq!(tally.games_played, 1);
}

#[test]
fn high_dpi_erase_lands_in_backing_pixels() {
    let settings = Settings::default();
    let card = Card::new(CardId::new("card-dpr"), RewardKind::BetterLuck);
    let mut card = ScratchCard::new(card, DrawableArea::new(400.0, 300.0, 2.0), &settings).unwrap();
    assert_eq!(card.surface().backing_size(), (800, 600));

    card.handle_gesture(GestureEvent::PointerDown(Vec2::new(100.0, 100.0)), |_| {});
    let raster = card.surface().raster();
    assert_eq!(raster.alpha_at(200, 200), 0);
    assert_eq!(raster.alpha_at(200 + 59, 200), 0);
    assert_eq!(raster.alpha_at(200 + 60, 200), 255);
    assert_eq!(raster.alpha_at(200, 200 - 60), 0);
    assert_eq!(raster.alpha_at(200, 200 - 61), 255);
}

#[test]
fn play_several_rounds() {
    let area = DrawableArea::new(160.0, 100.0, 1.5);
    let mut game = Game::new(2024, area, Settings::default()).unwrap();
    let mut expected_points = 0;

    for round in 0..5 {
        expected_points += game.card().points as u64;
        game.handle_gesture(GestureEvent::TouchStart(Vec2::ZERO));
        let mut y = 0.0;
        while y <= 100.0 && !game.is_revealed() {
            let mut x = 0.0;
            while x <= 160.0 {
                game.handle_gesture(GestureEvent::TouchMove(Vec2::new(x, y)));
                x += 15.0;
            }
            y += 15.0;
        }
        game.handle_gesture(GestureEvent::TouchEnd);

        assert!(game.is_revealed(), "round {round} never revealed");
        assert!(game.scratch_percentage() > 50.0);
        assert_eq!(game.games_played(), round + 1);
        assert_eq!(game.total_points(), expected_points);

        game.new_card().unwrap();
    }
}
