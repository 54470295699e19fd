//! Weighted reward draw and card creation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// What a card pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    #[serde(rename = "better_luck")]
    BetterLuck,
    #[serde(rename = "points_10")]
    Points10,
    #[serde(rename = "points_50")]
    Points50,
    #[serde(rename = "points_100")]
    Points100,
}

/// Draw weights, walked in this order
pub const REWARD_WEIGHTS: [(RewardKind, u32); 4] = [
    (RewardKind::BetterLuck, 50),
    (RewardKind::Points10, 30),
    (RewardKind::Points50, 15),
    (RewardKind::Points100, 5),
];

/// Sum of all draw weights
pub const TOTAL_WEIGHT: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < REWARD_WEIGHTS.len() {
        total += REWARD_WEIGHTS[i].1;
        i += 1;
    }
    total
};

impl RewardKind {
    pub const ALL: [RewardKind; 4] = [
        RewardKind::BetterLuck,
        RewardKind::Points10,
        RewardKind::Points50,
        RewardKind::Points100,
    ];

    /// Points awarded for this reward
    pub fn points(&self) -> u32 {
        match self {
            RewardKind::BetterLuck => 0,
            RewardKind::Points10 => 10,
            RewardKind::Points50 => 50,
            RewardKind::Points100 => 100,
        }
    }

    /// Draw weight out of `TOTAL_WEIGHT`
    pub fn weight(&self) -> u32 {
        REWARD_WEIGHTS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, w)| *w)
            .unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::BetterLuck => "better_luck",
            RewardKind::Points10 => "points_10",
            RewardKind::Points50 => "points_50",
            RewardKind::Points100 => "points_100",
        }
    }
}

/// Draw one reward kind.
///
/// Rolls a uniform value in `[0, TOTAL_WEIGHT)` and subtracts weights in table
/// order; the first kind that takes the roll to `<= 0` wins.
pub fn draw_reward<R: Rng + ?Sized>(rng: &mut R) -> RewardKind {
    let mut roll = rng.random_range(0.0..TOTAL_WEIGHT as f64);
    for (kind, weight) in REWARD_WEIGHTS {
        roll -= weight as f64;
        if roll <= 0.0 {
            return kind;
        }
    }
    // Unreachable for a roll below the total, kept total anyway
    RewardKind::BetterLuck
}

/// Opaque card identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single scratch card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub reward: RewardKind,
    /// Always `reward.points()`
    pub points: u32,
    revealed: bool,
}

impl Card {
    pub fn new(id: CardId, reward: RewardKind) -> Self {
        Self {
            id,
            reward,
            points: reward.points(),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip the revealed flag. Returns false if it was already set.
    pub fn mark_revealed(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}

/// Hands out fresh cards from a seeded RNG
#[derive(Debug, Clone)]
pub struct RewardGenerator {
    seed: u64,
    rng: Pcg32,
    issued: u64,
}

impl RewardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            issued: 0,
        }
    }

    /// Number of cards handed out so far
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Draw a new, unrevealed card
    pub fn request_new_card(&mut self) -> Card {
        let reward = draw_reward(&mut self.rng);
        let id = CardId(format!("card-{:x}-{}", self.seed, self.issued));
        self.issued += 1;
        log::info!("New card {} ({})", id, reward.as_str());
        Card::new(id, reward)
    }
}
