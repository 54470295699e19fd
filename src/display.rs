//! Reward presentation
//!
//! Pure lookup from reward kind to what the prize panel shows. Has no say in
//! what a card is worth.

use crate::consts::{PROGRESS_LABEL_MAX, PROGRESS_LABEL_MIN};
use crate::engine::RewardKind;
use crate::settings::Rgb;

/// How a revealed reward is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardDisplay {
    pub text: &'static str,
    pub emoji: &'static str,
    /// Headline color
    pub text_color: Rgb,
    /// Panel background gradient (top-left, bottom-right)
    pub background: (Rgb, Rgb),
}

impl RewardDisplay {
    pub fn for_reward(kind: RewardKind) -> Self {
        match kind {
            RewardKind::BetterLuck => Self {
                text: "Better Luck Next Time!",
                emoji: "😔",
                text_color: [0x37, 0x41, 0x51],
                background: ([0xf3, 0xf4, 0xf6], [0xe5, 0xe7, 0xeb]),
            },
            RewardKind::Points10 => Self {
                text: "You Won 10 Points!",
                emoji: "🎉",
                text_color: [0x1d, 0x4e, 0xd8],
                background: ([0xdb, 0xea, 0xfe], [0xbf, 0xdb, 0xfe]),
            },
            RewardKind::Points50 => Self {
                text: "You Won 50 Points!",
                emoji: "🎊",
                text_color: [0x7e, 0x22, 0xce],
                background: ([0xf3, 0xe8, 0xff], [0xe9, 0xd5, 0xff]),
            },
            RewardKind::Points100 => Self {
                text: "You Won 100 Points!",
                emoji: "🏆",
                text_color: [0xb4, 0x53, 0x09],
                background: ([0xfe, 0xf3, 0xc7], [0xfd, 0xe6, 0x8a]),
            },
        }
    }

    /// CSS `background` value for the prize panel
    pub fn background_css(&self) -> String {
        format!(
            "linear-gradient(to bottom right, {}, {})",
            css_hex(self.background.0),
            css_hex(self.background.1)
        )
    }
}

/// `#rrggbb`
pub fn css_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Inline `(transition, opacity)` for the cover canvas
///
/// Only the reveal fades out. Putting the cover back is instant so the next
/// prize never shows through a half-opaque canvas.
pub fn cover_style(visible: bool) -> (&'static str, &'static str) {
    if visible {
        ("none", "1")
    } else {
        ("opacity 0.5s ease-out", "0")
    }
}

/// "N% scratched" while the player is part-way there, `None` otherwise
pub fn progress_label(percentage: f32) -> Option<String> {
    if percentage > PROGRESS_LABEL_MIN && percentage < PROGRESS_LABEL_MAX {
        Some(format!("{}% scratched", percentage.round() as u32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_matches_points() {
        for kind in RewardKind::ALL {
            let display = RewardDisplay::for_reward(kind);
            if kind.points() == 0 {
                assert!(display.text.starts_with("Better Luck"));
            } else {
                assert!(display.text.contains(&format!("{} Points", kind.points())));
            }
        }
    }

    #[test]
    fn test_css_helpers() {
        assert_eq!(css_hex([0x10, 0xb9, 0x81]), "#10b981");
        let display = RewardDisplay::for_reward(RewardKind::Points100);
        assert_eq!(
            display.background_css(),
            "linear-gradient(to bottom right, #fef3c7, #fde68a)"
        );
    }

    #[test]
    fn test_cover_returns_without_fading() {
        assert_eq!(cover_style(true), ("none", "1"));
        let (transition, opacity) = cover_style(false);
        assert!(transition.starts_with("opacity"));
        assert_eq!(opacity, "0");
    }

    #[test]
    fn test_progress_label_window() {
        assert_eq!(progress_label(0.0), None);
        assert_eq!(progress_label(0.3), Some("0% scratched".to_string()));
        assert_eq!(progress_label(30.4), Some("30% scratched".to_string()));
        assert_eq!(progress_label(49.9), Some("50% scratched".to_string()));
        assert_eq!(progress_label(50.0), None);
        assert_eq!(progress_label(73.0), None);
    }
}
