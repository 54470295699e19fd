//! Game settings
//!
//! Read once at startup (canvas `data-settings` attribute on web, an optional
//! JSON file natively). Never written back.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BRUSH_RADIUS;

/// 8-bit RGB color
pub type Rgb = [u8; 3];

/// Tuning for the scratch layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Brush ===
    /// Scratch brush radius in logical (CSS) pixels
    pub brush_radius: f32,

    // === Measurement ===
    /// Grid step (backing pixels) used when measuring scratched coverage.
    /// 1 = every pixel.
    pub sample_stride: u32,

    // === Cover ===
    /// Gradient color at the top-left corner
    pub cover_start: Rgb,
    /// Gradient color at the bottom-right corner
    pub cover_end: Rgb,
    /// Color of the "Scratch here" label text
    pub label_color: Rgb,
    /// Draw the label text at all
    pub show_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush_radius: DEFAULT_BRUSH_RADIUS,

            sample_stride: 1,

            // Emerald -> teal
            cover_start: [0x10, 0xb9, 0x81],
            cover_end: [0x14, 0xb8, 0xa6],
            label_color: [0xff, 0xff, 0xff],
            show_labels: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from optional JSON, falling back to defaults
    pub fn load(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Effective measurement stride (never zero)
    pub fn effective_sample_stride(&self) -> u32 {
        self.sample_stride.max(1)
    }

    /// Clamp values that would break the brush or the sampler
    fn sanitized(mut self) -> Self {
        if !self.brush_radius.is_finite() || self.brush_radius <= 0.0 {
            log::warn!(
                "brush_radius {} is not usable, falling back to {}",
                self.brush_radius,
                DEFAULT_BRUSH_RADIUS
            );
            self.brush_radius = DEFAULT_BRUSH_RADIUS;
        }
        if self.sample_stride == 0 {
            log::warn!("sample_stride 0 clamped to 1");
            self.sample_stride = 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "brush_radius": 12.5 }"#).unwrap();
        assert_eq!(settings.brush_radius, 12.5);
        assert_eq!(settings.sample_stride, 1);
        assert_eq!(settings.cover_start, Settings::default().cover_start);
        assert!(settings.show_labels);
    }

    #[test]
    fn test_bad_values_are_sanitized() {
        let settings =
            Settings::from_json(r#"{ "brush_radius": -4.0, "sample_stride": 0 }"#).unwrap();
        assert_eq!(settings.brush_radius, DEFAULT_BRUSH_RADIUS);
        assert_eq!(settings.sample_stride, 1);
        assert_eq!(settings.effective_sample_stride(), 1);
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        assert_eq!(Settings::load(Some("not json")), Settings::default());
        assert_eq!(Settings::load(None), Settings::default());
    }

    #[test]
    fn test_load_reads_colors() {
        let json = r#"{ "cover_start": [1, 2, 3], "show_labels": false }"#;
        let settings = Settings::load(Some(json));
        assert_eq!(settings.cover_start, [1, 2, 3]);
        assert!(!settings.show_labels);
    }
}
