//! Occlusion surface: the scratchable cover layer
//!
//! Owns its raster outright. Callers speak logical (CSS) pixels relative to
//! the surface's top-left corner; the surface converts to backing pixels
//! using the ratio of backing size to logical size.

use glam::Vec2;

use super::raster::Raster;
use crate::consts::VISIBLE_ALPHA_THRESHOLD;
use crate::error::SurfaceError;
use crate::renderer::paint_cover;
use crate::settings::Settings;
use crate::{backing_scale, backing_size};

/// Region the host gives us to draw into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableArea {
    /// Size in logical (CSS) pixels
    pub size: Vec2,
    /// Backing pixels per logical pixel
    pub device_pixel_ratio: f32,
}

impl DrawableArea {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            device_pixel_ratio,
        }
    }

    fn validate(&self) -> Result<(), SurfaceError> {
        if !self.size.is_finite() || self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(SurfaceError::EmptyArea {
                width: self.size.x,
                height: self.size.y,
            });
        }
        let dpr = self.device_pixel_ratio;
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(SurfaceError::InvalidPixelRatio(dpr));
        }
        Ok(())
    }
}

/// Something the reveal controller can scratch and measure
pub trait ScratchSurface {
    /// Erase a disc at `point` (logical pixels) with logical `radius`
    fn erase_at(&mut self, point: Vec2, radius: f32);
    /// Fraction of the surface scratched away, in `[0, 1]`
    fn measure_erased_fraction(&self) -> f32;
    /// Stop accepting erases for good
    fn freeze(&mut self);
}

#[derive(Debug, Clone)]
pub struct OcclusionSurface {
    raster: Raster,
    logical_size: Vec2,
    device_pixel_ratio: f32,
    /// Backing pixels per logical pixel, per axis
    scale: Vec2,
    sample_stride: u32,
    painted: bool,
    frozen: bool,
}

impl OcclusionSurface {
    /// Allocate a surface for `area` and paint the cover
    pub fn new(area: DrawableArea, settings: &Settings) -> Result<Self, SurfaceError> {
        area.validate()?;

        let (width, height) = backing_size(area.size, area.device_pixel_ratio);
        let scale = backing_scale(area.size, Vec2::new(width as f32, height as f32));

        let mut surface = Self {
            raster: Raster::new(width, height),
            logical_size: area.size,
            device_pixel_ratio: area.device_pixel_ratio,
            scale,
            sample_stride: settings.effective_sample_stride(),
            painted: false,
            frozen: false,
        };
        surface.initialize(settings);

        log::debug!(
            "Surface {}x{} logical -> {}x{} backing",
            area.size.x,
            area.size.y,
            width,
            height
        );
        Ok(surface)
    }

    /// Paint the cover. Only the first call does anything.
    pub fn initialize(&mut self, settings: &Settings) {
        if self.painted {
            return;
        }
        paint_cover(&mut self.raster, self.device_pixel_ratio, settings);
        self.painted = true;
    }

    /// Convert a logical point and radius into backing-pixel space
    pub fn to_backing(&self, point: Vec2, radius: f32) -> (Vec2, f32) {
        // Axis scales only differ by rounding; average them for the radius
        let radius_scale = (self.scale.x + self.scale.y) * 0.5;
        (point * self.scale, radius * radius_scale)
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn logical_size(&self) -> Vec2 {
        self.logical_size
    }

    pub fn backing_size(&self) -> (u32, u32) {
        (self.raster.width(), self.raster.height())
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl ScratchSurface for OcclusionSurface {
    fn erase_at(&mut self, point: Vec2, radius: f32) {
        if self.frozen {
            return;
        }
        let (center, r) = self.to_backing(point, radius);
        self.raster.erase_disc(center, r);
    }

    fn measure_erased_fraction(&self) -> f32 {
        let (below, sampled) = self
            .raster
            .count_alpha_below(VISIBLE_ALPHA_THRESHOLD, self.sample_stride);
        if sampled == 0 {
            return 0.0;
        }
        (below as f64 / sampled as f64) as f32
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn surface(width: f32, height: f32, dpr: f32) -> OcclusionSurface {
        OcclusionSurface::new(DrawableArea::new(width, height, dpr), &Settings::default()).unwrap()
    }

    #[test]
    fn test_fresh_surface_is_unscratched() {
        let s = surface(300.0, 200.0, 1.0);
        assert_eq!(s.backing_size(), (300, 200));
        assert_eq!(s.measure_erased_fraction(), 0.0);
    }

    #[test]
    fn test_rejects_bad_areas() {
        let settings = Settings::default();
        assert!(matches!(
            OcclusionSurface::new(DrawableArea::new(0.0, 100.0, 1.0), &settings),
            Err(SurfaceError::EmptyArea { .. })
        ));
        assert!(matches!(
            OcclusionSurface::new(DrawableArea::new(100.0, f32::NAN, 1.0), &settings),
            Err(SurfaceError::EmptyArea { .. })
        ));
        assert_eq!(
            OcclusionSurface::new(DrawableArea::new(100.0, 100.0, 0.0), &settings).unwrap_err(),
            SurfaceError::InvalidPixelRatio(0.0)
        );
    }

    #[test]
    fn test_high_dpi_scales_point_and_radius() {
        let mut s = surface(300.0, 300.0, 2.0);
        assert_eq!(s.backing_size(), (600, 600));

        let (center, radius) = s.to_backing(Vec2::new(100.0, 100.0), 30.0);
        assert_eq!(center, Vec2::new(200.0, 200.0));
        assert_eq!(radius, 60.0);

        s.erase_at(Vec2::new(100.0, 100.0), 30.0);
        let raster = s.raster();
        assert_eq!(raster.alpha_at(200, 200), 0);
        assert_eq!(raster.alpha_at(259, 200), 0);
        assert_eq!(raster.alpha_at(260, 200), 255);
        assert_eq!(raster.alpha_at(200, 140), 0);
        assert_eq!(raster.alpha_at(200, 139), 255);
    }

    #[test]
    fn test_erase_follows_a_resized_box() {
        let mut s = surface(300.0, 200.0, 1.0);
        // Card now renders at 150x100; the finger is at its visual center
        let p = crate::rendered_to_logical(
            Vec2::new(75.0, 50.0),
            Vec2::new(150.0, 100.0),
            s.logical_size(),
        );
        s.erase_at(p, 10.0);
        assert_eq!(s.raster().alpha_at(150, 100), 0);
        assert_eq!(s.raster().alpha_at(75, 50), 255);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let settings = Settings::default();
        let mut s = surface(100.0, 100.0, 1.0);
        s.erase_at(Vec2::new(50.0, 50.0), 20.0);
        let before = s.measure_erased_fraction();
        s.initialize(&settings);
        assert_eq!(s.measure_erased_fraction(), before);
    }

    #[test]
    fn test_full_erase_reaches_one() {
        let mut s = surface(40.0, 40.0, 1.0);
        s.erase_at(Vec2::new(20.0, 20.0), 40.0);
        assert_eq!(s.measure_erased_fraction(), 1.0);
    }

    #[test]
    fn test_frozen_surface_ignores_erases() {
        let mut s = surface(100.0, 100.0, 1.0);
        s.erase_at(Vec2::new(10.0, 10.0), 10.0);
        let before = s.measure_erased_fraction();
        s.freeze();
        s.erase_at(Vec2::new(50.0, 50.0), 40.0);
        assert!(s.is_frozen());
        assert_eq!(s.measure_erased_fraction(), before);
    }

    #[test]
    fn test_strided_measure_tracks_full_scan() {
        let settings = Settings {
            sample_stride: 4,
            ..Default::default()
        };
        let area = DrawableArea::new(400.0, 400.0, 1.0);
        let mut coarse = OcclusionSurface::new(area, &settings).unwrap();
        let mut fine = OcclusionSurface::new(area, &Settings::default()).unwrap();
        for x in [80.0, 200.0, 320.0] {
            coarse.erase_at(Vec2::new(x, 200.0), 60.0);
            fine.erase_at(Vec2::new(x, 200.0), 60.0);
        }
        let diff = (coarse.measure_erased_fraction() - fine.measure_erased_fraction()).abs();
        assert!(diff < 0.01, "stride 4 off by {diff}");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_erased_fraction_never_decreases(
            strokes in prop::collection::vec(
                (-20.0f32..220.0, -20.0f32..140.0, 1.0f32..40.0),
                1..40,
            ),
            dpr in prop::sample::select(vec![1.0f32, 1.5, 2.0, 3.0]),
        ) {
            let mut s = surface(200.0, 120.0, dpr);
            let mut last = s.measure_erased_fraction();
            for (x, y, r) in strokes {
                s.erase_at(Vec2::new(x, y), r);
                let now = s.measure_erased_fraction();
                prop_assert!(now >= last);
                prop_assert!((0.0..=1.0).contains(&now));
                last = now;
            }
        }

        #[test]
        fn prop_measure_is_idempotent(
            strokes in prop::collection::vec((0.0f32..200.0, 0.0f32..120.0, 1.0f32..30.0), 0..20),
            stride in 1u32..5,
        ) {
            let settings = Settings { sample_stride: stride, ..Default::default() };
            let mut s =
                OcclusionSurface::new(DrawableArea::new(200.0, 120.0, 1.0), &settings).unwrap();
            for (x, y, r) in strokes {
                s.erase_at(Vec2::new(x, y), r);
            }
            prop_assert_eq!(s.measure_erased_fraction(), s.measure_erased_fraction());
        }
    }
}
