//! Progress-ring geometry and palettes.

use crate::canvas::{Color, ColorStop, Paint};
use crate::constants::{GRADIENT_END_LIGHTNESS, GRADIENT_START_LIGHTNESS};
use crate::inputs::clamp_ratio;
use glam::DVec2;
use smallvec::smallvec;

/// Fixed two-stop hue ramp identifying a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPalette {
    pub hue_start: f64,
    pub hue_end: f64,
}

impl RingPalette {
    pub const fn from_hues((hue_start, hue_end): (f64, f64)) -> Self {
        Self { hue_start, hue_end }
    }

    pub fn start_color(&self) -> Color {
        Color::hsl(self.hue_start, 100.0, GRADIENT_START_LIGHTNESS)
    }

    pub fn end_color(&self) -> Color {
        Color::hsl(self.hue_end, 100.0, GRADIENT_END_LIGHTNESS)
    }

    pub fn glow_color(&self) -> Color {
        Color::hsl(self.hue_end, 100.0, GRADIENT_START_LIGHTNESS)
    }

    /// Horizontal gradient across the ring's diameter.
    pub fn gradient(&self, center: DVec2, radius: f64) -> Paint {
        Paint::LinearGradient {
            from: DVec2::new(center.x - radius, center.y),
            to: DVec2::new(center.x + radius, center.y),
            stops: smallvec![
                ColorStop {
                    offset: 0.0,
                    color: self.start_color(),
                },
                ColorStop {
                    offset: 1.0,
                    color: self.end_color(),
                },
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    /// Radius relative to the base radius.
    pub radius_fraction: f64,
    /// Stroke width relative to the surface size.
    pub width_fraction: f64,
    pub palette: RingPalette,
}

/// Resolved geometry of one ring for a given surface size and progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub center: DVec2,
    pub radius: f64,
    pub width: f64,
    pub start: f64,
    pub track_end: f64,
    pub progress_end: f64,
}

impl RingGeometry {
    pub fn resolve(
        spec: &RingSpec,
        size: f64,
        base_radius: f64,
        start_deg: f64,
        span_deg: f64,
        progress: f64,
    ) -> Self {
        let start = start_deg.to_radians();
        let span = span_deg.to_radians();
        Self {
            center: DVec2::splat(size * 0.5),
            radius: base_radius * spec.radius_fraction,
            width: size * spec.width_fraction,
            start,
            track_end: start + span,
            progress_end: start + span * clamp_ratio(progress),
        }
    }

    pub fn track_span(&self) -> f64 {
        self.track_end - self.start
    }

    pub fn progress_span(&self) -> f64 {
        self.progress_end - self.start
    }
}
