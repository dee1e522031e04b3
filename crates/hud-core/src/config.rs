//! Tunable parameters for the ring visualizer.
//!
//! `VisualizerConfig::default()` reproduces the stock HUD look; tests and
//! alternative hosts can override individual fields and call
//! [`VisualizerConfig::validate`] before building a visualizer.
//!
//! Only the fields below are tunable. The background grid, glow and core
//! stroke styling are fixed constants in [`crate::constants`].

use crate::constants::*;
use crate::rings::{RingPalette, RingSpec};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor for {channel} must be in (0, 1), got {value}")]
    SmoothingOutOfRange { channel: &'static str, value: f64 },
    #[error("particle population must not be empty")]
    NoParticles,
    #[error("particle {field} range is inverted or negative: {min}..{max}")]
    ParticleRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("ring {index} has a non-positive radius or stroke width")]
    RingGeometry { index: usize },
    #[error("ring span must be in (0, 360] degrees, got {0}")]
    RingSpan(f64),
    #[error("pulse divisor must be positive, got {0}")]
    PulseDivisor(f64),
    #[error("base radius fraction must be in (0, 0.5], got {0}")]
    BaseRadius(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingFactors {
    pub session: f64,
    pub set: f64,
    pub score: f64,
}

impl Default for SmoothingFactors {
    fn default() -> Self {
        Self {
            session: SESSION_SMOOTHING,
            set: SET_SMOOTHING,
            score: SCORE_SMOOTHING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub size_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub orbit_min: f64,
    pub orbit_max: f64,
    /// Outer edge of the orbit band as a fraction of the base radius.
    pub band: f64,
    pub alpha_scale: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size_max: PARTICLE_SIZE_MAX,
            speed_min: PARTICLE_SPEED_MIN,
            speed_max: PARTICLE_SPEED_MAX,
            orbit_min: PARTICLE_ORBIT_MIN,
            orbit_max: PARTICLE_ORBIT_MAX,
            band: PARTICLE_BAND,
            alpha_scale: PARTICLE_ALPHA_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
    pub smoothing: SmoothingFactors,
    pub rotation_step: f64,
    pub pulse_divisor_ms: f64,
    pub particles: ParticleParams,
    /// Base ring radius as a fraction of the surface size.
    pub base_radius_fraction: f64,
    pub start_deg: f64,
    pub span_deg: f64,
    /// Outer to inner: sessions, sets, score.
    pub rings: [RingSpec; 3],
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingFactors::default(),
            rotation_step: ROTATION_STEP_RAD,
            pulse_divisor_ms: PULSE_TIME_DIVISOR_MS,
            particles: ParticleParams::default(),
            base_radius_fraction: BASE_RADIUS_FRACTION,
            start_deg: RING_START_DEG,
            span_deg: RING_SPAN_DEG,
            rings: [
                RingSpec {
                    radius_fraction: SESSION_RING_RADIUS,
                    width_fraction: RING_STROKE_FRACTION,
                    palette: RingPalette::from_hues(SESSION_HUES),
                },
                RingSpec {
                    radius_fraction: SET_RING_RADIUS,
                    width_fraction: RING_STROKE_FRACTION,
                    palette: RingPalette::from_hues(SET_HUES),
                },
                RingSpec {
                    radius_fraction: SCORE_RING_RADIUS,
                    width_fraction: RING_STROKE_FRACTION,
                    palette: RingPalette::from_hues(SCORE_HUES),
                },
            ],
        }
    }
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("session", self.smoothing.session),
            ("set", self.smoothing.set),
            ("score", self.smoothing.score),
        ];
        for (channel, value) in factors {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::SmoothingOutOfRange { channel, value });
            }
        }
        if !(self.pulse_divisor_ms > 0.0) {
            return Err(ConfigError::PulseDivisor(self.pulse_divisor_ms));
        }

        let p = &self.particles;
        if p.count == 0 {
            return Err(ConfigError::NoParticles);
        }
        let ranges = [
            ("speed", p.speed_min, p.speed_max),
            ("orbit", p.orbit_min, p.orbit_max),
            ("size", 0.0, p.size_max),
            ("band", 0.0, p.band),
            ("alpha scale", 0.0, p.alpha_scale),
        ];
        for (field, min, max) in ranges {
            if !(min >= 0.0 && max > min) {
                return Err(ConfigError::ParticleRange { field, min, max });
            }
        }

        if !(self.base_radius_fraction > 0.0 && self.base_radius_fraction <= 0.5) {
            return Err(ConfigError::BaseRadius(self.base_radius_fraction));
        }
        if !(self.span_deg > 0.0 && self.span_deg <= 360.0) {
            return Err(ConfigError::RingSpan(self.span_deg));
        }
        for (index, ring) in self.rings.iter().enumerate() {
            if !(ring.radius_fraction > 0.0 && ring.width_fraction > 0.0) {
                return Err(ConfigError::RingGeometry { index });
            }
        }
        Ok(())
    }
}
