//! Per-frame animation state: smoothed ratios, rotation and pulse.

use crate::config::VisualizerConfig;
use crate::inputs::TargetRatios;

/// One exponential-smoothing step: covers `factor` of the remaining distance.
#[inline]
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Pulse in \[0, 1\] derived from an absolute wall-clock timestamp.
///
/// Not accumulated, so frame-rate jitter or a paused tab never causes drift.
#[inline]
pub fn pulse_at(timestamp_ms: f64, divisor_ms: f64) -> f64 {
    ((timestamp_ms / divisor_ms).sin() + 1.0) * 0.5
}

/// Number of steps needed for a smoothing factor to close all but `epsilon`
/// of an initial unit gap. `None` unless both lie in (0, 1).
pub fn steps_to_converge(factor: f64, epsilon: f64) -> Option<u32> {
    let in_unit = |v: f64| v > 0.0 && v < 1.0;
    if !(in_unit(factor) && in_unit(epsilon)) {
        return None;
    }
    Some((epsilon.ln() / (1.0 - factor).ln()).ceil() as u32)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub session: f64,
    pub set: f64,
    pub score: f64,
    /// Radians; grows without bound and is only consumed through trig.
    pub rotation: f64,
    pub pulse: f64,
}

impl AnimationState {
    pub fn update(&mut self, targets: &TargetRatios, timestamp_ms: f64, config: &VisualizerConfig) {
        let f = &config.smoothing;
        self.session = lerp(self.session, targets.session, f.session);
        self.set = lerp(self.set, targets.set, f.set);
        self.score = lerp(self.score, targets.score, f.score);
        self.rotation += config.rotation_step;
        self.pulse = pulse_at(timestamp_ms, config.pulse_divisor_ms);
    }

    /// Smoothed ratios in ring order (outer to inner).
    pub fn ring_ratios(&self) -> [f64; 3] {
        [self.session, self.set, self.score]
    }
}
