//! Tracker inputs and their normalization into ring ratios.

use crate::constants::CONSISTENT_SCORE_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress {
    pub current: f64,
    pub max: f64,
}

impl Progress {
    pub const fn new(current: f64, max: f64) -> Self {
        Self { current, max }
    }

    /// `current / max`, clamped to \[0, 1\]; a zero or invalid `max` reads as 0.
    pub fn ratio(&self) -> f64 {
        clamp_ratio(self.current / self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Consistent,
    Warning,
}

impl Status {
    pub fn for_score(score: f64) -> Self {
        if score > CONSISTENT_SCORE_THRESHOLD {
            Status::Consistent
        } else {
            Status::Warning
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Consistent => "READY",
            Status::Warning => "WARN",
        }
    }
}

/// Host-side snapshot fed to the tracker on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerProps {
    /// 0..=100
    pub score: f64,
    pub sessions: Progress,
    pub sets: Progress,
    pub status: Status,
}

/// Target ratios the smoothed animation state chases.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetRatios {
    pub session: f64,
    pub set: f64,
    pub score: f64,
}

impl TargetRatios {
    pub fn from_props(props: &TrackerProps) -> Self {
        Self {
            session: props.sessions.ratio(),
            set: props.sets.ratio(),
            score: clamp_ratio(props.score / 100.0),
        }
    }
}

/// Clamp to \[0, 1\], mapping NaN and infinities from degenerate divisions to 0.
#[inline]
pub fn clamp_ratio(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_is_zero_ratio() {
        assert_eq!(Progress::new(3.0, 0.0).ratio(), 0.0);
        assert_eq!(Progress::new(0.0, 0.0).ratio(), 0.0);
    }

    #[test]
    fn status_threshold_is_exclusive() {
        assert_eq!(Status::for_score(80.0), Status::Warning);
        assert_eq!(Status::for_score(84.0), Status::Consistent);
    }
}
