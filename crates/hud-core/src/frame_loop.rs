//! Cancelable frame-loop primitives.
//!
//! The host owns the actual scheduling (e.g. `requestAnimationFrame`); each
//! iteration calls into the visualizer and reschedules only while it answers
//! [`LoopControl::Continue`]. A single [`CancelToken`] is checked per iteration.

use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that actually stopped the loop.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Frame counter for lifecycle logging.
#[derive(Debug)]
pub struct FrameStats {
    started: Instant,
    frames: u64,
    skipped: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
            skipped: 0,
        }
    }
}

impl FrameStats {
    pub fn record_drawn(&mut self) {
        self.frames += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn drawn(&self) -> u64 {
        self.frames
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Drive `frame` until it asks to stop or the token is cancelled.
///
/// Hosts without a display callback (tests, offline capture) use this; it
/// returns the number of iterations that ran.
pub fn run_until_stopped(token: &CancelToken, mut frame: impl FnMut(u64) -> LoopControl) -> u64 {
    let mut iterations = 0;
    while !token.is_cancelled() {
        let control = frame(iterations);
        iterations += 1;
        if control == LoopControl::Stop {
            break;
        }
    }
    iterations
}
