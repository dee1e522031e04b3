//! The animated three-ring visualizer and its lifecycle.
//!
//! ```text
//! Uninitialized --mount--> Measuring --valid size--> Animating <--legend--> ShowingOverlay
//!        \___________________\_______________________\_____________________\--> Unmounted
//! ```
//!
//! All per-instance state (animation, particles, surface) lives here and is
//! passed explicitly to the scene code. `frame` takes `&mut self`, so the
//! update/draw pair of one frame can never interleave with a target change.

use crate::animation::AnimationState;
use crate::canvas::Canvas;
use crate::config::{ConfigError, VisualizerConfig};
use crate::frame_loop::{CancelToken, FrameStats, LoopControl};
use crate::inputs::{TargetRatios, TrackerProps};
use crate::particles::ParticleField;
use crate::scene;
use crate::surface::{SurfaceHost, SurfaceMetrics};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Measuring,
    Animating,
    ShowingOverlay,
    Unmounted,
}

impl Phase {
    pub fn is_rendering(self) -> bool {
        matches!(self, Phase::Animating | Phase::ShowingOverlay)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// Surface not measured yet; nothing was drawn and state was not advanced.
    Skipped,
    Stopped,
}

impl FrameOutcome {
    pub fn control(self) -> LoopControl {
        match self {
            FrameOutcome::Stopped => LoopControl::Stop,
            FrameOutcome::Drawn | FrameOutcome::Skipped => LoopControl::Continue,
        }
    }
}

pub struct AnimatedRingVisualizer {
    config: VisualizerConfig,
    phase: Phase,
    targets: TargetRatios,
    state: AnimationState,
    particles: ParticleField,
    surface: Option<SurfaceMetrics>,
    token: CancelToken,
    stats: FrameStats,
}

impl AnimatedRingVisualizer {
    /// Builds the particle population from `rng`; pass a seeded RNG for
    /// reproducible output.
    pub fn new(config: VisualizerConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let particles = ParticleField::new(rng, &config.particles);
        Ok(Self {
            config,
            phase: Phase::Uninitialized,
            targets: TargetRatios::default(),
            state: AnimationState::default(),
            particles,
            surface: None,
            token: CancelToken::new(),
            stats: FrameStats::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn targets(&self) -> &TargetRatios {
        &self.targets
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn surface(&self) -> Option<&SurfaceMetrics> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Token the host can hold to stop the loop from outside.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn mount(&mut self) {
        if self.phase == Phase::Uninitialized {
            self.transition(Phase::Measuring);
        }
    }

    pub fn set_props(&mut self, props: &TrackerProps) {
        self.targets = TargetRatios::from_props(props);
    }

    /// Raw targets; the caller is responsible for normalizing them.
    pub fn set_targets(&mut self, targets: TargetRatios) {
        self.targets = targets;
    }

    /// Re-measure after a resize signal. Applies the new size to `canvas` and
    /// returns it, or `None` if the layout is not ready or nothing changed.
    pub fn resize<C: Canvas + ?Sized>(
        &mut self,
        host: &impl SurfaceHost,
        canvas: &mut C,
    ) -> Option<SurfaceMetrics> {
        if matches!(self.phase, Phase::Uninitialized | Phase::Unmounted) {
            return None;
        }
        let Some(metrics) = SurfaceMetrics::from_host(host) else {
            log::debug!("resize ignored: container not laid out yet");
            return None;
        };
        if self.surface == Some(metrics) {
            return None;
        }
        canvas.resize(&metrics);
        self.surface = Some(metrics);
        log::info!(
            "surface {}x{} css, {}px backing @ dpr {}",
            metrics.css_size,
            metrics.css_size,
            metrics.backing_px,
            metrics.dpr
        );
        if self.phase == Phase::Measuring {
            self.transition(Phase::Animating);
        }
        Some(metrics)
    }

    pub fn needs_measure(&self) -> bool {
        self.phase == Phase::Measuring
    }

    /// Flip the legend overlay. Returns whether it is now shown.
    pub fn toggle_legend(&mut self) -> bool {
        match self.phase {
            Phase::Animating => self.transition(Phase::ShowingOverlay),
            Phase::ShowingOverlay => self.transition(Phase::Animating),
            _ => {}
        }
        self.legend_visible()
    }

    pub fn hide_legend(&mut self) {
        if self.phase == Phase::ShowingOverlay {
            self.transition(Phase::Animating);
        }
    }

    pub fn legend_visible(&self) -> bool {
        self.phase == Phase::ShowingOverlay
    }

    /// One loop iteration: update animation state, then draw it.
    pub fn frame<C: Canvas + ?Sized>(&mut self, timestamp_ms: f64, canvas: &mut C) -> FrameOutcome {
        if self.token.is_cancelled() {
            self.unmount();
        }
        if self.phase == Phase::Unmounted {
            return FrameOutcome::Stopped;
        }
        let size = match (self.phase.is_rendering(), self.surface) {
            (true, Some(surface)) => surface.css_size,
            _ => {
                self.stats.record_skipped();
                return FrameOutcome::Skipped;
            }
        };

        self.state.update(&self.targets, timestamp_ms, &self.config);
        self.particles.advance();
        scene::draw_frame(canvas, size, &self.state, &self.particles, &self.config);
        self.stats.record_drawn();
        FrameOutcome::Drawn
    }

    /// Stop the loop and release per-instance resources. Safe to call again.
    pub fn unmount(&mut self) {
        self.token.cancel();
        if self.phase == Phase::Unmounted {
            return;
        }
        self.particles.release();
        self.surface = None;
        log::info!(
            "visualizer unmounted after {} frames ({} skipped, {:.1}s)",
            self.stats.drawn(),
            self.stats.skipped(),
            self.stats.elapsed_secs()
        );
        self.transition(Phase::Unmounted);
    }

    fn transition(&mut self, next: Phase) {
        log::debug!("visualizer {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
