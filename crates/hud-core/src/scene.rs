//! Layered scene rasterization: background grid, rings, particle field.
//!
//! Everything here reads the already-updated animation state; nothing in this
//! module mutates it.

use crate::animation::AnimationState;
use crate::canvas::{BlendMode, Canvas, Color, LineCap, Paint};
use crate::config::{ParticleParams, VisualizerConfig};
use crate::constants::*;
use crate::particles::ParticleField;
use crate::rings::{RingGeometry, RingSpec};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    size: f64,
    state: &AnimationState,
    particles: &ParticleField,
    config: &VisualizerConfig,
) {
    let center = DVec2::splat(size * 0.5);
    let base_radius = size * config.base_radius_fraction;

    canvas.clear_rect(DVec2::ZERO, DVec2::splat(size));
    canvas.set_blend_mode(BlendMode::Screen);

    draw_grid(canvas, center, base_radius, state.rotation);

    for (spec, progress) in config.rings.iter().zip(state.ring_ratios()) {
        let ring = RingGeometry::resolve(
            spec,
            size,
            base_radius,
            config.start_deg,
            config.span_deg,
            progress,
        );
        draw_ring(canvas, spec, &ring);
    }

    draw_particles(canvas, particles, center, base_radius, &config.particles);
}

fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, center: DVec2, base_radius: f64, rotation: f64) {
    let [r, g, b] = GRID_COLOR;
    canvas.save();
    canvas.set_stroke(&Paint::Solid(Color::rgba(r, g, b, GRID_ALPHA)));
    canvas.set_line_width(GRID_LINE_WIDTH);
    canvas.begin_path();
    let radii = DVec2::new(base_radius * GRID_RADIUS_X, base_radius * GRID_RADIUS_Y);
    for i in 0..GRID_ELLIPSES {
        let rot = i as f64 * PI / 2.5 + rotation;
        canvas.ellipse(center, radii, rot, 0.0, TAU);
    }
    canvas.stroke();
    canvas.restore();
}

/// Track, glowing gradient arc, then a thin white core on the same path.
fn draw_ring<C: Canvas + ?Sized>(canvas: &mut C, spec: &RingSpec, ring: &RingGeometry) {
    canvas.save();
    canvas.set_line_cap(LineCap::Round);

    canvas.begin_path();
    canvas.arc(ring.center, ring.radius, ring.start, ring.track_end);
    canvas.set_line_width(ring.width);
    canvas.set_stroke(&Paint::Solid(Color::white(TRACK_ALPHA)));
    canvas.stroke();

    canvas.set_shadow(GLOW_BLUR, Some(spec.palette.glow_color()));
    canvas.begin_path();
    canvas.arc(ring.center, ring.radius, ring.start, ring.progress_end);
    canvas.set_line_width(ring.width);
    canvas.set_stroke(&spec.palette.gradient(ring.center, ring.radius));
    canvas.stroke();

    canvas.set_shadow(CORE_BLUR, None);
    canvas.set_line_width(ring.width * CORE_WIDTH_FRACTION);
    canvas.set_stroke(&Paint::Solid(Color::white(CORE_ALPHA)));
    canvas.stroke();

    canvas.restore();
}

fn draw_particles<C: Canvas + ?Sized>(
    canvas: &mut C,
    particles: &ParticleField,
    center: DVec2,
    base_radius: f64,
    params: &ParticleParams,
) {
    canvas.save();
    for sprite in particles.sprites(center, base_radius, params) {
        canvas.begin_path();
        canvas.arc(sprite.position, sprite.radius, 0.0, TAU);
        canvas.set_fill(&Paint::Solid(Color::white(sprite.alpha)));
        canvas.fill();
    }
    canvas.restore();
}
