// Host-side tests for the visualizer lifecycle, surface scaling and drawing.

mod support;

use hud_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use support::{Cmd, FixedHost, Recorder};

fn demo_props() -> TrackerProps {
    TrackerProps {
        score: 84.0,
        sessions: Progress::new(4.0, 5.0),
        sets: Progress::new(45.0, 60.0),
        status: Status::Consistent,
    }
}

fn seeded(seed: u64) -> AnimatedRingVisualizer {
    let mut rng = StdRng::seed_from_u64(seed);
    AnimatedRingVisualizer::new(VisualizerConfig::default(), &mut rng).unwrap()
}

/// Mounted and measured at 400 CSS px, dpr 1.
fn animating(seed: u64, canvas: &mut Recorder) -> AnimatedRingVisualizer {
    let mut vis = seeded(seed);
    vis.mount();
    vis.resize(&FixedHost { width: 400.0, dpr: 1.0 }, canvas);
    canvas.take();
    vis
}

#[test]
fn lifecycle_waits_for_a_valid_measurement() {
    let mut canvas = Recorder::default();
    let mut vis = seeded(1);
    assert_eq!(vis.phase(), Phase::Uninitialized);
    assert_eq!(vis.frame(0.0, &mut canvas), FrameOutcome::Skipped);

    vis.mount();
    assert_eq!(vis.phase(), Phase::Measuring);
    assert!(vis.needs_measure());

    // layout not settled yet
    assert_eq!(vis.resize(&FixedHost { width: 0.0, dpr: 2.0 }, &mut canvas), None);
    assert_eq!(vis.phase(), Phase::Measuring);
    assert_eq!(vis.frame(16.0, &mut canvas), FrameOutcome::Skipped);
    assert!(canvas.cmds.is_empty(), "skipped frames must not draw");
    assert_eq!(*vis.state(), AnimationState::default());

    let metrics = vis
        .resize(&FixedHost { width: 320.0, dpr: 2.0 }, &mut canvas)
        .expect("valid measurement");
    assert_eq!(metrics.backing_px, 640);
    assert_eq!(metrics.css_size, 320.0);
    assert_eq!(canvas.take(), vec![Cmd::Resize(metrics)]);
    assert_eq!(vis.phase(), Phase::Animating);

    assert_eq!(vis.frame(32.0, &mut canvas), FrameOutcome::Drawn);
    assert_eq!(vis.stats().drawn(), 1);
    assert_eq!(vis.stats().skipped(), 2);
}

#[test]
fn resize_produces_square_dpr_scaled_surface() {
    let cases = [
        (320.0, 2.0, 640),
        (375.0, 3.0, 1125),
        (411.5, 2.625, 1080),
        (1.0, 1.0, 1),
        (0.25, 1.0, 1),
    ];
    for (width, dpr, backing) in cases {
        let mut canvas = Recorder::default();
        let mut vis = seeded(3);
        vis.mount();
        let m = vis
            .resize(&FixedHost { width, dpr }, &mut canvas)
            .unwrap();
        assert_eq!(m.backing_px, backing, "width {width} dpr {dpr}");
        assert_eq!(m.css_size, width);
        assert_eq!(m.dpr, dpr);
    }
}

#[test]
fn unchanged_resize_does_not_touch_the_canvas() {
    let mut canvas = Recorder::default();
    let mut vis = animating(3, &mut canvas);
    assert_eq!(vis.resize(&FixedHost { width: 400.0, dpr: 1.0 }, &mut canvas), None);
    assert!(canvas.cmds.is_empty());

    let m = vis
        .resize(&FixedHost { width: 280.0, dpr: 1.0 }, &mut canvas)
        .unwrap();
    assert_eq!(m.backing_px, 280);
    assert_eq!(vis.surface(), Some(&m));

    // a transient zero width keeps the last good surface
    assert_eq!(vis.resize(&FixedHost { width: 0.0, dpr: 1.0 }, &mut canvas), None);
    assert_eq!(vis.surface(), Some(&m));
    assert_eq!(vis.phase(), Phase::Animating);
}

#[test]
fn unmount_is_idempotent_and_releases_particles() {
    let mut canvas = Recorder::default();
    let mut vis = animating(5, &mut canvas);
    assert_eq!(vis.particles().len(), 40);
    let token = vis.cancel_token();

    vis.unmount();
    vis.unmount();
    assert_eq!(vis.phase(), Phase::Unmounted);
    assert!(vis.particles().is_empty());
    assert!(vis.surface().is_none());
    assert!(token.is_cancelled());
    assert!(!token.cancel(), "already stopped");

    assert_eq!(vis.frame(0.0, &mut canvas), FrameOutcome::Stopped);
    assert!(canvas.cmds.is_empty());
    assert_eq!(vis.resize(&FixedHost { width: 300.0, dpr: 1.0 }, &mut canvas), None);
    assert!(!vis.toggle_legend());
}

#[test]
fn external_cancellation_stops_on_next_frame() {
    let mut canvas = Recorder::default();
    let mut vis = animating(5, &mut canvas);
    let token = vis.cancel_token();

    let ran = run_until_stopped(&token.clone(), |i| {
        let control = vis.frame(i as f64 * 16.0, &mut canvas).control();
        if i == 9 {
            token.cancel();
        }
        control
    });
    assert_eq!(ran, 10);
    assert_eq!(vis.stats().drawn(), 10);

    assert_eq!(vis.frame(1000.0, &mut canvas), FrameOutcome::Stopped);
    assert_eq!(vis.phase(), Phase::Unmounted);
    assert!(vis.particles().is_empty());
}

#[test]
fn legend_overlay_keeps_rendering() {
    let mut canvas = Recorder::default();
    let mut vis = seeded(9);
    vis.mount();
    assert!(!vis.toggle_legend(), "no overlay before the surface is ready");

    vis.resize(&FixedHost { width: 400.0, dpr: 1.0 }, &mut canvas);
    assert!(vis.toggle_legend());
    assert_eq!(vis.phase(), Phase::ShowingOverlay);
    assert_eq!(vis.frame(0.0, &mut canvas), FrameOutcome::Drawn);

    assert!(!vis.toggle_legend());
    assert_eq!(vis.phase(), Phase::Animating);

    vis.toggle_legend();
    vis.hide_legend();
    assert!(!vis.legend_visible());
}

#[test]
fn same_seed_replays_identical_particles() {
    let mut ca = Recorder::default();
    let mut cb = Recorder::default();
    let mut a = animating(42, &mut ca);
    let mut b = animating(42, &mut cb);
    a.set_props(&demo_props());
    b.set_props(&demo_props());
    for i in 0..200 {
        a.frame(i as f64 * 16.7, &mut ca);
        b.frame(i as f64 * 16.7, &mut cb);
    }
    assert_eq!(a.particles(), b.particles());
    assert_eq!(ca.cmds, cb.cmds);

    let mut cc = Recorder::default();
    let c = animating(43, &mut cc);
    assert_ne!(seeded(42).particles(), c.particles());
}

#[test]
fn particle_parameters_follow_configured_ranges() {
    let vis = seeded(11);
    let p = &vis.config().particles;
    for particle in vis.particles().particles() {
        assert!(particle.base_size >= 0.0 && particle.base_size < p.size_max);
        assert!(particle.speed >= p.speed_min && particle.speed < p.speed_max);
        assert!(particle.orbit >= p.orbit_min && particle.orbit < p.orbit_max);
        assert!(particle.angle >= 0.0 && particle.angle < std::f64::consts::TAU);
    }
}

#[test]
fn frame_draws_grid_rings_and_particles_in_order() {
    let mut canvas = Recorder::default();
    let mut vis = animating(7, &mut canvas);
    vis.set_props(&demo_props());
    vis.frame(0.0, &mut canvas);

    assert_eq!(
        canvas.cmds[0],
        Cmd::Clear(glam::DVec2::ZERO, glam::DVec2::splat(400.0))
    );
    assert_eq!(canvas.cmds[1], Cmd::Blend(BlendMode::Screen));
    assert_eq!(canvas.count(|c| matches!(c, Cmd::Ellipse { .. })), 5);
    assert_eq!(canvas.count(|c| matches!(c, Cmd::Fill)), 40);
    assert_eq!(
        canvas.count(|c| matches!(c, Cmd::Save)),
        canvas.count(|c| matches!(c, Cmd::Restore))
    );

    let arcs = canvas.arcs();
    assert_eq!(arcs.len(), 3 * 2 + 40);
    let start = 145f64.to_radians();
    let span = 250f64.to_radians();
    let radii = [160.0, 136.0, 112.0];
    for (ring, radius) in radii.iter().enumerate() {
        let (center, r, s, e) = arcs[ring * 2];
        assert_eq!(center, glam::DVec2::splat(200.0));
        assert!((r - radius).abs() < 1e-9);
        assert_eq!(s, start);
        assert!((e - (start + span)).abs() < 1e-12, "track spans the full arc");
        let (_, _, ps, pe) = arcs[ring * 2 + 1];
        assert_eq!(ps, start);
        assert!(pe >= ps && pe <= start + span);
    }

    let gradients: Vec<(Color, Color)> = canvas
        .cmds
        .iter()
        .filter_map(|c| match c {
            Cmd::StrokeStyle(Paint::LinearGradient { stops, .. }) => {
                Some((stops[0].color, stops[1].color))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        gradients,
        vec![
            (Color::hsl(240.0, 100.0, 50.0), Color::hsl(260.0, 100.0, 60.0)),
            (Color::hsl(310.0, 100.0, 50.0), Color::hsl(340.0, 100.0, 60.0)),
            (Color::hsl(30.0, 100.0, 50.0), Color::hsl(50.0, 100.0, 60.0)),
        ]
    );
    assert!(canvas
        .cmds
        .contains(&Cmd::Shadow(20.0, Some(Color::hsl(260.0, 100.0, 50.0)))));
}

#[test]
fn frame_geometry_follows_layout_formulas() {
    use glam::DVec2;
    use std::f64::consts::PI;

    let mut canvas = Recorder::default();
    let mut vis = animating(9, &mut canvas);
    vis.set_props(&demo_props());
    for i in 0..30 {
        vis.frame(i as f64 * 16.7, &mut canvas);
    }
    canvas.take();
    vis.frame(30.0 * 16.7, &mut canvas);

    let center = DVec2::splat(200.0);
    let base = 160.0;

    // grid: 1.1r x 0.6r ellipses at i*pi/2.5 + rotation
    let rotation = vis.state().rotation;
    assert!((rotation - 31.0 * 0.002).abs() < 1e-12);
    let ellipses: Vec<(DVec2, DVec2, f64)> = canvas
        .cmds
        .iter()
        .filter_map(|c| match *c {
            Cmd::Ellipse {
                center,
                radii,
                rotation,
            } => Some((center, radii, rotation)),
            _ => None,
        })
        .collect();
    assert_eq!(ellipses.len(), 5);
    for (i, (c, radii, rot)) in ellipses.iter().enumerate() {
        assert_eq!(*c, center);
        assert!((radii.x - 176.0).abs() < 1e-9 && (radii.y - 96.0).abs() < 1e-9);
        assert!((rot - (i as f64 * PI / 2.5 + rotation)).abs() < 1e-12);
    }

    // progress arcs end at start + span * smoothed ratio
    let start = 145f64.to_radians();
    let span = 250f64.to_radians();
    let ratios = vis.state().ring_ratios();
    assert!(ratios.iter().all(|r| *r > 0.0 && *r < 1.0));
    let arcs = canvas.arcs();
    for (ring, ratio) in ratios.iter().enumerate() {
        let (_, _, _, end) = arcs[ring * 2 + 1];
        assert!((end - (start + span * ratio)).abs() < 1e-12, "ring {}", ring);
    }

    // each progress arc is restroked as a thin white core
    let ring_width = 400.0 * 0.035;
    let cores: Vec<usize> = canvas
        .cmds
        .windows(4)
        .enumerate()
        .filter(|(_, w)| w[0] == Cmd::Shadow(5.0, None))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(cores.len(), 3);
    for i in cores {
        let w = &canvas.cmds[i..i + 4];
        match w[1] {
            Cmd::LineWidth(lw) => assert!((lw - ring_width * 0.3).abs() < 1e-12),
            ref other => panic!("expected core width, got {:?}", other),
        }
        assert_eq!(w[2], Cmd::StrokeStyle(Paint::Solid(Color::white(0.8))));
        assert_eq!(w[3], Cmd::Stroke);
    }

    // particles orbit at r * 0.8 * orbit and twinkle off their own angle
    let fills: Vec<&Paint> = canvas
        .cmds
        .iter()
        .filter_map(|c| match c {
            Cmd::FillStyle(p) => Some(p),
            _ => None,
        })
        .collect();
    let particles = vis.particles().particles();
    assert_eq!(fills.len(), particles.len());
    for (k, p) in particles.iter().enumerate() {
        let (pos, radius, _, _) = arcs[6 + k];
        let orbit = base * 0.8 * p.orbit;
        let expected = center + DVec2::new(p.angle.cos(), p.angle.sin()) * orbit;
        assert!((pos - expected).length() < 1e-9, "particle {}", k);
        let scale = 0.5 + ((p.angle * 2.0).sin() + 1.0) * 0.5;
        assert!((radius - p.base_size * scale).abs() < 1e-12);
        let alpha = (scale * 0.8).min(1.0);
        assert_eq!(*fills[k], Paint::Solid(Color::white(alpha)));
    }
}

#[test]
fn configured_layout_reaches_the_scene() {
    let mut cfg = VisualizerConfig::default();
    cfg.base_radius_fraction = 0.3;
    cfg.particles.band = 0.5;
    let mut rng = StdRng::seed_from_u64(5);
    let mut vis = AnimatedRingVisualizer::new(cfg, &mut rng).unwrap();
    let mut canvas = Recorder::default();
    vis.mount();
    vis.resize(&FixedHost { width: 400.0, dpr: 1.0 }, &mut canvas);
    canvas.take();
    vis.frame(0.0, &mut canvas);

    let arcs = canvas.arcs();
    assert!((arcs[0].1 - 120.0).abs() < 1e-9);
    let band = 120.0 * 0.5;
    for (pos, _, _, _) in &arcs[6..] {
        assert!((*pos - glam::DVec2::splat(200.0)).length() <= band + 1e-9);
    }
}

#[test]
fn out_of_range_targets_converge_but_arcs_clamp() {
    let mut canvas = Recorder::default();
    let mut vis = animating(2, &mut canvas);
    vis.set_targets(TargetRatios {
        session: 1.5,
        set: -0.5,
        score: 0.5,
    });
    for i in 0..400 {
        canvas.take();
        vis.frame(i as f64, &mut canvas);
    }
    assert!(vis.state().session > 1.4);
    assert!(vis.state().set < -0.4);

    let start = 145f64.to_radians();
    let span = 250f64.to_radians();
    let arcs = canvas.arcs();
    assert!((arcs[1].3 - (start + span)).abs() < 1e-12);
    assert_eq!(arcs[3].3, start);
}

#[test]
fn zero_goal_props_draw_without_degenerate_arcs() {
    let mut canvas = Recorder::default();
    let mut vis = animating(4, &mut canvas);
    vis.set_props(&TrackerProps {
        score: f64::NAN,
        sessions: Progress::new(3.0, 0.0),
        sets: Progress::new(0.0, 0.0),
        status: Status::Warning,
    });
    for i in 0..10 {
        vis.frame(i as f64, &mut canvas);
    }
    let start = 145f64.to_radians();
    let end = start + 250f64.to_radians();
    for (_, r, s, e) in canvas.arcs() {
        assert!(r.is_finite() && s.is_finite() && e.is_finite());
        if s == start {
            assert!(e >= start && e <= end);
        }
    }
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = VisualizerConfig::default();
    cfg.particles.count = 0;
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        AnimatedRingVisualizer::new(cfg, &mut rng),
        Err(ConfigError::NoParticles)
    ));
}
