//! Ambient particle field orbiting the ring center.
//!
//! The population is created once and never respawned. Each particle only
//! carries its angle; position, size and opacity are pure functions of it.

use crate::config::ParticleParams;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub angle: f64,
    /// Radians per frame.
    pub speed: f64,
    /// Orbit radius as a fraction of the particle band.
    pub orbit: f64,
    pub base_size: f64,
}

/// Resolved draw parameters for one particle on the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSprite {
    pub position: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, params: &ParticleParams) -> Self {
        Self {
            base_size: rng.gen_range(0.0..params.size_max),
            speed: rng.gen_range(params.speed_min..params.speed_max),
            angle: rng.gen_range(0.0..TAU),
            orbit: rng.gen_range(params.orbit_min..params.orbit_max),
        }
    }

    /// Size/opacity modulation in \[0.5, 1.5\], keyed on the particle's own angle.
    #[inline]
    pub fn twinkle(&self) -> f64 {
        0.5 + ((self.angle * 2.0).sin() + 1.0) * 0.5
    }

    pub fn sprite(
        &self,
        center: DVec2,
        base_radius: f64,
        params: &ParticleParams,
    ) -> ParticleSprite {
        let orbit_radius = base_radius * params.band * self.orbit;
        let scale = self.twinkle();
        ParticleSprite {
            position: center + DVec2::new(self.angle.cos(), self.angle.sin()) * orbit_radius,
            radius: self.base_size * scale,
            alpha: (scale * params.alpha_scale).clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(rng: &mut impl Rng, params: &ParticleParams) -> Self {
        let particles = (0..params.count)
            .map(|_| Particle::random(rng, params))
            .collect();
        Self { particles }
    }

    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.angle += p.speed;
        }
    }

    pub fn sprites<'a>(
        &'a self,
        center: DVec2,
        base_radius: f64,
        params: &'a ParticleParams,
    ) -> impl Iterator<Item = ParticleSprite> + 'a {
        self.particles
            .iter()
            .map(move |p| p.sprite(center, base_radius, params))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop the population and its allocation.
    pub fn release(&mut self) {
        self.particles = Vec::new();
    }
}
