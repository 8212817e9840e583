//! Particle records and the field store.
//!
//! A [`ParticleField`] owns a fixed population of soft glowing discs inside a
//! padded 2D band. Spawning is driven by a caller-supplied RNG so seeded runs
//! are reproducible; a viewport resize regenerates the whole population rather
//! than remapping stale positions.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// Inset of the wrap band from the field edges, in pixels.
///
/// The field extends this far beyond the viewport on every side so particles
/// wrap while still partly visible instead of popping at the exact edge.
pub const FIELD_PADDING: f32 = 20.0;

/// A single drifting glow disc.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in field coordinates (padded space).
    pub pos: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Disc radius in pixels. Fixed after spawn.
    pub radius: f32,
    /// The ambient velocity this particle relaxes toward.
    pub base_drift: Vec2,
    /// Current opacity, 0.0..=1.0.
    pub opacity: f32,
    /// Resting opacity the particle relaxes back to.
    pub base_opacity: f32,
    /// Palette hue in degrees. Fixed after spawn.
    pub hue: f32,
    /// Depth layer in 0.5..=1.0; 1.0 paints on top. Fixed after spawn.
    pub depth: f32,
    /// Whether the particle is currently near an interactive rect.
    pub near_interactive: bool,
}

impl Particle {
    /// Spawn a particle at a random spot inside the padded band.
    ///
    /// Opacity and resting opacity draw from the same range independently, so
    /// a particle can start brighter than its resting level and ease down over
    /// the first ticks.
    pub(crate) fn spawn(width: f32, height: f32, rng: &mut SmallRng) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen_range(FIELD_PADDING..=(width - FIELD_PADDING).max(FIELD_PADDING)),
                rng.gen_range(FIELD_PADDING..=(height - FIELD_PADDING).max(FIELD_PADDING)),
            ),
            vel: Vec2::ZERO,
            radius: rng.gen_range(1.5..4.5),
            base_drift: Vec2::new(rng.gen_range(-0.1..0.1), rng.gen_range(-0.1..0.1)),
            opacity: rng.gen_range(0.2..0.6),
            base_opacity: rng.gen_range(0.2..0.6),
            hue: rng.gen_range(240.0..300.0),
            depth: rng.gen_range(0.5..1.0),
            near_interactive: false,
        }
    }
}

/// The particle population plus the padded field it drifts in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Spawn `count` particles for a viewport of the given size.
    ///
    /// Field dimensions are the viewport plus [`FIELD_PADDING`] on every side.
    /// Always succeeds; negative viewport dimensions are treated as zero.
    pub fn new(count: usize, viewport_w: f32, viewport_h: f32, rng: &mut SmallRng) -> Self {
        let width = padded(viewport_w);
        let height = padded(viewport_h);
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Build a field from explicit particles. Useful for scripted setups
    /// where spawn randomness would get in the way.
    pub fn from_particles(particles: Vec<Particle>, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            particles,
            width: padded(viewport_w),
            height: padded(viewport_h),
        }
    }

    /// Adopt a new viewport size and regenerate every particle.
    ///
    /// Positions are resampled from scratch; remapping old positions into the
    /// new band would bunch particles along the edges.
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32, rng: &mut SmallRng) {
        self.width = padded(viewport_w);
        self.height = padded(viewport_h);
        for particle in &mut self.particles {
            *particle = Particle::spawn(self.width, self.height, rng);
        }
    }

    /// Field width including padding.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Field height including padding.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Inset of the wrap band from the field edges.
    #[inline]
    pub fn padding(&self) -> f32 {
        FIELD_PADDING
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn padded(viewport_dim: f32) -> f32 {
    viewport_dim.max(0.0) + 2.0 * FIELD_PADDING
}
