//! The per-tick physics pipeline.
//!
//! Each tick every particle passes through the same stages in order: friction,
//! relaxation toward its own base drift, the scroll impulse, pointer
//! repulsion, attractor pull, the interactive-proximity flag, then integration
//! with a toroidal wrap. After all particles have moved, overlapping pairs on
//! nearby depth layers exchange velocity along the collision normal and get
//! pushed apart.
//!
//! Everything runs on the calling thread and touches no shared state: inputs
//! arrive as an immutable snapshot, randomness comes from the caller's RNG, so
//! identical seeds and inputs replay bit-identically.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::input::FrameInput;
use crate::particle::{ParticleField, FIELD_PADDING};
use crate::scene::SceneLayout;

/// Nudge added to collision separation so a freshly separated pair sits
/// strictly outside the contact band despite float rounding.
const SEPARATION_MARGIN: f32 = 1e-3;

/// Tunable constants for the physics pipeline.
///
/// The defaults are the reference motion; they are deliberately per-tick
/// values (the field is meant to advance once per animation frame).
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    /// Velocity multiplier applied at the start of every tick.
    pub friction: f32,
    /// Rate at which velocity relaxes toward the particle's base drift.
    pub drift_return: f32,

    /// Pointer influence radius in pixels.
    pub pointer_radius: f32,
    /// Repulsion strength inside the pointer radius.
    pub pointer_strength: f32,
    /// Scale from repulsion strength to velocity change.
    pub pointer_kick: f32,
    /// Opacity added at full pointer proximity.
    pub pointer_brighten: f32,
    /// Ceiling for pointer-driven brightness.
    pub brightness_cap: f32,
    /// Per-tick rate at which opacity relaxes back to its base.
    pub opacity_relax: f32,

    /// Scroll velocities at or below this are ignored.
    pub scroll_threshold: f32,
    /// Scales scroll velocity into impulse force.
    pub scroll_force_scale: f32,
    /// Upper bound on the scroll impulse force.
    pub scroll_force_max: f32,
    /// Vertical velocity gained per unit of scroll force.
    pub scroll_vertical_kick: f32,
    /// Horizontal jitter gained per unit of scroll force.
    pub scroll_jitter: f32,

    /// Attraction radius around large layout blocks.
    pub attractor_radius: f32,
    /// Pull strength at the attractor center.
    pub attractor_strength: f32,

    /// Distance to an interactive rect center that counts as near.
    pub interactive_radius: f32,
    /// Opacity added when a particle first comes near an interactive rect.
    pub interactive_boost: f32,
    /// Opacity shed when it first leaves again.
    pub interactive_fade: f32,

    /// Extra clearance beyond touching radii that still counts as a collision.
    pub collision_clearance: f32,
    /// Damping applied to the exchanged normal velocity components.
    pub collision_damping: f32,
    /// Depth difference at or beyond which particles pass through each other.
    pub depth_gate: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.98,
            drift_return: 0.02,

            pointer_radius: 120.0,
            pointer_strength: 2.5,
            pointer_kick: 0.15,
            pointer_brighten: 0.4,
            brightness_cap: 0.9,
            opacity_relax: 0.05,

            scroll_threshold: 0.1,
            scroll_force_scale: 0.5,
            scroll_force_max: 3.0,
            scroll_vertical_kick: 0.02,
            scroll_jitter: 0.01,

            attractor_radius: 200.0,
            attractor_strength: 1e-4,

            interactive_radius: 80.0,
            interactive_boost: 0.3,
            interactive_fade: 0.05,

            collision_clearance: 5.0,
            collision_damping: 0.7,
            depth_gate: 0.2,
        }
    }
}

/// Advance the field by one tick.
///
/// `input` is the snapshot taken at tick start; `scene` supplies attractor
/// centers and interactive rects in viewport coordinates (the wrap padding is
/// applied here). `rng` only feeds the scroll jitter, so ticks without scroll
/// consume no randomness.
pub fn step(
    field: &mut ParticleField,
    input: &FrameInput,
    scene: &SceneLayout,
    config: &PhysicsConfig,
    rng: &mut SmallRng,
) {
    let width = field.width();
    let height = field.height();
    let pad = Vec2::splat(FIELD_PADDING);

    let pointer = input.pointer;
    let pointer_pos = pointer.position + pad;
    let scroll = input.scroll;

    for p in field.particles_mut() {
        p.vel *= config.friction;
        p.vel += (p.base_drift - p.vel) * config.drift_return;

        if scroll.velocity > config.scroll_threshold {
            let force = (scroll.velocity * config.scroll_force_scale).min(config.scroll_force_max);
            p.vel.y += scroll.direction * force * config.scroll_vertical_kick;
            p.vel.x += (rng.gen::<f32>() - 0.5) * force * config.scroll_jitter;
        }

        let mut pointer_hit = false;
        if pointer.active {
            let away = p.pos - pointer_pos;
            let dist = away.length();
            if dist > 0.0 && dist < config.pointer_radius {
                let strength = pointer_falloff(dist, config.pointer_radius);
                p.vel += away / dist * strength * config.pointer_strength * config.pointer_kick;
                p.opacity = (p.base_opacity + strength * config.pointer_brighten)
                    .min(config.brightness_cap);
                pointer_hit = true;
            }
        }
        if !pointer_hit {
            p.opacity += (p.base_opacity - p.opacity) * config.opacity_relax;
        }

        for &center in scene.attractors() {
            let toward = center + pad - p.pos;
            let dist = toward.length();
            if dist > 0.0 && dist < config.attractor_radius {
                let strength = (config.attractor_radius - dist) / config.attractor_radius;
                p.vel += toward / dist * strength * config.attractor_strength;
            }
        }

        let near = scene
            .nearest_interactive_distance(p.pos - pad)
            .map_or(false, |d| d < config.interactive_radius);
        if near && !p.near_interactive {
            p.opacity = (p.opacity + config.interactive_boost).min(1.0);
        } else if !near && p.near_interactive {
            p.opacity = (p.opacity - config.interactive_fade).max(p.base_opacity);
        }
        p.near_interactive = near;

        p.pos += p.vel;
        p.pos = wrap_position(p.pos, width, height);
    }

    resolve_collisions(field, config);
}

/// Linear falloff of pointer repulsion: 1.0 at the pointer, 0.0 at the radius
/// and beyond.
fn pointer_falloff(dist: f32, radius: f32) -> f32 {
    ((radius - dist) / radius).max(0.0)
}

/// Wrap a position into the padded band on both axes.
fn wrap_position(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < FIELD_PADDING {
        pos.x = width - FIELD_PADDING;
    } else if pos.x > width - FIELD_PADDING {
        pos.x = FIELD_PADDING;
    }
    if pos.y < FIELD_PADDING {
        pos.y = height - FIELD_PADDING;
    } else if pos.y > height - FIELD_PADDING {
        pos.y = FIELD_PADDING;
    }
    pos
}

/// Pairwise elastic collisions, ascending index order for determinism.
///
/// Pairs whose depth layers differ by the gate or more pass through each
/// other. Colliding pairs exchange the velocity component along the collision
/// normal (mass proportional to radius, scaled by the damping factor; the
/// tangential component is untouched), then both are pushed out of overlap and
/// re-wrapped so separation can never leave the band.
fn resolve_collisions(field: &mut ParticleField, config: &PhysicsConfig) {
    let width = field.width();
    let height = field.height();
    let particles = field.particles_mut();

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if (a.depth - b.depth).abs() >= config.depth_gate {
                continue;
            }

            let offset = b.pos - a.pos;
            let dist = offset.length();
            let min_dist = a.radius + b.radius + config.collision_clearance;
            if dist <= 0.0 || dist >= min_dist {
                continue;
            }

            let normal = offset / dist;
            let tangent = Vec2::new(-normal.y, normal.x);

            let a_n = a.vel.dot(normal);
            let a_t = a.vel.dot(tangent);
            let b_n = b.vel.dot(normal);
            let b_t = b.vel.dot(tangent);

            let total = a.radius + b.radius;
            let a_n_after =
                ((a.radius - b.radius) * a_n + 2.0 * b.radius * b_n) / total * config.collision_damping;
            let b_n_after =
                ((b.radius - a.radius) * b_n + 2.0 * a.radius * a_n) / total * config.collision_damping;

            a.vel = normal * a_n_after + tangent * a_t;
            b.vel = normal * b_n_after + tangent * b_t;

            let push = (min_dist - dist) * 0.5 + SEPARATION_MARGIN;
            a.pos -= normal * push;
            b.pos += normal * push;
            a.pos = wrap_position(a.pos, width, height);
            b.pos = wrap_position(b.pos, width, height);
        }
    }
}
