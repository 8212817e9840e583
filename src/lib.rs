//! # driftfield - ambient interactive particle fields
//!
//! A soft field of glowing particles that drifts behind your content and
//! reacts to what the user does: the pointer pushes particles away and
//! brightens them, scrolling kicks them around, and your layout gently shapes
//! where they gather. Physics and rendering are pure CPU code; the optional
//! windowed runner presents frames through wgpu.
//!
//! ## Quick Start
//!
//! Headless, one tick at a time:
//!
//! ```
//! use driftfield::{FieldEngine, MotionPreference};
//!
//! let mut engine = FieldEngine::builder(800, 600)
//!     .with_seed(7)
//!     .with_motion(MotionPreference::Full)
//!     .build();
//!
//! engine.pointer_moved(400.0, 300.0);
//! engine.tick(1.0 / 60.0);
//!
//! let frame = engine.render();
//! assert_eq!((frame.width(), frame.height()), (800, 600));
//! ```
//!
//! Or hand the engine a window and let it run:
//!
//! ```no_run
//! use driftfield::FieldEngine;
//!
//! fn main() -> Result<(), driftfield::EngineError> {
//!     FieldEngine::builder(1280, 720).build().run()
//! }
//! ```
//!
//! ## How the field reacts
//!
//! | Input | Reaction |
//! |-------|----------|
//! | Pointer | particles inside a radius are pushed away and brighten |
//! | Scroll | vertical impulse plus horizontal jitter, scaled by scroll speed |
//! | Large layout rects | weak attractors that gather particles |
//! | Interactive rects | nearby particles get a glow and opacity boost |
//!
//! Register layout rectangles through [`SceneLayout`]; the physics step reads
//! them every tick, so updating the scene between ticks is all it takes to
//! track a moving page.
//!
//! ## Determinism
//!
//! The engine owns a single seeded RNG and never schedules itself. Two
//! engines built with the same seed and fed the same inputs and deltas stay
//! bit-identical, which the test suite leans on heavily.
//!
//! ## Capability handling
//!
//! A reduced-motion preference (explicit, or `DRIFTFIELD_REDUCED_MOTION` in
//! the environment) spawns a sparse field and freezes it after the first
//! paint. Low-parallelism machines get a halved population. If no graphics
//! adapter turns up, the windowed runner says so once and keeps running
//! without visuals.

pub mod budget;
pub mod clock;
pub mod color;
pub mod engine;
pub mod error;
pub mod input;
pub mod particle;
pub mod physics;
pub mod render;
pub mod scene;
mod window;

pub use budget::{MotionPreference, ParticleBudget, PowerClass};
pub use clock::FrameClock;
pub use color::Rgba8;
pub use engine::{FieldBuilder, FieldEngine};
pub use error::{CaptureError, EngineError, PresentError};
pub use glam::Vec2;
pub use input::{FrameInput, InputState, PointerState, ScrollState};
pub use particle::{Particle, ParticleField};
pub use physics::PhysicsConfig;
pub use render::{Frame, RenderConfig};
pub use scene::{ElementKind, Rect, SceneLayout};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```
/// use driftfield::prelude::*;
///
/// let engine = FieldEngine::builder(640, 480).with_seed(1).build();
/// assert!(!engine.field().is_empty());
/// ```
pub mod prelude {
    pub use crate::budget::MotionPreference;
    pub use crate::engine::{FieldBuilder, FieldEngine};
    pub use crate::physics::PhysicsConfig;
    pub use crate::render::{Frame, RenderConfig};
    pub use crate::scene::{ElementKind, Rect, SceneLayout};
    pub use crate::Vec2;
}
