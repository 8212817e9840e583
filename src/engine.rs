//! The engine: one struct that owns the whole field.
//!
//! [`FieldEngine`] owns the particles, the input state, the scene layout, the
//! RNG, the clock, and the output frame. It never schedules itself: whoever
//! drives it (the windowed runner, a test, a bench) calls [`FieldEngine::tick`]
//! with a delta and reads the frame back out. Input events mutate small
//! scalars between ticks; physics sees an immutable snapshot taken at tick
//! start, which is what keeps scripted runs deterministic.
//!
//! # Example
//!
//! ```no_run
//! use driftfield::FieldEngine;
//!
//! let mut engine = FieldEngine::builder(800, 600).with_seed(7).build();
//! engine.pointer_moved(400.0, 300.0);
//! engine.tick(1.0 / 60.0);
//! let frame = engine.render();
//! assert_eq!(frame.width(), 800);
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::budget::{MotionPreference, ParticleBudget, PowerClass};
use crate::clock::FrameClock;
use crate::error::EngineError;
use crate::input::InputState;
use crate::particle::ParticleField;
use crate::physics::{self, PhysicsConfig};
use crate::render::{self, Frame, RenderConfig};
use crate::scene::SceneLayout;

/// Builder for [`FieldEngine`]; start from [`FieldEngine::builder`].
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    viewport_width: u32,
    viewport_height: u32,
    particle_count: Option<usize>,
    seed: Option<u64>,
    motion: Option<MotionPreference>,
    physics: PhysicsConfig,
    render: RenderConfig,
    scene: SceneLayout,
}

impl FieldBuilder {
    fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            particle_count: None,
            seed: None,
            motion: None,
            physics: PhysicsConfig::default(),
            render: RenderConfig::default(),
            scene: SceneLayout::new(),
        }
    }

    /// Exact particle count, overriding the budget heuristics.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = Some(count);
        self
    }

    /// Seed for the engine RNG. Without one, the seed comes from the clock.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Motion preference, overriding environment detection.
    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Physics tunables.
    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    /// Renderer tunables.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Initial scene layout.
    pub fn with_scene(mut self, scene: SceneLayout) -> Self {
        self.scene = scene;
        self
    }

    /// Resolve the budget, spawn the field, and wire everything up.
    pub fn build(self) -> FieldEngine {
        let motion = self.motion.unwrap_or_else(MotionPreference::detect);
        let mut budget = ParticleBudget::new(motion, PowerClass::detect());
        if let Some(count) = self.particle_count {
            budget = budget.with_count(count);
        }

        let seed = self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() as u64)
                .unwrap_or(42)
        });
        let mut rng = SmallRng::seed_from_u64(seed);

        let field = ParticleField::new(
            budget.resolve(),
            self.viewport_width as f32,
            self.viewport_height as f32,
            &mut rng,
        );

        FieldEngine {
            field,
            input: InputState::new(self.viewport_width as f32, self.viewport_height as f32),
            scene: self.scene,
            rng,
            clock: FrameClock::new(),
            frame: Frame::new(self.viewport_width, self.viewport_height),
            physics: self.physics,
            render: self.render,
            motion,
            seed,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
        }
    }
}

/// The particle field engine. See the module docs for the driving contract.
#[derive(Debug)]
pub struct FieldEngine {
    field: ParticleField,
    input: InputState,
    scene: SceneLayout,
    rng: SmallRng,
    clock: FrameClock,
    frame: Frame,
    physics: PhysicsConfig,
    render: RenderConfig,
    motion: MotionPreference,
    seed: u64,
    viewport_width: u32,
    viewport_height: u32,
}

impl FieldEngine {
    /// Start building an engine for a viewport of the given pixel size.
    pub fn builder(viewport_width: u32, viewport_height: u32) -> FieldBuilder {
        FieldBuilder::new(viewport_width, viewport_height)
    }

    /// Advance the field by `dt` seconds.
    ///
    /// Does nothing while paused or under reduced motion; the arrangement
    /// stays exactly as it was, down to the bit.
    pub fn tick(&mut self, dt: f32) {
        if self.clock.is_paused() || self.motion.is_reduced() {
            return;
        }
        self.input.decay(dt);
        let snapshot = self.input.snapshot();
        physics::step(
            &mut self.field,
            &snapshot,
            &self.scene,
            &self.physics,
            &mut self.rng,
        );
    }

    /// Measure a frame delta on the engine clock and tick once with it.
    ///
    /// This is the windowed runner's path; headless drivers call
    /// [`FieldEngine::tick`] with their own delta instead.
    pub fn advance(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.tick(dt);
        dt
    }

    /// Render the current arrangement into the engine's frame.
    pub fn render(&mut self) -> &Frame {
        let snapshot = self.input.snapshot();
        render::render(
            &mut self.frame,
            &self.field,
            &snapshot,
            &self.physics,
            &self.render,
        );
        &self.frame
    }

    /// Resize to a new viewport. The frame reallocates and the whole
    /// population respawns; particles carry no identity worth preserving.
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        self.frame.resize(viewport_width, viewport_height);
        self.field.resize(
            viewport_width as f32,
            viewport_height as f32,
            &mut self.rng,
        );
    }

    // ========== Input forwarding ==========

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.input.pointer_moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.input.pointer_left();
    }

    /// Record a new absolute scroll offset (e.g. wheel accumulation).
    pub fn scroll_to(&mut self, offset: f32) {
        self.input.scroll_to(offset);
    }

    // ========== Loop control ==========

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Whether the loop should keep scheduling frames. False while paused and
    /// under reduced motion, where one painted frame is the steady state.
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.clock.is_paused() && !self.motion.is_reduced()
    }

    /// Fix the clock delta for deterministic stepping.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.clock.set_fixed_delta(delta);
    }

    // ========== Accessors ==========

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[inline]
    pub fn scene(&self) -> &SceneLayout {
        &self.scene
    }

    /// Mutable scene access for live layout updates between ticks.
    #[inline]
    pub fn scene_mut(&mut self) -> &mut SceneLayout {
        &mut self.scene
    }

    #[inline]
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    #[inline]
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Open a window and run the field until closed.
    pub fn run(self) -> Result<(), EngineError> {
        crate::window::run(self)
    }
}
