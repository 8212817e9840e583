//! Scene layout: the rectangles the field reacts to.
//!
//! The embedder registers the bounding boxes of its content in viewport
//! coordinates. Large blocks become weak attractors that gently gather
//! particles; rectangles registered as interactive make nearby particles glow.
//! The engine only ever reads the layout, once per tick; keeping it current as
//! the host moves things around is the embedder's job.

use glam::Vec2;

/// Minimum size (both axes, exclusive) for a plain content rect to register
/// as an attractor. Smaller blocks are ignored.
pub const ATTRACTOR_MIN_SIZE: f32 = 200.0;

/// Axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }
}

/// How a registered rectangle participates in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Particles inside the attraction radius drift toward the center.
    Attractor,
    /// Particles near the center pick up a glow and opacity boost.
    Interactive,
}

/// The set of layout rectangles the physics step consults.
#[derive(Debug, Clone, Default)]
pub struct SceneLayout {
    attractors: Vec<Vec2>,
    interactives: Vec<Rect>,
}

impl SceneLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every registered rectangle, e.g. ahead of a layout rebuild.
    pub fn clear(&mut self) {
        self.attractors.clear();
        self.interactives.clear();
    }

    /// Register a rectangle with an explicit role.
    pub fn add_element(&mut self, rect: Rect, kind: ElementKind) {
        match kind {
            ElementKind::Attractor => self.attractors.push(rect.center()),
            ElementKind::Interactive => self.interactives.push(rect),
        }
    }

    /// Register a plain content rectangle; only blocks larger than
    /// [`ATTRACTOR_MIN_SIZE`] on both axes become attractors.
    pub fn add_content(&mut self, rect: Rect) {
        if rect.size.x > ATTRACTOR_MIN_SIZE && rect.size.y > ATTRACTOR_MIN_SIZE {
            self.attractors.push(rect.center());
        }
    }

    /// Register an interactive rectangle regardless of size.
    pub fn add_interactive(&mut self, rect: Rect) {
        self.interactives.push(rect);
    }

    /// Attractor centers in viewport coordinates.
    #[inline]
    pub fn attractors(&self) -> &[Vec2] {
        &self.attractors
    }

    /// Interactive rects in viewport coordinates.
    #[inline]
    pub fn interactives(&self) -> &[Rect] {
        &self.interactives
    }

    /// Distance from `pos` to the nearest interactive rect center, or `None`
    /// when no interactive rects are registered. `pos` must be in the same
    /// coordinate space as the registered rects.
    pub fn nearest_interactive_distance(&self, pos: Vec2) -> Option<f32> {
        self.interactives
            .iter()
            .map(|rect| pos.distance(rect.center()))
            .min_by(|a, b| a.total_cmp(b))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attractors.is_empty() && self.interactives.is_empty()
    }
}
