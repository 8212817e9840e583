//! Pointer and scroll input state.
//!
//! The embedder writes events into [`InputState`] between ticks; physics reads
//! an immutable [`FrameInput`] snapshot taken at the start of each tick. A tick
//! therefore never observes a half-applied update, and nothing here blocks.
//!
//! Scroll events carry an absolute offset (a page scroll position or a virtual
//! wheel accumulator); the tracker turns consecutive offsets into a velocity
//! plus direction, and decays the velocity once scrolling stops.

use glam::Vec2;

/// Reference period for scroll decay: velocity shrinks by
/// [`SCROLL_DECAY_FACTOR`] per this many seconds once scrolling stops.
const SCROLL_DECAY_INTERVAL: f32 = 0.05;
const SCROLL_DECAY_FACTOR: f32 = 0.9;
/// Below this the scroll velocity snaps to zero.
const SCROLL_REST_THRESHOLD: f32 = 0.1;

/// Pointer position and presence, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Vec2,
    /// False once the pointer leaves the surface; the last position is kept.
    pub active: bool,
}

/// Scroll velocity sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Magnitude of the most recent scroll movement, in pixels per sample.
    pub velocity: f32,
    /// +1.0 scrolling down, -1.0 scrolling up, 0.0 before the first scroll.
    pub direction: f32,
}

/// Immutable per-tick input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub pointer: PointerState,
    pub scroll: ScrollState,
}

/// Live input state, mutated by events between ticks.
#[derive(Debug)]
pub struct InputState {
    pointer: PointerState,
    scroll: ScrollState,
    last_scroll_offset: f32,
    /// Seconds of quiet required before scroll velocity starts decaying.
    decay_holdoff: f32,
}

impl InputState {
    /// Input state for a viewport of the given pixel size.
    ///
    /// The pointer starts inactive at the viewport center, so position-based
    /// effects read from the middle until the first real pointer event.
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            pointer: PointerState {
                position: Vec2::new(viewport_w * 0.5, viewport_h * 0.5),
                active: false,
            },
            scroll: ScrollState::default(),
            last_scroll_offset: 0.0,
            decay_holdoff: 0.0,
        }
    }

    /// Record a pointer position in viewport pixels.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.position = Vec2::new(x, y);
        self.pointer.active = true;
    }

    /// The pointer left the surface. Its last position is retained so the
    /// render-side influence fades from where it was, not from the origin.
    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    /// Record an absolute scroll offset (e.g. a page scroll position).
    ///
    /// Velocity is the magnitude of the change since the previous offset,
    /// direction its sign. Each sample re-arms the decay hold-off.
    pub fn scroll_to(&mut self, offset: f32) {
        let delta = offset - self.last_scroll_offset;
        self.scroll.velocity = delta.abs();
        if delta != 0.0 {
            self.scroll.direction = delta.signum();
        }
        self.last_scroll_offset = offset;
        self.decay_holdoff = SCROLL_DECAY_INTERVAL;
    }

    /// Advance scroll decay by `dt` seconds.
    ///
    /// While scroll events keep arriving the hold-off keeps the velocity
    /// fresh; once they stop, velocity decays exponentially and snaps to zero
    /// below the rest threshold.
    pub fn decay(&mut self, dt: f32) {
        if self.scroll.velocity == 0.0 {
            return;
        }
        if self.decay_holdoff > 0.0 {
            self.decay_holdoff -= dt;
            return;
        }
        self.scroll.velocity *= SCROLL_DECAY_FACTOR.powf(dt / SCROLL_DECAY_INTERVAL);
        if self.scroll.velocity < SCROLL_REST_THRESHOLD {
            self.scroll.velocity = 0.0;
        }
    }

    /// Take the immutable snapshot physics reads for one tick.
    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            scroll: self.scroll,
        }
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[inline]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }
}
