//! Software renderer: particles become radial-gradient glows in an RGBA8
//! frame.
//!
//! The frame covers the viewport; particles live in the padded field space, so
//! draw positions are shifted back by the wrap padding and discs straddling an
//! edge paint only their visible part. Particles paint in ascending depth
//! order, deeper ones first, so the shallow layer occludes and the field reads
//! as parallax even though nothing here knows about cameras.

use glam::Vec2;

use crate::color::Rgba8;
use crate::error::CaptureError;
use crate::input::FrameInput;
use crate::particle::{ParticleField, FIELD_PADDING};
use crate::physics::PhysicsConfig;

/// An RGBA8 framebuffer, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, `width * height * 4` of them.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reallocate for a new viewport size. Contents become transparent black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize((width * height * 4) as usize, 0);
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba8) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
            pixel[3] = color.a;
        }
    }

    /// Read one pixel. `x` and `y` must be inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = ((y * self.width + x) * 4) as usize;
        Rgba8::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Source-over blend `color` onto the pixel at `(x, y)`; out-of-bounds
    /// coordinates are ignored.
    ///
    /// Both sides carry straight alpha, so the blended channels are divided by
    /// the resulting coverage; painting onto a fully transparent pixel leaves
    /// the source color intact instead of darkening it.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height || color.a == 0 {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let sa = u32::from(color.a);
        let da = u32::from(self.data[i + 3]);
        let inv = 255 - sa;
        // Coverage in 1/255^2 fixed point; sa >= 1 keeps it nonzero.
        let coverage = sa * 255 + da * inv;
        let blend = |src: u8, dst: u8| -> u8 {
            ((u32::from(src) * sa * 255 + u32::from(dst) * da * inv + coverage / 2) / coverage)
                as u8
        };
        self.data[i] = blend(color.r, self.data[i]);
        self.data[i + 1] = blend(color.g, self.data[i + 1]);
        self.data[i + 2] = blend(color.b, self.data[i + 2]);
        self.data[i + 3] = ((coverage + 127) / 255) as u8;
    }

    /// Save the frame as a PNG.
    pub fn save_png(&self, path: &str) -> Result<(), CaptureError> {
        image::save_buffer(
            path,
            &self.data,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}

/// Renderer tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Frame clear color. Transparent by default so the presenter can blend
    /// the field over its own background.
    pub background: Rgba8,
    /// Saturation of every glow.
    pub saturation: f32,
    /// Lightness of every glow.
    pub lightness: f32,
    /// Maximum additive hue shift at the pointer itself.
    pub hue_shift_max: f32,
    /// Glow radius multiplier for particles near interactive rects.
    pub glow_boost: f32,
    /// Pointer influence extent for the hue shift, in units of the physics
    /// pointer radius.
    pub influence_radius_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Rgba8::TRANSPARENT,
            saturation: 0.75,
            lightness: 0.75,
            hue_shift_max: 20.0,
            glow_boost: 1.5,
            influence_radius_scale: 2.0,
        }
    }
}

/// Paint the whole field into `frame`.
///
/// Depth order is stable: equal depths keep their index order, so repeated
/// renders of an unchanged field produce identical frames.
///
/// The hue tint keys off the pointer's last position alone; presence only
/// gates the physics forces, so the tint holds where the pointer was.
pub fn render(
    frame: &mut Frame,
    field: &ParticleField,
    input: &FrameInput,
    physics: &PhysicsConfig,
    config: &RenderConfig,
) {
    frame.clear(config.background);

    let particles = field.particles();
    let mut order: Vec<usize> = (0..particles.len()).collect();
    order.sort_by(|&a, &b| particles[a].depth.total_cmp(&particles[b].depth));

    let pad = Vec2::splat(FIELD_PADDING);
    let pointer_pos = input.pointer.position + pad;
    let influence_extent = physics.pointer_radius * config.influence_radius_scale;

    for &index in &order {
        let p = &particles[index];
        let influence = if influence_extent > 0.0 {
            (1.0 - p.pos.distance(pointer_pos) / influence_extent).max(0.0)
        } else {
            0.0
        };
        let hue = p.hue + influence * config.hue_shift_max;
        let glow = if p.near_interactive { config.glow_boost } else { 1.0 };
        draw_glow(frame, p.pos - pad, p.radius * glow, hue, p.opacity, config);
    }
}

/// Rasterize one glow disc centered at `center` (frame coordinates).
///
/// Alpha falls linearly from the particle opacity at the center to half of it
/// at the disc edge; the disc covers the inner half of the conceptual
/// gradient, which keeps the glow tight instead of washing out neighbors.
fn draw_glow(
    frame: &mut Frame,
    center: Vec2,
    disc_radius: f32,
    hue: f32,
    opacity: f32,
    config: &RenderConfig,
) {
    if disc_radius <= 0.0 || frame.width() == 0 || frame.height() == 0 {
        return;
    }

    let x0 = (center.x - disc_radius).floor().max(0.0) as u32;
    let x1 = (center.x + disc_radius).ceil().min((frame.width() - 1) as f32) as u32;
    let y0 = (center.y - disc_radius).floor().max(0.0) as u32;
    let y1 = (center.y + disc_radius).ceil().min((frame.height() - 1) as f32) as u32;

    let gradient_extent = 2.0 * disc_radius;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let dist = pixel_center.distance(center);
            if dist > disc_radius {
                continue;
            }
            let alpha = opacity * (1.0 - dist / gradient_extent);
            let color = Rgba8::from_hsla(hue, config.saturation, config.lightness, alpha);
            frame.blend_pixel(x, y, color);
        }
    }
}
