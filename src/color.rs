//! Color handling for the glow palette.
//!
//! Particles are tinted in HSL space (blue through violet hues with fixed
//! saturation and lightness); this module converts those to the packed RGBA
//! bytes the software renderer writes.

/// A packed RGBA color. 8 bits per channel, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from HSL plus alpha.
    ///
    /// * `hue` - degrees, wraps (negative values allowed)
    /// * `saturation` / `lightness` - clamped to 0.0..=1.0
    /// * `alpha` - clamped to 0.0..=1.0
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Self {
            r: channel_byte(r),
            g: channel_byte(g),
            b: channel_byte(b),
            a: channel_byte(alpha.clamp(0.0, 1.0)),
        }
    }
}

fn channel_byte(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Convert HSL to RGB channels in 0.0..=1.0.
///
/// * `hue` - degrees (wraps: red -> yellow -> green -> cyan -> blue -> magenta -> red)
/// * `saturation` - 0.0 (gray) to 1.0 (vivid)
/// * `lightness` - 0.0 (black) to 1.0 (white)
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}
