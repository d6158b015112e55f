//! Color helpers: clamping, gamma correction and 8-bit packing.

use glam::DVec3;

/// Color type alias (RGB, nominally 0-1 but unclamped while accumulating)
pub type Color = DVec3;

/// Display gamma applied when converting to 8-bit.
pub const GAMMA: f64 = 2.2;

/// Clamp every channel to [0, 1].
///
/// NaN channels clamp to 0.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(clamp_01(color.x), clamp_01(color.y), clamp_01(color.z))
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    if x > 0.0 {
        x.min(1.0)
    } else {
        0.0
    }
}

/// Apply gamma correction (gamma = 2.2).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.powf(1.0 / GAMMA)
    } else {
        0.0
    }
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let color = clamp_color(color);
    let r = (255.0 * linear_to_gamma(color.x)) as u8;
    let g = (255.0 * linear_to_gamma(color.y)) as u8;
    let b = (255.0 * linear_to_gamma(color.z)) as u8;
    [r, g, b, 255]
}

/// Convert a color to a packed `0xRRGGBB` integer.
pub fn color_to_packed(color: Color) -> u32 {
    let [r, g, b, _] = color_to_rgba(color);
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
