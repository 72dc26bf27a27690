//! Health-to-color gradient
//!
//! Red to yellow over the lower half of the health range, then yellow
//! towards green over the upper half.

use sdl2::pixels::Color;

/// Color of the health text drawn on top of the bar
pub const HEALTH_TEXT_COLOR: Color = Color::RGB(86, 22, 12);

/// An RGB color with channels in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl HealthColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        HealthColor { r, g, b }
    }

    /// Converts to an opaque SDL2 color
    pub fn to_sdl(self) -> Color {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::RGB(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Maps a health fraction (0.0-1.0) to the bar color
///
/// At full health red only drops to 0.5, so the bar ends up yellow-green
/// rather than pure green.
pub fn health_color(fraction: f32) -> HealthColor {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };

    if fraction > 0.5 {
        HealthColor::new(1.0 - (fraction - 0.5), 1.0, 0.0)
    } else {
        HealthColor::new(1.0, fraction * 2.0, 0.0)
    }
}
