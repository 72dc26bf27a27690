//! Bitmap text for health numbers and the on-screen hints
//!
//! A 5x7 pixel font drawn with SDL2 rectangles. Glyphs can be scaled by any
//! positive factor; health numbers are usually drawn at a fractional scale
//! so they fit inside the bar.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use health_bars::ui::TextMeasure;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Glyph width plus one column of spacing
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// The 5x7 bitmap font
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl TextMeasure for BitmapFont {
    fn measure(&self, text: &str) -> (f32, f32) {
        let count = text.chars().count() as u32;
        if count == 0 {
            return (0.0, 0.0);
        }
        // No spacing after the last glyph
        ((count * ADVANCE - 1) as f32, GLYPH_HEIGHT as f32)
    }
}

impl BitmapFont {
    /// Draws `text` with its top-left corner at (`x`, `y`)
    ///
    /// Each font pixel covers the device pixels between its scaled start and
    /// end, so fractional scales leave no gaps between font pixels.
    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: f32,
    ) -> Result<(), String> {
        check_scale(scale)?;

        canvas.set_draw_color(color);

        for (i, c) in text.chars().enumerate() {
            let origin_col = i as u32 * ADVANCE;

            for (row, &pattern_row) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (pattern_row >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        let (left, width) = scaled_span(origin_col + col, scale);
                        let (top, height) = scaled_span(row as u32, scale);
                        canvas.fill_rect(Rect::new(x + left, y + top, width, height))?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Device-pixel start and length of font pixel `index` at `scale`
/// Rejects scales that would draw nothing or garbage
fn check_scale(scale: f32) -> Result<(), String> {
    if scale.is_nan() || scale <= 0.0 {
        Err(format!("Invalid text scale: {}", scale))
    } else {
        Ok(())
    }
}

fn scaled_span(index: u32, scale: f32) -> (i32, u32) {
    let start = (index as f32 * scale).floor() as i32;
    let end = ((index + 1) as f32 * scale).floor() as i32;
    (start, (end - start).max(1) as u32)
}

/// Draws text at a whole-number scale (1 = 5x7 pixel characters)
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    BitmapFont.draw(canvas, text, x, y, color, scale as f32)
}

/// 5x7 pattern for a character (1 = pixel on), case-insensitive
fn glyph(c: char) -> &'static [u8] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure() {
        assert_eq!(BitmapFont.measure("5/10"), (23.0, 7.0));
        assert_eq!(BitmapFont.measure("1"), (5.0, 7.0));
        assert_eq!(BitmapFont.measure(""), (0.0, 0.0));
    }

    #[test]
    fn test_scaled_span_whole_scale() {
        assert_eq!(scaled_span(0, 2.0), (0, 2));
        assert_eq!(scaled_span(3, 2.0), (6, 2));
    }

    #[test]
    fn test_scaled_span_fractional_scale_has_no_gaps() {
        let scale = 1.5;
        let mut expected_start = 0;
        for index in 0..10 {
            let (start, width) = scaled_span(index, scale);
            assert_eq!(start, expected_start);
            expected_start = start + width as i32;
        }
        assert_eq!(expected_start, 15);
    }

    #[test]
    fn test_scaled_span_small_scale_keeps_one_pixel() {
        assert_eq!(scaled_span(0, 0.4).1, 1);
    }

    #[test]
    fn test_check_scale() {
        assert!(check_scale(1.0).is_ok());
        assert!(check_scale(2.74).is_ok());
        assert!(check_scale(0.0).is_err());
        assert!(check_scale(-1.5).is_err());
        assert!(check_scale(f32::NAN).is_err());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('/').len(), GLYPH_HEIGHT as usize);
        assert_eq!(glyph('~'), glyph('\u{2603}'));
    }
}
