//! Scene rendering for the demo host
//!
//! - `render_with_depth_sorting()`: draws monsters back to front (painter's algorithm)
//! - `CanvasSurface`: the SDL2 canvas as a health bar `DrawSurface`
//! - `create_border_texture()`: procedural border used when the PNG asset is missing
//!
//! Health bars are drawn after all monsters so they always sit on top.

use crate::creatures::Monster;
use crate::text::BitmapFont;
use health_bars::ui::{BarRect, DrawSurface};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};

/// Native size of the built-in border texture
pub const BORDER_SIZE: (u32, u32) = (24, 7);

/// Renders monsters sorted by the Y-coordinate of their base
///
/// Monsters with smaller Y render first (farther back in the scene).
pub fn render_with_depth_sorting(
    canvas: &mut Canvas<Window>,
    monsters: &[Monster],
    pixel_zoom: u32,
) -> Result<(), String> {
    let mut sorted: Vec<&Monster> = monsters.iter().collect();
    sorted.sort_by_key(|monster| monster.depth_y(pixel_zoom));

    for monster in sorted {
        monster.render(canvas, pixel_zoom)?;
    }

    Ok(())
}

/// Draws health bar commands onto an SDL2 canvas
pub struct CanvasSurface<'a, 't> {
    pub canvas: &'a mut Canvas<Window>,
    pub border: &'a Texture<'t>,
    pub font: &'a BitmapFont,
}

impl DrawSurface for CanvasSurface<'_, '_> {
    fn fill_rect(&mut self, rect: BarRect, color: Color) -> Result<(), String> {
        match rect.to_sdl() {
            Some(rect) => {
                self.canvas.set_draw_color(color);
                self.canvas.fill_rect(rect)
            }
            None => Ok(()),
        }
    }

    fn draw_border(&mut self, rect: BarRect) -> Result<(), String> {
        match rect.to_sdl() {
            Some(rect) => self.canvas.copy(self.border, None, rect),
            None => Ok(()),
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: f32,
        color: Color,
    ) -> Result<(), String> {
        self.font.draw(self.canvas, text, x, y, color, scale)
    }
}

/// Builds a border texture: dark frame, transparent inner bar area
pub fn create_border_texture(
    texture_creator: &TextureCreator<WindowContext>,
) -> Result<Texture<'_>, String> {
    let (width, height) = BORDER_SIZE;
    let mut surface = Surface::new(width, height, PixelFormatEnum::RGBA8888)?;

    let frame = Color::RGB(62, 38, 26);
    let highlight = Color::RGB(150, 104, 64);

    surface.fill_rect(None, frame)?;
    surface.fill_rect(Rect::new(1, 1, width - 2, height - 2), highlight)?;
    // Leave the inner bar area (2 px margin) see-through
    surface.fill_rect(Rect::new(2, 2, width - 4, height - 4), Color::RGBA(0, 0, 0, 0))?;

    let mut texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    texture.set_blend_mode(sdl2::render::BlendMode::Blend);
    Ok(texture)
}
