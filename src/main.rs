use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

mod creatures;
mod render;
mod text;

use creatures::{initial_monsters, spawn_pair, Monster};
use health_bars::ui::HealthBarOverlay;
use health_bars::{CreatureSnapshot, HealthBarsConfig};
use render::{create_border_texture, render_with_depth_sorting, CanvasSurface};
use std::path::PathBuf;
use std::time::Instant;
use text::{draw_simple_text, BitmapFont};

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;
/// Device pixels per native texture pixel
const PIXEL_ZOOM: u32 = 2;

const BORDER_TEXTURE_PATH: &str = "assets/healthbar_border.png";

/// Damage dealt by the hit key; varied per monster so bars spread out
const HIT_DAMAGE: [i32; 5] = [3, 5, 4, 7, 2];
/// How far the overheal key pushes health past max health
const OVERHEAL: i32 = 5;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            max_scale_w.min(max_scale_h).clamp(1, 4) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 2x scale", e);
            2
        }
    }
}

/// Config path from the first argument, or the per-user default
fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(HealthBarsConfig::default_path)
}

/// Loads the config once for the session, falling back to defaults when the
/// file is unreadable
fn load_config() -> HealthBarsConfig {
    let path = config_path();
    log::debug!("Loading config from {}", path.display());

    match HealthBarsConfig::load_or_create(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config {}: {}, using defaults", path.display(), e);
            HealthBarsConfig::default()
        }
    }
}

/// Crosshair at the player (cursor) position
fn draw_player_marker(
    canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
    x: i32,
    y: i32,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(240, 240, 255));
    canvas.fill_rect(Rect::new(x - 6, y - 1, 13, 3))?;
    canvas.fill_rect(Rect::new(x - 1, y - 6, 3, 13))?;
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();
    log::info!("Starting health bars");

    let config = load_config();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;
    log::info!("Monitor scale: {}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Health Bars", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps the scene pixel-perfect and maps mouse events too
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    log::debug!("Loading textures");
    let border_texture = match texture_creator.load_texture(BORDER_TEXTURE_PATH) {
        Ok(texture) => texture,
        Err(e) => {
            log::info!("No border texture at {} ({}), using the built-in one", BORDER_TEXTURE_PATH, e);
            create_border_texture(&texture_creator)?
        }
    };
    let border_query = border_texture.query();

    let mut overlay = HealthBarOverlay::new(config, border_query.width, border_query.height)?;
    let font = BitmapFont;

    let mut monsters: Vec<Monster> = initial_monsters();
    let mut player = ((GAME_WIDTH / 2) as i32, (GAME_HEIGHT - 30) as i32);
    let mut last_frame = Instant::now();

    println!("Controls:");
    println!("Mouse - Move player (monsters notice you when close)");
    println!("Space - Hit every monster");
    println!("S - Spawn monsters at the cursor");
    println!("R - Restore health");
    println!("H - Overheal (health above max)");
    println!("ESC - Quit");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::MouseMotion { x, y, .. } => {
                    player = (x, y);
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => {
                    for (i, monster) in monsters.iter_mut().enumerate() {
                        monster.take_damage(HIT_DAMAGE[i % HIT_DAMAGE.len()]);
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::S),
                    ..
                } => {
                    monsters.extend(spawn_pair(player.0 as f32, player.1 as f32));
                    log::info!("Spawned monsters at ({}, {})", player.0, player.1);
                }
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => monsters.iter_mut().for_each(|monster| monster.heal(0)),
                Event::KeyDown {
                    keycode: Some(Keycode::H),
                    ..
                } => monsters.iter_mut().for_each(|monster| monster.heal(OVERHEAL)),
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for monster in &mut monsters {
            monster.update(dt, player.0 as f32, player.1 as f32);
        }
        monsters.retain(Monster::is_alive);

        canvas.set_draw_color(Color::RGB(48, 40, 36));
        canvas.clear();

        render_with_depth_sorting(&mut canvas, &monsters, PIXEL_ZOOM)?;
        draw_player_marker(&mut canvas, player.0, player.1)?;

        // Health bars go on top of the finished world
        let snapshots: Vec<CreatureSnapshot> = monsters.iter().map(Monster::snapshot).collect();
        let bars = overlay.render_frame(&snapshots, PIXEL_ZOOM, Some(&font));
        let mut surface = CanvasSurface {
            canvas: &mut canvas,
            border: &border_texture,
            font: &font,
        };
        overlay.draw_frame(&bars, &mut surface);

        draw_simple_text(
            &mut canvas,
            "SPACE HIT  S SPAWN  R HEAL  H OVERHEAL",
            8,
            (GAME_HEIGHT - 12) as i32,
            Color::RGB(140, 140, 150),
            1,
        )?;

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
