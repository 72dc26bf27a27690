//! Health bar overlay drawn above hostile creatures
//!
//! Once per frame the host passes its creature snapshots to
//! [`HealthBarOverlay::render_frame`], which returns the [`DrawCommand`]s for
//! each visible creature. [`HealthBarOverlay::draw_frame`] then replays those
//! commands against any [`DrawSurface`] (the SDL2 canvas in the game, a
//! recorder in tests).
//!
//! Nothing about the bars is kept between frames. The only state the overlay
//! carries is the configuration, the border texture size and a memory of
//! which diagnostics were already logged, so a misconfigured creature type
//! doesn't flood the log every frame.
//!
//! # Example
//!
//! ```ignore
//! let mut overlay = HealthBarOverlay::new(config, border_width, border_height)?;
//!
//! // In the render loop, after the world is drawn
//! let bars = overlay.render_frame(&snapshots, pixel_zoom, Some(&font));
//! overlay.draw_frame(&bars, &mut surface);
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::collections::HashSet;
use std::fmt;

use super::color::{health_color, HealthColor, HEALTH_TEXT_COLOR};
use super::offset::resolve_offset;
use super::visibility::check_visibility;
use crate::config::HealthBarsConfig;
use crate::creature::CreatureSnapshot;

/// Margin between the border texture's edge and the inner bar, in texture pixels
pub const BAR_MARGIN: u32 = 2;

/// Text may overshoot the inner bar by this factor
const TEXT_FIT_TOLERANCE: f32 = 1.2;

/// An axis-aligned rectangle in device pixels
///
/// Unlike `sdl2::rect::Rect` a zero width is allowed (an empty health bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BarRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        BarRect { x, y, width, height }
    }

    /// SDL2 rectangle, or `None` if there is nothing to draw
    pub fn to_sdl(self) -> Option<Rect> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(Rect::new(self.x, self.y, self.width, self.height))
        }
    }
}

/// One draw call issued by the overlay
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid colored inner bar
    Fill { rect: BarRect, color: HealthColor },
    /// Border texture stamped untinted
    Border { rect: BarRect },
    /// Health numbers, scaled uniformly from the measured 1x size
    Text {
        text: String,
        x: i32,
        y: i32,
        scale: f32,
        color: Color,
    },
}

/// Draw commands for one creature's bar
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureBar {
    pub type_name: String,
    /// Fill, border, then the optional health text
    pub commands: Vec<DrawCommand>,
}

/// Measures text at 1x scale
pub trait TextMeasure {
    /// Width and height of `text` in pixels
    fn measure(&self, text: &str) -> (f32, f32);
}

/// Something health bars can be drawn onto
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: BarRect, color: Color) -> Result<(), String>;

    /// Stamps the border texture into `rect` without tinting
    fn draw_border(&mut self, rect: BarRect) -> Result<(), String>;

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: f32,
        color: Color,
    ) -> Result<(), String>;
}

/// Geometry of one creature's bar for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub border: BarRect,
    pub fill: BarRect,
    /// Health fraction after clamping max health
    pub fraction: f32,
    /// Resolved vertical offset in texture pixels
    pub offset: i32,
    pub health: i32,
    pub max_health: i32,
}

/// Why a single creature's bar couldn't be laid out
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Sprite has zero width or height
    EmptySprite,
    /// Pixel zoom of zero
    ZeroPixelZoom,
    /// Coordinates don't fit in screen space
    OutOfRange,
    /// Text measured as zero-sized
    EmptyText(String),
    /// Health numbers are enabled but the host gave no way to measure text
    NoTextMeasure,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::EmptySprite => write!(f, "sprite has no size"),
            LayoutError::ZeroPixelZoom => write!(f, "pixel zoom is zero"),
            LayoutError::OutOfRange => write!(f, "bar position is out of range"),
            LayoutError::EmptyText(text) => write!(f, "text '{}' measured as empty", text),
            LayoutError::NoTextMeasure => write!(f, "no text measurement available"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors building the overlay
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// The border texture leaves no room for the inner bar
    BorderTooSmall { width: u32, height: u32 },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OverlayError::BorderTooSmall { width, height } => write!(
                f,
                "Border texture {}x{} is too small, both sides must exceed {} pixels",
                width,
                height,
                BAR_MARGIN * 2
            ),
        }
    }
}

impl std::error::Error for OverlayError {}

impl From<OverlayError> for String {
    fn from(error: OverlayError) -> Self {
        error.to_string()
    }
}

/// Width of the inner bar in texture pixels for a health fraction
///
/// Pixel-aligned bars snap down to whole texture pixels but keep at least one
/// pixel, so the bar never vanishes entirely.
pub fn fill_width(inner_width: u32, fraction: f32, pixel_aligned: bool) -> f32 {
    let width = inner_width as f32 * fraction;
    if pixel_aligned {
        (width.floor() as i32).max(1) as f32
    } else {
        width
    }
}

/// Draws health bars above visible creatures
pub struct HealthBarOverlay {
    config: HealthBarsConfig,
    /// Border texture size in texture pixels
    border_width: u32,
    border_height: u32,
    /// (creature type, diagnostic) pairs already logged
    reported: HashSet<(String, &'static str)>,
}

impl HealthBarOverlay {
    /// Creates an overlay for a border texture of the given native size
    pub fn new(
        config: HealthBarsConfig,
        border_width: u32,
        border_height: u32,
    ) -> Result<Self, OverlayError> {
        if border_width <= BAR_MARGIN * 2 || border_height <= BAR_MARGIN * 2 {
            return Err(OverlayError::BorderTooSmall {
                width: border_width,
                height: border_height,
            });
        }

        Ok(HealthBarOverlay {
            config,
            border_width,
            border_height,
            reported: HashSet::new(),
        })
    }

    /// Inner bar width in texture pixels
    pub fn inner_width(&self) -> u32 {
        self.border_width - BAR_MARGIN * 2
    }

    /// Inner bar height in texture pixels
    pub fn inner_height(&self) -> u32 {
        self.border_height - BAR_MARGIN * 2
    }

    /// Computes border and fill rectangles for one creature
    pub fn layout(
        &self,
        creature: &CreatureSnapshot,
        pixel_zoom: u32,
    ) -> Result<BarLayout, LayoutError> {
        if pixel_zoom == 0 {
            return Err(LayoutError::ZeroPixelZoom);
        }
        if creature.sprite_width == 0 || creature.sprite_height == 0 {
            return Err(LayoutError::EmptySprite);
        }

        let zoom = i64::from(pixel_zoom);
        let offset = resolve_offset(&creature.type_name, &self.config);

        // Sprite bounding box; the anchor sits half a sprite below the top edge
        let sprite_width = i64::from(creature.sprite_width) * zoom;
        let sprite_height = i64::from(creature.sprite_height) * zoom;
        let sprite_x = i64::from(creature.x);
        let sprite_y = i64::from(creature.y) - sprite_height / 2;
        let center_x = sprite_x + sprite_width / 2;

        let border_width = i64::from(self.border_width) * zoom;
        let border_height = i64::from(self.border_height) * zoom;
        let border_x = center_x - border_width / 2;
        let border_y = sprite_y + (i64::from(offset) - i64::from(self.border_height)) * zoom;

        let (health, max_health) = creature.clamped_health();
        let fraction = creature.health_fraction();

        let margin = i64::from(BAR_MARGIN) * zoom;
        let fill_width_px =
            fill_width(self.inner_width(), fraction, self.config.pixel_aligned) * pixel_zoom as f32;

        let border = BarRect::new(
            to_screen(border_x)?,
            to_screen(border_y)?,
            to_size(border_width)?,
            to_size(border_height)?,
        );
        let fill = BarRect::new(
            to_screen(border_x + margin)?,
            to_screen(border_y + margin)?,
            fill_width_px as u32,
            to_size(i64::from(self.inner_height()) * zoom)?,
        );

        Ok(BarLayout {
            border,
            fill,
            fraction,
            offset,
            health,
            max_health,
        })
    }

    /// Builds the health number text centered on the inner bar
    pub fn text_command(
        &self,
        layout: &BarLayout,
        measure: &dyn TextMeasure,
        pixel_zoom: u32,
    ) -> Result<DrawCommand, LayoutError> {
        let text = format!("{}/{}", layout.health, layout.max_health);
        let (text_width, text_height) = measure.measure(&text);
        if !(text_width > 0.0 && text_height > 0.0) {
            return Err(LayoutError::EmptyText(text));
        }

        let inner_width = (self.inner_width() * pixel_zoom) as f32;
        let inner_height = (self.inner_height() * pixel_zoom) as f32;

        let fit_width = inner_width * TEXT_FIT_TOLERANCE / text_width;
        let fit_height = inner_height * TEXT_FIT_TOLERANCE / text_height;
        let scale = fit_width.min(fit_height);

        let offset_left = ((inner_width - text_width * scale) / 2.0) as i32;
        let offset_top = ((inner_height - text_height * scale) / 2.0) as i32;

        Ok(DrawCommand::Text {
            text,
            x: layout.fill.x + offset_left,
            y: layout.fill.y + offset_top,
            scale,
            color: HEALTH_TEXT_COLOR,
        })
    }

    /// Computes the draw commands for every visible creature this frame
    ///
    /// A creature that can't be laid out is skipped; the others are still drawn.
    pub fn render_frame(
        &mut self,
        creatures: &[CreatureSnapshot],
        pixel_zoom: u32,
        measure: Option<&dyn TextMeasure>,
    ) -> Vec<CreatureBar> {
        let mut bars = Vec::with_capacity(creatures.len());

        for creature in creatures {
            let type_name = creature.type_name.as_str();

            let visibility = check_visibility(creature);
            if let Some(flag) = visibility.missing_flag {
                if self.first_report(type_name, flag) {
                    log::warn!(
                        "{} has no '{}' state, falling back to the invisibility check",
                        type_name,
                        flag
                    );
                }
            }
            if !visibility.visible {
                continue;
            }

            if self.config.type_offset(type_name).is_none() && self.first_report(type_name, "offset")
            {
                log::debug!(
                    "Monster type {} not found in config, using offset 0. \
                     Add it to type_offsets to adjust its health bar.",
                    type_name
                );
            }

            let layout = match self.layout(creature, pixel_zoom) {
                Ok(layout) => layout,
                Err(e) => {
                    if self.first_report(type_name, "layout") {
                        log::warn!("Skipping health bar for {}: {}", type_name, e);
                    }
                    continue;
                }
            };

            let mut commands = vec![
                DrawCommand::Fill {
                    rect: layout.fill,
                    color: health_color(layout.fraction),
                },
                DrawCommand::Border {
                    rect: layout.border,
                },
            ];

            if self.config.show_health_numbers {
                let text = match measure {
                    Some(measure) => self.text_command(&layout, measure, pixel_zoom),
                    None => Err(LayoutError::NoTextMeasure),
                };
                match text {
                    Ok(command) => commands.push(command),
                    Err(e) => {
                        if self.first_report(type_name, "text") {
                            log::warn!("Skipping health text for {}: {}", type_name, e);
                        }
                    }
                }
            }

            bars.push(CreatureBar {
                type_name: type_name.to_string(),
                commands,
            });
        }

        bars
    }

    /// Replays a frame's bars onto a surface
    ///
    /// Failed draws are skipped and logged once per creature type. Returns the
    /// number of failures.
    pub fn draw_frame(&mut self, bars: &[CreatureBar], surface: &mut dyn DrawSurface) -> usize {
        let mut failures = 0;

        for bar in bars {
            for command in &bar.commands {
                let result = match command {
                    DrawCommand::Fill { rect, color } => surface.fill_rect(*rect, color.to_sdl()),
                    DrawCommand::Border { rect } => surface.draw_border(*rect),
                    DrawCommand::Text {
                        text,
                        x,
                        y,
                        scale,
                        color,
                    } => surface.draw_text(text, *x, *y, *scale, *color),
                };

                if let Err(e) = result {
                    if self.first_report(&bar.type_name, "draw") {
                        log::warn!("Health bar draw failed for {}: {}", bar.type_name, e);
                    }
                    failures += 1;
                }
            }
        }

        failures
    }

    /// Records a diagnostic, returning true the first time it is seen
    fn first_report(&mut self, type_name: &str, what: &'static str) -> bool {
        self.reported.insert((type_name.to_string(), what))
    }
}

fn to_screen(value: i64) -> Result<i32, LayoutError> {
    i32::try_from(value).map_err(|_| LayoutError::OutOfRange)
}

fn to_size(value: i64) -> Result<u32, LayoutError> {
    u32::try_from(value).map_err(|_| LayoutError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{LevelFilter, Log, Metadata, Record};
    use std::collections::HashMap;
    use std::sync::{Mutex, Once};

    /// Keeps every log line so tests can count diagnostics
    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        lines: Mutex::new(Vec::new()),
    };

    fn capture_logs() {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
    }

    /// Log lines containing `needle`; tests use distinct type names so
    /// parallel tests don't count each other's lines
    fn logged(needle: &str) -> usize {
        LOGGER
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    // 24x8 border leaves a 20x4 inner bar
    const BORDER_WIDTH: u32 = 24;
    const BORDER_HEIGHT: u32 = 8;

    /// Fixed-size glyphs: 6 px per character, 7 px tall
    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn measure(&self, text: &str) -> (f32, f32) {
            (text.chars().count() as f32 * 6.0, 7.0)
        }
    }

    struct EmptyMeasure;

    impl TextMeasure for EmptyMeasure {
        fn measure(&self, _text: &str) -> (f32, f32) {
            (0.0, 0.0)
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
        fail_borders: bool,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_rect(&mut self, rect: BarRect, color: Color) -> Result<(), String> {
            self.calls.push(format!("fill {:?} {:?}", rect, color));
            Ok(())
        }

        fn draw_border(&mut self, rect: BarRect) -> Result<(), String> {
            if self.fail_borders {
                return Err("texture lost".to_string());
            }
            self.calls.push(format!("border {:?}", rect));
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            _scale: f32,
            _color: Color,
        ) -> Result<(), String> {
            self.calls.push(format!("text {} {} {}", text, x, y));
            Ok(())
        }
    }

    fn config(offsets: &[(&str, i32)]) -> HealthBarsConfig {
        HealthBarsConfig {
            pixel_aligned: true,
            health_bar_offset: 0,
            type_offsets: offsets
                .iter()
                .map(|(name, offset)| (name.to_string(), *offset))
                .collect::<HashMap<_, _>>(),
            show_health_numbers: false,
        }
    }

    fn overlay(config: HealthBarsConfig) -> HealthBarOverlay {
        HealthBarOverlay::new(config, BORDER_WIDTH, BORDER_HEIGHT).unwrap()
    }

    fn noticed_bat(health: i32, max_health: i32) -> CreatureSnapshot {
        let mut bat = CreatureSnapshot::new("Bat", 100, 200, 16, 24, health, max_health);
        bat.noticed_player = Some(true);
        bat
    }

    #[test]
    fn test_border_too_small() {
        let result = HealthBarOverlay::new(HealthBarsConfig::default(), 4, 8);
        assert_eq!(
            result.err(),
            Some(OverlayError::BorderTooSmall {
                width: 4,
                height: 8
            })
        );
    }

    #[test]
    fn test_inner_size() {
        let overlay = overlay(config(&[]));
        assert_eq!(overlay.inner_width(), 20);
        assert_eq!(overlay.inner_height(), 4);
    }

    #[test]
    fn test_fill_width_pixel_aligned() {
        assert_eq!(fill_width(20, 0.3, true), 6.0);
        assert_eq!(fill_width(20, 0.001, true), 1.0);
        assert_eq!(fill_width(20, 0.0, true), 1.0);
        assert_eq!(fill_width(20, 1.0, true), 20.0);
    }

    #[test]
    fn test_fill_width_continuous() {
        assert_eq!(fill_width(20, 0.25, false), 5.0);
        assert_eq!(fill_width(20, 0.5, false), 10.0);
        assert_eq!(fill_width(20, 0.0, false), 0.0);
    }

    #[test]
    fn test_bat_layout() {
        let overlay = overlay(config(&[("Bat", 9)]));
        let layout = overlay.layout(&noticed_bat(5, 10), 4).unwrap();

        assert_eq!(layout.fraction, 0.5);
        assert_eq!(layout.offset, 9);
        // Sprite box: x=100, y=200-48=152, w=64 -> center 132
        assert_eq!(layout.border, BarRect::new(84, 156, 96, 32));
        // 2 px margin * 4, fill = floor(20 * 0.5) * 4
        assert_eq!(layout.fill, BarRect::new(92, 164, 40, 16));
    }

    #[test]
    fn test_bat_frame_end_to_end() {
        let mut overlay = overlay(config(&[("Bat", 9)]));
        let bars = overlay.render_frame(&[noticed_bat(5, 10)], 4, None);

        assert_eq!(
            bars,
            vec![CreatureBar {
                type_name: "Bat".to_string(),
                commands: vec![
                    DrawCommand::Fill {
                        rect: BarRect::new(92, 164, 40, 16),
                        color: HealthColor::new(1.0, 1.0, 0.0),
                    },
                    DrawCommand::Border {
                        rect: BarRect::new(84, 156, 96, 32),
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_health_above_max_renders_full() {
        let overlay = overlay(config(&[]));
        let layout = overlay.layout(&noticed_bat(15, 10), 1).unwrap();
        assert_eq!(layout.fraction, 1.0);
        assert_eq!(layout.max_health, 15);
        assert_eq!(layout.fill.width, 20);
    }

    #[test]
    fn test_zero_max_health() {
        let mut cfg = config(&[]);
        cfg.pixel_aligned = false;
        let overlay = overlay(cfg);
        let layout = overlay.layout(&noticed_bat(0, 0), 4).unwrap();
        assert_eq!(layout.fraction, 0.0);
        assert_eq!(layout.fill.width, 0);
        assert_eq!(layout.fill.to_sdl(), None);
    }

    #[test]
    fn test_continuous_fill_truncates_device_pixels() {
        let mut cfg = config(&[]);
        cfg.pixel_aligned = false;
        let overlay = overlay(cfg);
        // 20 * (1/3) * 4 = 26.67 device px
        let layout = overlay.layout(&noticed_bat(1, 3), 4).unwrap();
        assert_eq!(layout.fill.width, 26);
    }

    #[test]
    fn test_base_offset_lifts_bar() {
        let mut cfg = config(&[("Bat", 9)]);
        cfg.health_bar_offset = 3;
        let overlay = overlay(cfg);
        let layout = overlay.layout(&noticed_bat(5, 10), 4).unwrap();
        assert_eq!(layout.offset, 6);
        assert_eq!(layout.border.y, 152 + (6 - 8) * 4);
    }

    #[test]
    fn test_hidden_creatures_are_skipped() {
        let mut overlay = overlay(config(&[]));

        let mut sleeping_bat = noticed_bat(5, 10);
        sleeping_bat.noticed_player = Some(false);

        let mut ghost = CreatureSnapshot::new("Ghost", 0, 0, 16, 24, 10, 10);
        ghost.is_invisible = true;

        let bars = overlay.render_frame(&[sleeping_bat, ghost], 4, None);
        assert!(bars.is_empty());
    }

    #[test]
    fn test_broken_creature_does_not_stop_frame() {
        let mut overlay = overlay(config(&[]));
        let broken = CreatureSnapshot::new("GreenSlime", 0, 0, 0, 0, 10, 10);
        let slime = CreatureSnapshot::new("GreenSlime", 50, 50, 16, 24, 10, 10);

        let bars = overlay.render_frame(&[broken, slime], 4, None);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].commands.len(), 2);
    }

    #[test]
    fn test_layout_errors() {
        let overlay = overlay(config(&[]));
        let slime = CreatureSnapshot::new("GreenSlime", 0, 0, 16, 24, 10, 10);
        assert_eq!(overlay.layout(&slime, 0), Err(LayoutError::ZeroPixelZoom));

        let far_away = CreatureSnapshot::new("GreenSlime", 0, i32::MIN, 16, 24, 10, 10);
        assert_eq!(overlay.layout(&far_away, 4), Err(LayoutError::OutOfRange));
    }

    #[test]
    fn test_health_text() {
        let mut cfg = config(&[("Bat", 9)]);
        cfg.show_health_numbers = true;
        let mut overlay = overlay(cfg);

        let bars = overlay.render_frame(&[noticed_bat(5, 10)], 4, Some(&FixedMeasure));
        assert_eq!(bars[0].commands.len(), 3);

        match &bars[0].commands[2] {
            DrawCommand::Text {
                text,
                x,
                y,
                scale,
                color,
            } => {
                assert_eq!(text, "5/10");
                // Height bound wins: 16 * 1.2 / 7
                assert!((scale - 16.0 * 1.2 / 7.0).abs() < 1e-5);
                // Centered on the 80x16 inner bar starting at (92, 164)
                assert_eq!(*x, 92 + 7);
                assert_eq!(*y, 164 - 1);
                assert_eq!(*color, HEALTH_TEXT_COLOR);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_health_text_uses_clamped_max() {
        let mut cfg = config(&[]);
        cfg.show_health_numbers = true;
        let mut overlay = overlay(cfg);

        let bars = overlay.render_frame(&[noticed_bat(12, 10)], 4, Some(&FixedMeasure));
        assert!(matches!(&bars[0].commands[2], DrawCommand::Text { text, .. } if text == "12/12"));
    }

    #[test]
    fn test_health_text_skipped_without_measure() {
        let mut cfg = config(&[]);
        cfg.show_health_numbers = true;
        let mut overlay = overlay(cfg);

        let bars = overlay.render_frame(&[noticed_bat(5, 10)], 4, None);
        assert_eq!(bars[0].commands.len(), 2);

        let bars = overlay.render_frame(&[noticed_bat(5, 10)], 4, Some(&EmptyMeasure));
        assert_eq!(bars[0].commands.len(), 2);
    }

    #[test]
    fn test_diagnostics_logged_once_per_type() {
        capture_logs();
        let mut overlay = overlay(config(&[]));

        // Notice and shell types without their flags, plus an unlisted type
        // with an empty sprite
        let bat = CreatureSnapshot::new("Bat", 0, 0, 16, 24, 10, 10);
        let crab = CreatureSnapshot::new("LavaCrab", 40, 0, 16, 16, 10, 10);
        let broken = CreatureSnapshot::new("Wyvern", 80, 0, 0, 0, 10, 10);
        let frame = [bat, crab, broken.clone(), broken];

        for _ in 0..3 {
            let bars = overlay.render_frame(&frame, 4, None);
            assert_eq!(bars.len(), 2);
        }

        assert_eq!(logged("Bat has no 'noticed_player' state"), 1);
        assert_eq!(logged("LavaCrab has no 'shell_removed' state"), 1);
        assert_eq!(logged("Monster type Wyvern not found"), 1);
        assert_eq!(logged("Skipping health bar for Wyvern"), 1);
    }

    #[test]
    fn test_draw_failure_logged_once_per_type() {
        capture_logs();
        let mut overlay = overlay(config(&[]));
        let hydras = [
            CreatureSnapshot::new("Hydra", 0, 0, 16, 24, 10, 10),
            CreatureSnapshot::new("Hydra", 80, 0, 16, 24, 5, 10),
        ];

        let mut surface = RecordingSurface {
            fail_borders: true,
            ..Default::default()
        };
        for _ in 0..2 {
            let bars = overlay.render_frame(&hydras, 4, None);
            assert_eq!(overlay.draw_frame(&bars, &mut surface), 2);
        }

        assert_eq!(logged("draw failed for Hydra"), 1);
    }

    #[test]
    fn test_draw_frame_order() {
        let mut cfg = config(&[("Bat", 9)]);
        cfg.show_health_numbers = true;
        let mut overlay = overlay(cfg);
        let bars = overlay.render_frame(&[noticed_bat(5, 10)], 4, Some(&FixedMeasure));

        let mut surface = RecordingSurface::default();
        let failures = overlay.draw_frame(&bars, &mut surface);

        assert_eq!(failures, 0);
        assert_eq!(surface.calls.len(), 3);
        assert!(surface.calls[0].starts_with("fill"));
        assert!(surface.calls[1].starts_with("border"));
        assert_eq!(surface.calls[2], "text 5/10 99 163");
    }

    #[test]
    fn test_draw_frame_continues_after_failure() {
        let mut overlay = overlay(config(&[]));
        let slimes = [
            CreatureSnapshot::new("GreenSlime", 0, 0, 16, 24, 10, 10),
            CreatureSnapshot::new("GreenSlime", 80, 0, 16, 24, 5, 10),
        ];
        let bars = overlay.render_frame(&slimes, 4, None);

        let mut surface = RecordingSurface {
            fail_borders: true,
            ..Default::default()
        };
        let failures = overlay.draw_frame(&bars, &mut surface);

        assert_eq!(failures, 2);
        assert_eq!(surface.calls.len(), 2);
    }
}
