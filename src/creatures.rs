//! Simulated monsters for the demo scene
//!
//! Just enough behavior to drive every health bar rule: bats hang still
//! until the player comes close, golems pose as statues, crabs hide in their
//! shells and bolt when approached, ghosts fade in and out, slimes hop about.
//! The cursor stands in for the player.

use health_bars::CreatureSnapshot;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Distance (logical pixels) at which bats and golems notice the player
const NOTICE_RADIUS: f32 = 90.0;
/// Distance at which a hiding crab starts to run
const CRAB_FLEE_RADIUS: f32 = 50.0;
/// Ghosts alternate between visible and invisible this often (seconds)
const GHOST_FADE_PERIOD: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterKind {
    Bat,
    RockCrab,
    RockGolem,
    GreenSlime,
    Ghost,
    /// Types from other mods the config doesn't know about
    Leaper,
    Shooter,
}

impl MonsterKind {
    pub fn type_name(self) -> &'static str {
        match self {
            MonsterKind::Bat => "Bat",
            MonsterKind::RockCrab => "RockCrab",
            MonsterKind::RockGolem => "RockGolem",
            MonsterKind::GreenSlime => "GreenSlime",
            MonsterKind::Ghost => "Ghost",
            MonsterKind::Leaper => "Leaper",
            MonsterKind::Shooter => "Shooter",
        }
    }

    fn max_health(self) -> i32 {
        match self {
            MonsterKind::Bat => 24,
            MonsterKind::RockCrab => 30,
            MonsterKind::RockGolem => 45,
            MonsterKind::GreenSlime => 24,
            MonsterKind::Ghost => 96,
            MonsterKind::Leaper => 40,
            MonsterKind::Shooter => 60,
        }
    }

    /// Sprite size in native pixels
    fn sprite_size(self) -> (u32, u32) {
        match self {
            MonsterKind::RockGolem | MonsterKind::Shooter => (16, 24),
            _ => (16, 16),
        }
    }

    fn speed(self) -> f32 {
        match self {
            MonsterKind::Bat => 60.0,
            MonsterKind::RockCrab => 70.0,
            MonsterKind::RockGolem => 25.0,
            MonsterKind::Ghost => 20.0,
            _ => 35.0,
        }
    }

    fn body_color(self) -> Color {
        match self {
            MonsterKind::Bat => Color::RGB(90, 60, 120),
            MonsterKind::RockCrab => Color::RGB(120, 110, 100),
            MonsterKind::RockGolem => Color::RGB(140, 130, 110),
            MonsterKind::GreenSlime => Color::RGB(60, 200, 80),
            MonsterKind::Ghost => Color::RGB(220, 220, 240),
            MonsterKind::Leaper => Color::RGB(200, 120, 40),
            MonsterKind::Shooter => Color::RGB(60, 60, 70),
        }
    }
}

/// A monster in the demo scene
///
/// Position is the left edge of the sprite and its vertical middle, the same
/// anchor the overlay expects in a snapshot.
#[derive(Debug, Clone)]
pub struct Monster {
    pub kind: MonsterKind,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
    is_moving: bool,
    is_invisible: bool,
    shell_removed: bool,
    noticed_player: bool,
    /// Seconds since spawn, drives wandering and fading
    age: f32,
}

impl Monster {
    pub fn new(kind: MonsterKind, x: f32, y: f32) -> Self {
        let max_health = kind.max_health();
        Monster {
            kind,
            x,
            y,
            health: max_health,
            max_health,
            is_moving: false,
            is_invisible: false,
            shell_removed: false,
            noticed_player: false,
            age: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Advances the monster by `dt` seconds with the player at (`player_x`, `player_y`)
    pub fn update(&mut self, dt: f32, player_x: f32, player_y: f32) {
        self.age += dt;

        let dx = player_x - self.x;
        let dy = player_y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        // Unit direction towards the player, and a slow wander
        let (to_x, to_y) = if distance > 1.0 {
            (dx / distance, dy / distance)
        } else {
            (0.0, 0.0)
        };
        let wander = (self.age * 0.7 + self.x * 0.01).sin();

        let (vx, vy) = match self.kind {
            MonsterKind::Bat | MonsterKind::RockGolem => {
                if distance < NOTICE_RADIUS {
                    self.noticed_player = true;
                }
                if self.noticed_player && distance > 8.0 {
                    (to_x, to_y)
                } else {
                    (0.0, 0.0)
                }
            }
            MonsterKind::RockCrab => {
                if self.shell_removed || distance < CRAB_FLEE_RADIUS {
                    (-to_x, -to_y)
                } else {
                    (0.0, 0.0)
                }
            }
            MonsterKind::Ghost => {
                self.is_invisible = (self.age / GHOST_FADE_PERIOD) as u32 % 2 == 1;
                (wander, wander.cos() * 0.5)
            }
            MonsterKind::GreenSlime | MonsterKind::Leaper | MonsterKind::Shooter => {
                // Hop for half of every two seconds
                if self.age % 2.0 < 0.5 {
                    (wander, (self.age * 3.0).cos())
                } else {
                    (0.0, 0.0)
                }
            }
        };

        let speed = self.kind.speed() * dt;
        self.x += vx * speed;
        self.y += vy * speed;
        self.is_moving = vx != 0.0 || vy != 0.0;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
        if self.kind == MonsterKind::RockCrab {
            self.shell_removed = true;
        }
    }

    /// Refills health; `overheal` pushes health past max health
    pub fn heal(&mut self, overheal: i32) {
        self.health = self.max_health + overheal;
    }

    /// Copies the state the overlay needs for this frame
    pub fn snapshot(&self) -> CreatureSnapshot {
        let (width, height) = self.kind.sprite_size();
        let mut snapshot = CreatureSnapshot::new(
            self.kind.type_name(),
            self.x as i32,
            self.y as i32,
            width,
            height,
            self.health,
            self.max_health,
        );
        snapshot.is_invisible = self.is_invisible;
        snapshot.is_moving = self.is_moving;

        match self.kind {
            MonsterKind::RockCrab => snapshot.shell_removed = Some(self.shell_removed),
            MonsterKind::Bat | MonsterKind::RockGolem => {
                snapshot.noticed_player = Some(self.noticed_player)
            }
            _ => {}
        }

        snapshot
    }

    /// Y-coordinate of the sprite's base, for depth sorting
    pub fn depth_y(&self, pixel_zoom: u32) -> i32 {
        let (_, height) = self.kind.sprite_size();
        self.y as i32 + (height * pixel_zoom / 2) as i32
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, pixel_zoom: u32) -> Result<(), String> {
        if self.is_invisible {
            return Ok(());
        }

        let (width, height) = self.kind.sprite_size();
        let width = width * pixel_zoom;
        let height = height * pixel_zoom;
        let body = Rect::new(self.x as i32, self.y as i32 - (height / 2) as i32, width, height);

        canvas.set_draw_color(self.kind.body_color());
        canvas.fill_rect(body)?;

        // A crab still in its shell gets a darker cap
        if self.kind == MonsterKind::RockCrab && !self.shell_removed {
            canvas.set_draw_color(Color::RGB(80, 75, 70));
            canvas.fill_rect(Rect::new(body.x(), body.y(), width, height / 2))?;
        }

        Ok(())
    }
}

/// Monsters created by the spawn key at (`x`, `y`)
pub fn spawn_pair(x: f32, y: f32) -> [Monster; 2] {
    [
        Monster::new(MonsterKind::Leaper, x, y),
        Monster::new(MonsterKind::Shooter, x + 40.0, y),
    ]
}

/// The starting scene
pub fn initial_monsters() -> Vec<Monster> {
    vec![
        Monster::new(MonsterKind::Bat, 80.0, 70.0),
        Monster::new(MonsterKind::Bat, 520.0, 90.0),
        Monster::new(MonsterKind::RockCrab, 200.0, 260.0),
        Monster::new(MonsterKind::RockCrab, 420.0, 280.0),
        Monster::new(MonsterKind::RockGolem, 320.0, 150.0),
        Monster::new(MonsterKind::GreenSlime, 150.0, 180.0),
        Monster::new(MonsterKind::GreenSlime, 470.0, 200.0),
        Monster::new(MonsterKind::Ghost, 560.0, 300.0),
    ]
}
