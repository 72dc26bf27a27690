//! Per-frame creature snapshots handed to the overlay by the host
//!
//! The overlay never looks at the host's own creature types. Each frame the
//! host copies what the overlay needs into a [`CreatureSnapshot`] and passes
//! the whole list to [`crate::ui::HealthBarOverlay::render_frame`].
//!
//! Type-specific state that the host keeps private (whether a crab has shed
//! its shell, whether a golem has seen the player) travels as `Option<bool>`.
//! `None` means the host could not provide the flag for this creature; the
//! visibility rules then fall back to the generic invisibility check.

/// A read-only view of one creature for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureSnapshot {
    /// Type identifier, e.g. `"Bat"` or `"RockCrab"`
    pub type_name: String,

    /// Screen-space position of the sprite anchor (device pixels)
    pub x: i32,
    pub y: i32,

    /// Sprite size in native texture pixels (before pixel zoom)
    pub sprite_width: u32,
    pub sprite_height: u32,

    pub health: i32,
    pub max_health: i32,

    /// Generic invisibility flag owned by the simulation
    pub is_invisible: bool,

    /// Whether the creature moved this tick
    pub is_moving: bool,

    /// Shell state for shelled creatures
    pub shell_removed: Option<bool>,

    /// Whether the creature has noticed the player
    pub noticed_player: Option<bool>,
}

impl CreatureSnapshot {
    /// Creates a visible, stationary snapshot with no type-specific flags
    pub fn new(
        type_name: impl Into<String>,
        x: i32,
        y: i32,
        sprite_width: u32,
        sprite_height: u32,
        health: i32,
        max_health: i32,
    ) -> Self {
        CreatureSnapshot {
            type_name: type_name.into(),
            x,
            y,
            sprite_width,
            sprite_height,
            health,
            max_health,
            is_invisible: false,
            is_moving: false,
            shell_removed: None,
            noticed_player: None,
        }
    }

    /// Health and max health with max clamped to at least the current value
    ///
    /// Hosts occasionally report more health than max health for a frame.
    /// The clamp only affects this copy.
    pub fn clamped_health(&self) -> (i32, i32) {
        let health = self.health.max(0);
        (health, self.max_health.max(health))
    }

    /// Health as a fraction of max health (0.0 to 1.0)
    ///
    /// Zero max health yields 0.0.
    pub fn health_fraction(&self) -> f32 {
        let (health, max_health) = self.clamped_health();
        if max_health <= 0 {
            0.0
        } else {
            health as f32 / max_health as f32
        }
    }
}
