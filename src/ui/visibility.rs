//! Whether a creature's health bar may be drawn this frame
//!
//! Some creatures hide from the player (crabs disguised as rocks, golems
//! standing still as statues, bats hanging from the ceiling). Drawing a bar
//! above them would give their position away, so each creature type maps to
//! a [`VisibilityRule`] that decides from the creature's current state.

use crate::creature::CreatureSnapshot;

/// How a creature type decides whether its bar is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// Shown unless the creature is invisible
    Default,
    /// Shown once the shell is off, or while the creature is moving
    /// (a crab running away still has its shell drawn)
    Shell,
    /// Shown only after the creature has noticed the player
    Notice,
}

impl VisibilityRule {
    /// Rule for a creature type name; unknown types get `Default`
    pub fn for_type(type_name: &str) -> Self {
        match type_name {
            "RockCrab" | "LavaCrab" => VisibilityRule::Shell,
            "RockGolem" | "Bat" => VisibilityRule::Notice,
            _ => VisibilityRule::Default,
        }
    }
}

/// Outcome of a visibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityCheck {
    pub visible: bool,
    /// Flag the type's rule needed but the host didn't provide
    pub missing_flag: Option<&'static str>,
}

/// Evaluates the creature's rule, falling back to the default rule when a
/// required flag is missing
pub fn check_visibility(creature: &CreatureSnapshot) -> VisibilityCheck {
    let fallback = |flag| VisibilityCheck {
        visible: !creature.is_invisible,
        missing_flag: Some(flag),
    };

    match VisibilityRule::for_type(&creature.type_name) {
        VisibilityRule::Default => VisibilityCheck {
            visible: !creature.is_invisible,
            missing_flag: None,
        },
        VisibilityRule::Shell => match creature.shell_removed {
            Some(shell_removed) => VisibilityCheck {
                visible: shell_removed || creature.is_moving,
                missing_flag: None,
            },
            None => fallback("shell_removed"),
        },
        VisibilityRule::Notice => match creature.noticed_player {
            Some(noticed) => VisibilityCheck {
                visible: noticed,
                missing_flag: None,
            },
            None => fallback("noticed_player"),
        },
    }
}

/// Whether the creature's health bar should be drawn this frame
pub fn should_show_health_bar(creature: &CreatureSnapshot) -> bool {
    check_visibility(creature).visible
}
