//! Health bars above hostile creatures
//!
//! The overlay core: configuration, per-frame creature snapshots, and the
//! [`ui`] module that turns snapshots into draw calls. The binary in
//! `main.rs` hosts it in a small SDL2 scene.

pub mod config;
pub mod creature;
pub mod ui;

pub use config::{ConfigError, HealthBarsConfig};
pub use creature::CreatureSnapshot;
