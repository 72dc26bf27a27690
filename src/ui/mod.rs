//! World-Space Health Bar Overlay
//!
//! Health bars drawn above hostile creatures after the world has been
//! rendered. The overlay is recomputed from scratch every frame.
//!
//! # Architecture
//!
//! - [`visibility`] - whether a creature's bar may be shown (some creatures hide)
//! - [`offset`] - per-type vertical nudge of the bar
//! - [`color`] - health fraction to bar color
//! - [`health_bar`] - geometry and draw commands, plus the surface/measure traits
//!   the host implements
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::ui::HealthBarOverlay;
//!
//! // Create once at startup
//! let mut overlay = HealthBarOverlay::new(config, 24, 7)?;
//!
//! // Every frame, after the world is drawn
//! let bars = overlay.render_frame(&snapshots, PIXEL_ZOOM, Some(&font));
//! overlay.draw_frame(&bars, &mut surface);
//! ```

pub mod color;
pub mod health_bar;
pub mod offset;
pub mod visibility;

pub use color::{health_color, HealthColor};
pub use health_bar::{
    BarRect, CreatureBar, DrawCommand, DrawSurface, HealthBarOverlay, TextMeasure,
};
pub use offset::resolve_offset;
pub use visibility::should_show_health_bar;
