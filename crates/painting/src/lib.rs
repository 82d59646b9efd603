//! VR texture painting - gesture handling for a hand-tracked brush
//!
//! This crate turns controller gestures into paint strokes or brush
//! parameter edits:
//! - [`projection`] - per-frame cursor projection (raycast / proximity)
//! - [`classify`] - gesture interpretation latched at start
//! - [`session`] - stroke lifecycle and parameter adjustment
//! - [`render`] - cursor ring / ball feedback
//! - [`notify`] - change notifications for the UI
//! - [`tool`] - [`TexturePaintTool`], the entry point hosts drive
//!
//! Scene management and rasterization live behind the
//! [`SceneContext`] and [`PaintEngine`] traits.

pub mod classify;
pub mod collaborators;
pub mod cursor;
pub mod error;
pub mod notify;
pub mod projection;
pub mod render;
pub mod session;
pub mod tool;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use classify::*;
pub use collaborators::*;
pub use cursor::*;
pub use error::*;
pub use notify::*;
pub use projection::*;
pub use render::*;
pub use session::*;
pub use tool::*;
pub use types::*;

pub use vr_paint_config::{ConfigError, PaintToolConfig};
pub use vr_paint_ipc as ipc;
