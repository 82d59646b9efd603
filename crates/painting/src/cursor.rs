//! Brush parameters and cursor state shared by every gesture.

use glam::{Vec2, Vec3};
use vr_paint_config::PaintToolConfig;
use vr_paint_ipc::{PaintTool, ProjectionMode, StrokePolarity};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Brush and cursor state owned by one paint tool instance.
///
/// Radius and strength are only writable through the clamping setters,
/// so they always stay within `[0, max_radius]` and `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct BrushCursorState {
    radius: f32,
    strength: f32,
    max_radius: f32,
    /// Last 2D-projected cursor location (raycast mode)
    pub projected_point: Vec2,
    /// Last 3D cursor location
    pub world_point: Vec3,
    pub projection_mode: ProjectionMode,
    /// True strictly between a successful gesture start and its stop
    pub is_dragging: bool,
    /// Current stroke polarity
    pub polarity: StrokePolarity,
    pub tool: PaintTool,
    /// Use trigger pressure (or strength) as stroke pressure
    pub use_trigger_pressure: bool,
    /// Flip the effect of every stroke
    pub pen_flip: bool,
}

impl BrushCursorState {
    pub fn new(config: &PaintToolConfig) -> Self {
        Self {
            radius: config.clamp_radius(config.default_radius),
            strength: config.clamp_strength(config.default_strength),
            max_radius: config.max_radius.max(0.0),
            projected_point: Vec2::ZERO,
            world_point: Vec3::ZERO,
            projection_mode: config.projection,
            is_dragging: false,
            polarity: StrokePolarity::Normal,
            tool: PaintTool::Draw,
            use_trigger_pressure: config.use_trigger_pressure,
            pen_flip: config.pen_flip,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Set the radius, clamped. Returns whether the value changed.
    ///
    /// NaN is ignored; infinities clamp to the nearest bound.
    pub fn set_radius(&mut self, radius: f32) -> bool {
        if radius.is_nan() {
            return false;
        }
        let clamped = radius.min(self.max_radius).max(0.0);
        let changed = clamped != self.radius;
        self.radius = clamped;
        changed
    }

    /// Set the strength, clamped. Returns whether the value changed.
    pub fn set_strength(&mut self, strength: f32) -> bool {
        if strength.is_nan() {
            return false;
        }
        let clamped = strength.clamp(0.0, 1.0);
        let changed = clamped != self.strength;
        self.strength = clamped;
        changed
    }

    /// Pressure forwarded with each stroke step
    pub fn stroke_pressure(&self, trigger_pressure: f32) -> f32 {
        if self.use_trigger_pressure {
            trigger_pressure.clamp(0.0, 1.0)
        } else {
            self.strength
        }
    }
}

impl Default for BrushCursorState {
    fn default() -> Self {
        Self::new(&PaintToolConfig::default())
    }
}
