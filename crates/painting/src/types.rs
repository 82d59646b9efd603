use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use vr_paint_ipc::{Modifiers, Side};

/// Handle of a scene object as understood by the scene context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Transforms and size of the viewport used for raycast projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Projection (window) matrix
    pub projection: Mat4,
    /// View matrix
    pub view: Mat4,
}

impl Viewport {
    pub fn new(width: f32, height: f32, projection: Mat4, view: Mat4) -> Self {
        Self {
            width,
            height,
            projection,
            view,
        }
    }

    /// Combined projection x view matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Controller input sampled for one gesture tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInput {
    /// Hand that owns the gesture
    pub side: Side,
    /// Pointer pose (translation in the last column)
    pub pointer: Mat4,
    /// Headset pose
    pub hmd: Mat4,
    /// Trigger pressure 0.0-1.0
    pub trigger_pressure: f32,
    /// Modifier buttons currently held
    pub modifiers: Modifiers,
    /// Whether the input already involves both hands
    pub bimanual: bool,
}

impl GestureInput {
    /// Single-handed input at full pressure with no modifiers held
    pub fn new(side: Side, pointer: Mat4, hmd: Mat4) -> Self {
        Self {
            side,
            pointer,
            hmd,
            trigger_pressure: 1.0,
            modifiers: Modifiers::NONE,
            bimanual: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_pressure(mut self, pressure: f32) -> Self {
        self.trigger_pressure = pressure;
        self
    }

    pub fn with_bimanual(mut self, bimanual: bool) -> Self {
        self.bimanual = bimanual;
        self
    }

    pub fn pointer_position(&self) -> Vec3 {
        self.pointer.w_axis.truncate()
    }

    pub fn hmd_position(&self) -> Vec3 {
        self.hmd.w_axis.truncate()
    }
}

/// Arguments forwarded to the paint engine for one stroke step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStep {
    /// Projected point of the previous step
    pub prev: Vec2,
    /// Projected point of this step
    pub current: Vec2,
    /// 3D cursor point of the previous step
    pub world_prev: Vec3,
    /// 3D cursor point of this step
    pub world_current: Vec3,
    /// Whether the step paints with inverted effect
    pub inverted: bool,
    /// Trigger pressure, or brush strength when pressure is disabled
    pub pressure: f32,
    /// Distance travelled since the stroke began, in pixels for raycast
    /// strokes and world units for proximity strokes
    pub distance: f32,
    /// Brush radius
    pub size: f32,
}
