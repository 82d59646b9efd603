//! Per-gesture session state
//!
//! One [`GestureSession`] exists per live gesture. It is created when a
//! gesture starts and dropped when it stops. The stroke controller
//! (`stroke.rs`) and the adjustment controller (`adjust.rs`) extend it
//! with the work done for each interpretation.

mod adjust;
mod stroke;

use glam::{Vec2, Vec3};
use vr_paint_ipc::{AdjustTarget, GestureMode, ProjectionMode, Side, StrokePolarity};

use crate::classify::GestureIntent;
use crate::cursor::BrushCursorState;
use crate::types::GestureInput;

pub use adjust::adjusted_value;
pub use stroke::ensure_paint_mode;

/// State of one gesture from start to stop.
///
/// `S` is the paint engine's session handle. It is present exactly while
/// an engine stroke is open.
#[derive(Debug)]
pub struct GestureSession<S> {
    /// Hand that started the gesture
    pub side: Side,
    /// Interpretation latched at start
    pub mode: GestureMode,
    /// Parameter edited when adjusting
    pub adjust_target: AdjustTarget,
    /// Polarity latched for this gesture
    pub polarity: StrokePolarity,
    /// Polarity in effect before the gesture, restored on stop
    pub original_polarity: StrokePolarity,
    /// Headset position at start
    pub reference_hmd: Vec3,
    /// Pointer position at start
    pub reference_cursor: Vec3,
    /// Distance between the two reference points
    pub reference_distance: f32,
    pub radius_at_start: f32,
    pub strength_at_start: f32,
    /// Set when the engine refused to open a stroke
    pub canceled: bool,
    /// Open engine stroke, if any
    pub(crate) engine_session: Option<S>,
    /// Projection mode the stroke was opened in
    pub(crate) projection_mode: ProjectionMode,
    /// Projected point of the previous stroke step
    pub(crate) prev_point: Vec2,
    /// 3D cursor point of the previous stroke step
    pub(crate) prev_world: Vec3,
    /// Distance travelled since the stroke began
    pub(crate) stroke_distance: f32,
}

impl<S> GestureSession<S> {
    /// Create a session, capturing the reference points and brush snapshot.
    pub fn new(intent: &GestureIntent, input: &GestureInput, cursor: &BrushCursorState) -> Self {
        let reference_hmd = input.hmd_position();
        let reference_cursor = input.pointer_position();
        let adjust_target = match *intent {
            GestureIntent::Adjust { target, .. } => target,
            GestureIntent::Paint { .. } => AdjustTarget::Radius,
        };

        Self {
            side: input.side,
            mode: intent.mode(),
            adjust_target,
            polarity: intent.polarity(),
            original_polarity: cursor.polarity,
            reference_hmd,
            reference_cursor,
            reference_distance: reference_cursor.distance(reference_hmd),
            radius_at_start: cursor.radius(),
            strength_at_start: cursor.strength(),
            canceled: false,
            engine_session: None,
            projection_mode: cursor.projection_mode,
            prev_point: cursor.projected_point,
            prev_world: cursor.world_point,
            stroke_distance: 0.0,
        }
    }

    /// Whether an engine stroke is open
    pub fn is_active(&self) -> bool {
        self.engine_session.is_some()
    }

    /// Distance travelled by the stroke so far: pixels for raycast
    /// strokes, world units for proximity strokes
    pub fn stroke_distance(&self) -> f32 {
        self.stroke_distance
    }
}
