//! Interfaces of the systems the paint tool drives.
//!
//! The tool never rasterizes or manages scene modes itself; it calls
//! through these traits. All calls are synchronous from the tool's
//! point of view.

use glam::{Vec2, Vec3};
use vr_paint_ipc::{PaintTool, StrokePolarity};

use crate::error::{EngineError, SceneError};
use crate::types::{ObjectId, StrokeStep};

/// Scene and object-mode management.
pub trait SceneContext {
    /// Object that gestures paint on, if any
    fn active_object(&self) -> Option<ObjectId>;

    fn is_in_paint_mode(&self, object: ObjectId) -> bool;

    /// Switch `object` into texture paint mode
    fn enter_paint_mode(&mut self, object: ObjectId) -> Result<(), SceneError>;

    /// Whether an object is in a structural edit mode (e.g. mesh edit)
    fn is_in_structural_edit_mode(&self) -> bool;

    /// Request leaving the structural edit mode
    fn exit_structural_edit_mode(&mut self);
}

/// The texture painting backend.
pub trait PaintEngine {
    /// Engine-side state of one stroke
    type Session;

    /// Open a stroke at `start` (projected) / `start_world` (3D cursor).
    ///
    /// Raycast strokes paint from the projected points, proximity strokes
    /// from the 3D points.
    ///
    /// Fails when the target cannot be painted, e.g. it has no UV layout.
    /// A failed call must leave no engine-side state behind.
    fn begin_session(
        &mut self,
        object: ObjectId,
        start: Vec2,
        start_world: Vec3,
        polarity: StrokePolarity,
    ) -> Result<Self::Session, EngineError>;

    /// Paint one segment of the stroke
    fn step_session(&mut self, session: &mut Self::Session, step: &StrokeStep);

    /// Push pending changes to the display
    fn redraw_session(&mut self, session: &mut Self::Session, final_redraw: bool);

    /// Finish the stroke and release its resources
    fn end_session(&mut self, session: Self::Session) -> Result<(), EngineError>;

    /// Select the brush tool used by subsequent strokes
    fn set_tool(&mut self, tool: PaintTool);
}
