//! Cursor projection from tracked-controller space into canvas space.
//!
//! In raycast mode the 3D cursor is pushed through the viewport's
//! projection x view matrix and the resulting NDC is mapped to pixels,
//! using the viewport center as origin. In proximity mode the 3D point is
//! used as-is and no 2D point is produced.

use glam::{Mat4, Vec2, Vec3};
use vr_paint_ipc::ProjectionMode;

use crate::cursor::BrushCursorState;
use crate::types::Viewport;

/// Result of projecting the cursor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorProjection {
    /// 3D cursor location
    pub world: Vec3,
    /// Canvas-space point, present in raycast mode only
    pub screen: Option<Vec2>,
}

/// Map a world-space point to viewport pixel coordinates.
///
/// Pixel coordinates are truncated toward zero. Degenerate projections
/// (points on the eye plane) produce non-finite values, which are passed
/// through unchanged.
pub fn project_to_viewport(point: Vec3, viewport: &Viewport) -> Vec2 {
    let ndc = viewport.view_projection().project_point3(point);
    let half_width = viewport.width / 2.0;
    let half_height = viewport.height / 2.0;
    Vec2::new(
        (half_width + half_width * ndc.x).trunc(),
        (half_height + half_height * ndc.y).trunc(),
    )
}

/// Project a pointer pose according to `mode`.
pub fn project_cursor(pointer: &Mat4, viewport: &Viewport, mode: ProjectionMode) -> CursorProjection {
    let world = pointer.w_axis.truncate();
    let screen = match mode {
        ProjectionMode::Raycast => Some(project_to_viewport(world, viewport)),
        ProjectionMode::Proximity => None,
    };
    CursorProjection { world, screen }
}

impl BrushCursorState {
    /// Recompute the cursor projection for this frame.
    ///
    /// Runs every frame regardless of gesture state. In proximity mode the
    /// last projected point is kept.
    pub fn update_projection(&mut self, pointer: &Mat4, viewport: &Viewport) -> CursorProjection {
        let projection = project_cursor(pointer, viewport, self.projection_mode);
        self.world_point = projection.world;
        if let Some(screen) = projection.screen {
            self.projected_point = screen;
        }
        projection
    }
}
