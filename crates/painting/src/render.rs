//! Cursor feedback: a ring in raycast mode, a translucent ball in
//! proximity mode. Colors follow the stroke polarity.
//!
//! Drawing goes through [`CursorCanvas`] so the host can map it onto
//! whatever immediate-mode renderer it has. Every draw state the cursor
//! touches is restored before [`render_cursor`] returns.

use std::ops::{Deref, DerefMut};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use tracing::trace;
use vr_paint_config::PaintToolConfig;
use vr_paint_ipc::{PaintTool, ProjectionMode, StrokePolarity};

use crate::cursor::BrushCursorState;

/// Normal polarity
pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
/// Inverted polarity
pub const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
/// Tools without a polarity
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// A 2D ring vertex in the cursor's local plane (GPU-compatible).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CursorVertex {
    pub position: [f32; 2],
}

/// Immediate-mode drawing surface for the cursor.
pub trait CursorCanvas {
    fn model_matrix(&self) -> Mat4;
    fn set_model_matrix(&mut self, matrix: Mat4);
    fn blend(&self) -> bool;
    fn set_blend(&mut self, enabled: bool);
    /// Draw a closed polyline in the model's XY plane
    fn draw_line_loop(&mut self, vertices: &[CursorVertex], color: [f32; 4]);
    /// Draw a sphere centered on the model origin
    fn draw_ball(&mut self, radius: f32, color: [f32; 4]);
}

/// Restores the canvas model matrix and blend state when dropped.
pub struct DrawStateGuard<'a, C: CursorCanvas + ?Sized> {
    canvas: &'a mut C,
    model: Mat4,
    blend: bool,
}

impl<'a, C: CursorCanvas + ?Sized> DrawStateGuard<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        let model = canvas.model_matrix();
        let blend = canvas.blend();
        Self {
            canvas,
            model,
            blend,
        }
    }

    /// Model matrix in effect when the guard was taken
    pub fn prior_model(&self) -> Mat4 {
        self.model
    }
}

impl<C: CursorCanvas + ?Sized> Deref for DrawStateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.canvas
    }
}

impl<C: CursorCanvas + ?Sized> DerefMut for DrawStateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.canvas
    }
}

impl<C: CursorCanvas + ?Sized> Drop for DrawStateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.set_model_matrix(self.model);
        self.canvas.set_blend(self.blend);
    }
}

/// Vertices of a circle of `radius` with `segments` points.
pub fn ring_vertices(radius: f32, segments: u32) -> Vec<CursorVertex> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            CursorVertex {
                position: [radius * angle.cos(), radius * angle.sin()],
            }
        })
        .collect()
}

/// Cursor color for the current tool and polarity.
///
/// While idle, holding the polarity modifier previews the toggled polarity.
pub fn cursor_color(
    tool: PaintTool,
    is_dragging: bool,
    polarity: StrokePolarity,
    polarity_modifier_held: bool,
) -> [f32; 3] {
    if !tool.shows_polarity() {
        return WHITE;
    }
    let effective = if !is_dragging && polarity_modifier_held {
        polarity.toggled()
    } else {
        polarity
    };
    if effective.is_inverted() { BLUE } else { RED }
}

fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// Draw the brush cursor for one eye.
///
/// `eye` orients the raycast ring to face the viewer.
pub fn render_cursor<C: CursorCanvas + ?Sized>(
    canvas: &mut C,
    eye: Mat4,
    cursor: &BrushCursorState,
    polarity_modifier_held: bool,
    config: &PaintToolConfig,
) {
    let rgb = cursor_color(
        cursor.tool,
        cursor.is_dragging,
        cursor.polarity,
        polarity_modifier_held,
    );
    let mut canvas = DrawStateGuard::new(canvas);

    match cursor.projection_mode {
        ProjectionMode::Raycast => {
            let mut facing = eye;
            facing.w_axis = Vec4::from((cursor.world_point, 1.0));
            let model = canvas.prior_model() * facing;
            canvas.set_model_matrix(model);
            canvas.set_blend(true);

            let color = with_alpha(rgb, config.ring_opacity);
            let ring_radius = config.brush_scale * cursor.radius();
            trace!("cursor ring at {:?}, r={}", cursor.world_point, ring_radius);
            canvas.draw_line_loop(&ring_vertices(ring_radius, config.circle_segments), color);
            if let Some(inner) = config.inner_ring_radius {
                canvas.draw_line_loop(&ring_vertices(inner, config.circle_segments), color);
            }
        }
        ProjectionMode::Proximity => {
            canvas.set_model_matrix(Mat4::from_translation(cursor.world_point));
            canvas.set_blend(true);
            let color = with_alpha(rgb, config.ball_opacity);
            trace!("cursor ball at {:?}, r={}", cursor.world_point, cursor.radius());
            canvas.draw_ball(cursor.radius(), color);
        }
    }
}
