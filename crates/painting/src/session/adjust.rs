//! Brush parameter adjustment driven by controller displacement.
//!
//! Moving the controller toward the headset grows the parameter, moving
//! it away shrinks it. The amount is the controller's displacement from
//! where the gesture started, converted to brush units.

use glam::Vec3;
use tracing::debug;
use vr_paint_config::PaintToolConfig;
use vr_paint_ipc::{AdjustTarget, GestureMode};

use crate::cursor::BrushCursorState;

use super::GestureSession;

/// `start + delta` when increasing, `start - delta` otherwise, clamped to `[0, max]`.
pub fn adjusted_value(start: f32, delta: f32, increasing: bool, max: f32) -> f32 {
    let value = if increasing { start + delta } else { start - delta };
    value.clamp(0.0, max)
}

impl<S> GestureSession<S> {
    /// Apply one adjustment step for the pointer at `pointer`.
    ///
    /// Pure function of the pointer position and the values captured at
    /// start. Returns the new value when it changed.
    pub fn adjust_parameters(
        &self,
        pointer: Vec3,
        cursor: &mut BrushCursorState,
        config: &PaintToolConfig,
    ) -> Option<f32> {
        if self.mode != GestureMode::AdjustingParameters {
            return None;
        }

        let increasing = pointer.distance(self.reference_hmd) < self.reference_distance;
        let displacement = pointer.distance(self.reference_cursor);

        match self.adjust_target {
            AdjustTarget::Radius => {
                let delta = displacement / config.brush_scale;
                let radius =
                    adjusted_value(self.radius_at_start, delta, increasing, cursor.max_radius());
                debug!(
                    "adjust radius: {:.1} {} {:.1} = {:.1}",
                    self.radius_at_start,
                    if increasing { '+' } else { '-' },
                    delta,
                    radius
                );
                cursor.set_radius(radius).then_some(cursor.radius())
            }
            AdjustTarget::Strength => {
                let delta = displacement / config.strength_scale;
                let strength = adjusted_value(self.strength_at_start, delta, increasing, 1.0);
                debug!("adjust strength: {:.3}", strength);
                cursor.set_strength(strength).then_some(cursor.strength())
            }
        }
    }
}
