//! Stroke lifecycle for painting gestures

use tracing::{debug, info, warn};
use vr_paint_ipc::{GestureMode, ProjectionMode};

use crate::collaborators::{PaintEngine, SceneContext};
use crate::cursor::BrushCursorState;
use crate::error::GestureError;
use crate::types::{ObjectId, StrokeStep};

use super::GestureSession;

/// Switch `object` into paint mode if it is not already.
///
/// Returns whether a switch happened.
pub fn ensure_paint_mode<C: SceneContext + ?Sized>(
    scene: &mut C,
    object: ObjectId,
) -> Result<bool, GestureError> {
    if scene.is_in_paint_mode(object) {
        return Ok(false);
    }
    scene.enter_paint_mode(object)?;
    info!("Entered paint mode on {:?}", object);
    Ok(true)
}

impl<S> GestureSession<S> {
    /// Open an engine stroke at the current cursor point.
    ///
    /// On refusal the session is marked canceled and holds no engine state.
    pub fn start_stroke<E>(
        &mut self,
        object: ObjectId,
        engine: &mut E,
        cursor: &BrushCursorState,
    ) -> Result<(), GestureError>
    where
        E: PaintEngine<Session = S> + ?Sized,
    {
        let start = cursor.projected_point;
        let start_world = cursor.world_point;
        match engine.begin_session(object, start, start_world, self.polarity) {
            Ok(session) => {
                self.engine_session = Some(session);
                self.canceled = false;
                self.projection_mode = cursor.projection_mode;
                self.prev_point = start;
                self.prev_world = start_world;
                self.stroke_distance = 0.0;
                info!(
                    "Stroke started: object={:?}, pos={:?}, world={:?}, mode={:?}, polarity={:?}",
                    object, start, start_world, self.projection_mode, self.polarity
                );
                Ok(())
            }
            Err(err) => {
                self.engine_session = None;
                self.canceled = true;
                Err(err.into())
            }
        }
    }

    /// Forward one step of the stroke to the engine.
    ///
    /// Does nothing unless the session is painting with an open stroke.
    pub fn update_stroke<E>(&mut self, engine: &mut E, cursor: &BrushCursorState, trigger_pressure: f32)
    where
        E: PaintEngine<Session = S> + ?Sized,
    {
        if self.canceled || self.mode != GestureMode::Painting {
            return;
        }
        let Some(session) = self.engine_session.as_mut() else {
            debug!("update_stroke: no open stroke, ignoring");
            return;
        };

        let current = cursor.projected_point;
        let world_current = cursor.world_point;
        self.stroke_distance += match self.projection_mode {
            ProjectionMode::Raycast => self.prev_point.distance(current),
            ProjectionMode::Proximity => self.prev_world.distance(world_current),
        };

        let step = StrokeStep {
            prev: self.prev_point,
            current,
            world_prev: self.prev_world,
            world_current,
            inverted: self.polarity.is_inverted() ^ cursor.pen_flip,
            pressure: cursor.stroke_pressure(trigger_pressure),
            distance: self.stroke_distance,
            size: cursor.radius(),
        };
        debug!(
            "stroke step: {:?} -> {:?}, pressure={:.2}, size={:.1}",
            step.prev, step.current, step.pressure, step.size
        );

        engine.step_session(session, &step);
        engine.redraw_session(session, false);

        self.prev_point = current;
        self.prev_world = world_current;
    }

    /// Finalize the open stroke, if any.
    ///
    /// The engine session is always released. A finalization failure is
    /// logged and otherwise ignored.
    pub fn stop_stroke<E>(&mut self, engine: &mut E)
    where
        E: PaintEngine<Session = S> + ?Sized,
    {
        let Some(mut session) = self.engine_session.take() else {
            return;
        };

        engine.redraw_session(&mut session, true);
        match engine.end_session(session) {
            Ok(()) => info!("Stroke ended ({:.3} travelled)", self.stroke_distance),
            Err(err) => warn!("Stroke finalization failed: {}", err),
        }
    }
}
