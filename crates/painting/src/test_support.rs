//! In-memory scene and engine doubles for tests.

use glam::{Vec2, Vec3};
use vr_paint_ipc::{PaintTool, StrokePolarity};

use crate::collaborators::{PaintEngine, SceneContext};
use crate::error::{EngineError, SceneError};
use crate::types::{ObjectId, StrokeStep};

#[derive(Debug)]
pub struct MockScene {
    pub active: Option<ObjectId>,
    pub paint_mode: bool,
    pub paint_mode_available: bool,
    pub structural_edit: bool,
    pub enter_paint_mode_calls: usize,
    pub exit_edit_calls: usize,
}

impl MockScene {
    /// Scene with `object` active and already in paint mode
    pub fn with_object(object: ObjectId) -> Self {
        Self {
            active: Some(object),
            paint_mode: true,
            paint_mode_available: true,
            structural_edit: false,
            enter_paint_mode_calls: 0,
            exit_edit_calls: 0,
        }
    }

    pub fn empty() -> Self {
        Self {
            active: None,
            ..Self::with_object(ObjectId(0))
        }
    }
}

impl SceneContext for MockScene {
    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn is_in_paint_mode(&self, _object: ObjectId) -> bool {
        self.paint_mode
    }

    fn enter_paint_mode(&mut self, object: ObjectId) -> Result<(), SceneError> {
        self.enter_paint_mode_calls += 1;
        if !self.paint_mode_available {
            return Err(SceneError::PaintModeUnavailable {
                object,
                reason: "not a mesh".to_string(),
            });
        }
        self.paint_mode = true;
        Ok(())
    }

    fn is_in_structural_edit_mode(&self) -> bool {
        self.structural_edit
    }

    fn exit_structural_edit_mode(&mut self) {
        self.exit_edit_calls += 1;
        self.structural_edit = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Begin {
        object: ObjectId,
        start: Vec2,
        start_world: Vec3,
        polarity: StrokePolarity,
    },
    Step(StrokeStep),
    Redraw {
        final_redraw: bool,
    },
    End,
    SetTool(PaintTool),
}

/// Records every call; sessions are numbered from 1.
#[derive(Debug, Default)]
pub struct MockEngine {
    pub calls: Vec<EngineCall>,
    pub reject: Option<EngineError>,
    pub fail_end: bool,
    next_session: u32,
}

impl MockEngine {
    pub fn rejecting(err: EngineError) -> Self {
        Self {
            reject: Some(err),
            ..Default::default()
        }
    }

    pub fn steps(&self) -> Vec<StrokeStep> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Step(step) => Some(*step),
                _ => None,
            })
            .collect()
    }

    pub fn redraws(&self, final_redraw: bool) -> usize {
        self.count(|c| *c == EngineCall::Redraw { final_redraw })
    }

    pub fn count(&self, pred: impl Fn(&EngineCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl PaintEngine for MockEngine {
    type Session = u32;

    fn begin_session(
        &mut self,
        object: ObjectId,
        start: Vec2,
        start_world: Vec3,
        polarity: StrokePolarity,
    ) -> Result<u32, EngineError> {
        self.calls.push(EngineCall::Begin {
            object,
            start,
            start_world,
            polarity,
        });
        if let Some(err) = &self.reject {
            return Err(err.clone());
        }
        self.next_session += 1;
        Ok(self.next_session)
    }

    fn step_session(&mut self, session: &mut u32, step: &StrokeStep) {
        assert_eq!(*session, self.next_session, "step on a stale session");
        self.calls.push(EngineCall::Step(*step));
    }

    fn redraw_session(&mut self, _session: &mut u32, final_redraw: bool) {
        self.calls.push(EngineCall::Redraw { final_redraw });
    }

    fn end_session(&mut self, _session: u32) -> Result<(), EngineError> {
        self.calls.push(EngineCall::End);
        if self.fail_end {
            return Err(EngineError::Backend("flush failed".to_string()));
        }
        Ok(())
    }

    fn set_tool(&mut self, tool: PaintTool) {
        self.calls.push(EngineCall::SetTool(tool));
    }
}
