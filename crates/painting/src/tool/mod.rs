//! The texture paint tool: gesture entry points and brush settings.
//!
//! A host feeds each hand's gesture events into [`TexturePaintTool`]:
//! `drag_start` on trigger press, `drag_contd` every frame while held,
//! `drag_stop` on release. Cursor projection and feedback rendering run
//! every frame whether or not a gesture is live.

use glam::Mat4;
use tracing::{debug, info, warn};
use vr_paint_config::{ConfigError, PaintToolConfig};
use vr_paint_ipc::{
    AdjustTarget, GestureMode, Modifiers, PaintTool, ProjectionMode, ToolToUi, UiToTool,
};

use crate::classify::classify;
use crate::collaborators::{PaintEngine, SceneContext};
use crate::cursor::BrushCursorState;
use crate::error::GestureError;
use crate::notify::NotificationBus;
use crate::projection::CursorProjection;
use crate::render::{CursorCanvas, render_cursor};
use crate::session::{GestureSession, ensure_paint_mode};
use crate::types::{GestureInput, Viewport};


/// Gesture-driven texture painting for one VR user.
///
/// `S` is the session handle type of the [`PaintEngine`] the tool drives.
#[derive(Debug)]
pub struct TexturePaintTool<S> {
    config: PaintToolConfig,
    cursor: BrushCursorState,
    session: Option<GestureSession<S>>,
    bus: NotificationBus,
    /// A gesture was started in structural edit mode; exit it on release
    pending_edit_exit: bool,
}

impl<S> Default for TexturePaintTool<S> {
    fn default() -> Self {
        Self::with_valid_config(PaintToolConfig::default())
    }
}

impl<S> TexturePaintTool<S> {
    /// Create a tool, rejecting configs that fail validation.
    pub fn new(config: PaintToolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: PaintToolConfig) -> Self {
        let cursor = BrushCursorState::new(&config);
        Self {
            config,
            cursor,
            session: None,
            bus: NotificationBus::new(),
            pending_edit_exit: false,
        }
    }

    pub fn config(&self) -> &PaintToolConfig {
        &self.config
    }

    pub fn cursor(&self) -> &BrushCursorState {
        &self.cursor
    }

    /// The live gesture, if any
    pub fn session(&self) -> Option<&GestureSession<S>> {
        self.session.as_ref()
    }

    /// Interpretation of the live gesture, `Idle` when there is none
    pub fn mode(&self) -> GestureMode {
        self.session.as_ref().map_or(GestureMode::Idle, |s| s.mode)
    }

    pub fn is_dragging(&self) -> bool {
        self.cursor.is_dragging
    }

    /// Observe radius, strength, mode, dragging and warning changes.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&ToolToUi) + Send + Sync + 'static,
    {
        self.bus.subscribe(listener);
    }

    /// Per-frame cursor projection.
    pub fn update_cursor(&mut self, pointer: &Mat4, viewport: &Viewport) -> CursorProjection {
        self.cursor.update_projection(pointer, viewport)
    }

    /// Begin a gesture.
    ///
    /// `BimanualUnsupported` and `StructuralEditActive` are silent: nothing
    /// is reported and no session is created. `InvalidContext` and
    /// `SessionRejected` are reported once as a warning notification.
    pub fn drag_start<C, E>(
        &mut self,
        input: &GestureInput,
        viewport: &Viewport,
        scene: &mut C,
        engine: &mut E,
    ) -> Result<(), GestureError>
    where
        C: SceneContext + ?Sized,
        E: PaintEngine<Session = S> + ?Sized,
    {
        if let Some(session) = &self.session {
            return Err(GestureError::GestureInProgress(session.side));
        }

        let intent = match classify(
            input,
            self.cursor.polarity,
            scene.is_in_structural_edit_mode(),
        ) {
            Ok(intent) => intent,
            Err(err) => {
                if err == GestureError::StructuralEditActive {
                    self.pending_edit_exit = true;
                }
                debug!("drag_start ignored: {}", err);
                return Err(err);
            }
        };

        let Some(object) = scene.active_object() else {
            return Err(self.report(GestureError::InvalidContext));
        };

        self.cursor.update_projection(&input.pointer, viewport);

        match ensure_paint_mode(scene, object) {
            Ok(true) => self.bus.publish(ToolToUi::PaintModeEntered { object: object.0 }),
            Ok(false) => {}
            Err(err) => return Err(self.report(err)),
        }

        let mut session = GestureSession::new(&intent, input, &self.cursor);
        self.cursor.polarity = session.polarity;
        info!(
            "Gesture started: side={:?}, mode={:?}, polarity={:?}",
            session.side, session.mode, session.polarity
        );

        if session.mode == GestureMode::Painting {
            if let Err(err) = session.start_stroke(object, engine, &self.cursor) {
                // Kept so the rest of the gesture is absorbed
                self.session = Some(session);
                return Err(self.report(err));
            }
        }

        let (mode, polarity) = (session.mode, session.polarity);
        self.session = Some(session);
        self.set_dragging(true);
        self.bus.publish(ToolToUi::ModeChanged { mode, polarity });
        Ok(())
    }

    /// Continue the live gesture.
    pub fn drag_contd<C, E>(
        &mut self,
        input: &GestureInput,
        viewport: &Viewport,
        scene: &C,
        engine: &mut E,
    ) where
        C: SceneContext + ?Sized,
        E: PaintEngine<Session = S> + ?Sized,
    {
        if input.bimanual {
            return;
        }
        self.cursor.update_projection(&input.pointer, viewport);

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.side != input.side || session.canceled || scene.is_in_structural_edit_mode() {
            return;
        }

        let mode = session.mode;
        match mode {
            GestureMode::Painting => {
                session.update_stroke(engine, &self.cursor, input.trigger_pressure);
            }
            GestureMode::AdjustingParameters => {
                let target = session.adjust_target;
                if let Some(value) =
                    session.adjust_parameters(input.pointer_position(), &mut self.cursor, &self.config)
                {
                    self.bus.publish(parameter_changed(target, value));
                }
            }
            GestureMode::Idle => {}
        }
    }

    /// End the live gesture.
    ///
    /// The stroke is finalized when one is open. Polarity is restored and
    /// the session released on every path, including canceled gestures.
    pub fn drag_stop<C, E>(&mut self, input: &GestureInput, scene: &mut C, engine: &mut E)
    where
        C: SceneContext + ?Sized,
        E: PaintEngine<Session = S> + ?Sized,
    {
        if input.bimanual {
            return;
        }

        if self.session.as_ref().is_some_and(|s| s.side != input.side) {
            return;
        }
        let Some(mut session) = self.session.take() else {
            if std::mem::take(&mut self.pending_edit_exit) {
                info!("Exiting structural edit mode");
                scene.exit_structural_edit_mode();
            }
            return;
        };

        if !session.canceled {
            match session.mode {
                GestureMode::Painting => session.stop_stroke(engine),
                GestureMode::AdjustingParameters => {
                    if let Some(value) = session.adjust_parameters(
                        input.pointer_position(),
                        &mut self.cursor,
                        &self.config,
                    ) {
                        self.bus.publish(parameter_changed(session.adjust_target, value));
                    }
                }
                GestureMode::Idle => {}
            }
        }

        self.cursor.polarity = session.original_polarity;
        self.set_dragging(false);
        if !session.canceled {
            self.bus.publish(ToolToUi::ModeChanged {
                mode: GestureMode::Idle,
                polarity: self.cursor.polarity,
            });
        }
        info!("Gesture stopped: side={:?}, canceled={}", session.side, session.canceled);
    }

    /// Select the brush tool.
    ///
    /// While a structural edit mode is active the selection is dropped and
    /// the scene is asked to leave that mode instead.
    pub fn set_brush<C, E>(
        &mut self,
        tool: PaintTool,
        scene: &mut C,
        engine: &mut E,
    ) -> Result<(), GestureError>
    where
        C: SceneContext + ?Sized,
        E: PaintEngine<Session = S> + ?Sized,
    {
        if scene.is_in_structural_edit_mode() {
            scene.exit_structural_edit_mode();
            return Err(GestureError::StructuralEditActive);
        }

        if let Some(object) = scene.active_object() {
            match ensure_paint_mode(scene, object) {
                Ok(true) => self.bus.publish(ToolToUi::PaintModeEntered { object: object.0 }),
                Ok(false) => {}
                Err(err) => return Err(self.report(err)),
            }
        }

        engine.set_tool(tool);
        if self.cursor.tool != tool {
            self.cursor.tool = tool;
            self.bus.publish(ToolToUi::ToolChanged { tool });
        }
        Ok(())
    }

    pub fn set_radius(&mut self, radius: f32) {
        if self.cursor.set_radius(radius) {
            self.bus
                .publish(parameter_changed(AdjustTarget::Radius, self.cursor.radius()));
        }
    }

    pub fn set_strength(&mut self, strength: f32) {
        if self.cursor.set_strength(strength) {
            self.bus
                .publish(parameter_changed(AdjustTarget::Strength, self.cursor.strength()));
        }
    }

    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        if self.cursor.projection_mode != mode {
            self.cursor.projection_mode = mode;
            self.bus.publish(ToolToUi::ProjectionModeChanged { mode });
        }
    }

    /// Apply a command received from the UI.
    pub fn apply_command<C, E>(
        &mut self,
        command: UiToTool,
        scene: &mut C,
        engine: &mut E,
    ) -> Result<(), GestureError>
    where
        C: SceneContext + ?Sized,
        E: PaintEngine<Session = S> + ?Sized,
    {
        debug!("apply_command: {:?}", command);
        match command {
            UiToTool::SetRadius { radius } => self.set_radius(radius),
            UiToTool::SetStrength { strength } => self.set_strength(strength),
            UiToTool::SetTool { tool } => return self.set_brush(tool, scene, engine),
            UiToTool::SetProjectionMode { mode } => self.set_projection_mode(mode),
            UiToTool::SetUseTriggerPressure { enabled } => self.cursor.use_trigger_pressure = enabled,
            UiToTool::SetPenFlip { enabled } => self.cursor.pen_flip = enabled,
        }
        Ok(())
    }

    /// Draw the cursor for one eye. `modifiers` is the live modifier state.
    pub fn render<V: CursorCanvas + ?Sized>(&self, canvas: &mut V, eye: Mat4, modifiers: Modifiers) {
        render_cursor(canvas, eye, &self.cursor, modifiers.ctrl, &self.config);
    }

    fn set_dragging(&mut self, dragging: bool) {
        if self.cursor.is_dragging != dragging {
            self.cursor.is_dragging = dragging;
            self.bus.publish(ToolToUi::DraggingChanged { dragging });
        }
    }

    /// Log a failure and surface it to the user when it is user-visible.
    fn report(&self, err: GestureError) -> GestureError {
        warn!("Gesture failed: {}", err);
        if err.is_user_visible() {
            let message = match &err {
                GestureError::SessionRejected { reason } => reason.clone(),
                other => other.to_string(),
            };
            self.bus.publish(ToolToUi::Warning { message });
        }
        err
    }
}

fn parameter_changed(target: AdjustTarget, value: f32) -> ToolToUi {
    match target {
        AdjustTarget::Radius => ToolToUi::RadiusChanged { radius: value },
        AdjustTarget::Strength => ToolToUi::StrengthChanged { strength: value },
    }
}
