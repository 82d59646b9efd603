//! Main IPC message enums for communication between the paint tool and UI.

use serde::{Deserialize, Serialize};

use crate::types::{GestureMode, PaintTool, ProjectionMode, StrokePolarity};

/// Messages from the paint tool to the UI.
///
/// Published whenever observable brush or gesture state changes so menus
/// and HUD elements can refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ToolToUi {
    /// Brush radius changed (brush units)
    RadiusChanged { radius: f32 },

    /// Brush strength changed (0.0-1.0)
    StrengthChanged { strength: f32 },

    /// Gesture interpretation changed
    ModeChanged {
        mode: GestureMode,
        polarity: StrokePolarity,
    },

    /// Drag state changed
    DraggingChanged { dragging: bool },

    /// Active brush tool changed
    ToolChanged { tool: PaintTool },

    /// Cursor projection mode changed
    ProjectionModeChanged { mode: ProjectionMode },

    /// Target object was switched into paint mode
    PaintModeEntered { object: u64 },

    /// User-visible warning (e.g. a stroke could not be started)
    Warning { message: String },
}

/// Messages from the UI to the paint tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToTool {
    /// Set brush radius (brush units, clamped by the tool)
    SetRadius { radius: f32 },

    /// Set brush strength (clamped to 0.0-1.0 by the tool)
    SetStrength { strength: f32 },

    /// Select the active brush tool
    SetTool { tool: PaintTool },

    /// Switch between raycast and proximity cursor mapping
    SetProjectionMode { mode: ProjectionMode },

    /// Use trigger pressure (true) or brush strength (false) as stroke pressure
    SetUseTriggerPressure { enabled: bool },

    /// Flip the effect of every stroke
    SetPenFlip { enabled: bool },
}
