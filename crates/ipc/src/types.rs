//! Enumerations describing tool state, shared between the tool and the UI.

use serde::{Deserialize, Serialize};

/// How the current gesture is being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureMode {
    #[default]
    Idle,
    Painting,
    AdjustingParameters,
}

/// Normal vs. inverted effect of a stroke (e.g. add vs. subtract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokePolarity {
    #[default]
    Normal,
    Inverted,
}

impl StrokePolarity {
    /// The opposite polarity.
    pub fn toggled(self) -> Self {
        match self {
            StrokePolarity::Normal => StrokePolarity::Inverted,
            StrokePolarity::Inverted => StrokePolarity::Normal,
        }
    }

    pub fn is_inverted(self) -> bool {
        self == StrokePolarity::Inverted
    }
}

/// How the 3D cursor is mapped onto the paint target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Cast from the pointer through the active viewport.
    #[default]
    Raycast,
    /// Use the pointer's 3D position directly.
    Proximity,
}

/// Which brush parameter an adjustment gesture edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdjustTarget {
    #[default]
    Radius,
    Strength,
}

/// Texture paint brush tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaintTool {
    #[default]
    Draw,
    Soften,
    Smear,
    Clone,
    Fill,
    Mask,
    Other,
}

impl PaintTool {
    /// Whether the cursor color for this tool encodes stroke polarity.
    pub fn shows_polarity(self) -> bool {
        !matches!(self, PaintTool::Other)
    }
}
