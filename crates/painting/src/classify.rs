//! Gesture interpretation, decided once when a gesture starts.

use vr_paint_ipc::{AdjustTarget, GestureMode, StrokePolarity};

use crate::error::GestureError;
use crate::types::GestureInput;

/// How a gesture will be handled for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    /// Paint a stroke with the given (latched) polarity
    Paint { polarity: StrokePolarity },
    /// Rescale a brush parameter; polarity is left untouched
    Adjust {
        target: AdjustTarget,
        polarity: StrokePolarity,
    },
}

impl GestureIntent {
    pub fn mode(&self) -> GestureMode {
        match self {
            GestureIntent::Paint { .. } => GestureMode::Painting,
            GestureIntent::Adjust { .. } => GestureMode::AdjustingParameters,
        }
    }

    pub fn polarity(&self) -> StrokePolarity {
        match *self {
            GestureIntent::Paint { polarity } | GestureIntent::Adjust { polarity, .. } => polarity,
        }
    }
}

/// Classify a gesture from the input sampled at its start.
///
/// - Bimanual input is rejected.
/// - While a structural edit mode is active the gesture is redirected.
/// - Fine-adjust (shift) selects parameter adjustment: radius alone,
///   strength when the polarity modifier (ctrl) is also held.
/// - Otherwise the gesture paints, with polarity toggled from `prior`
///   when the polarity modifier is held.
pub fn classify(
    input: &GestureInput,
    prior: StrokePolarity,
    structural_edit_active: bool,
) -> Result<GestureIntent, GestureError> {
    if input.bimanual {
        return Err(GestureError::BimanualUnsupported);
    }
    if structural_edit_active {
        return Err(GestureError::StructuralEditActive);
    }

    let modifiers = input.modifiers;
    if modifiers.shift {
        let target = if modifiers.ctrl {
            AdjustTarget::Strength
        } else {
            AdjustTarget::Radius
        };
        return Ok(GestureIntent::Adjust {
            target,
            polarity: prior,
        });
    }

    let polarity = if modifiers.ctrl { prior.toggled() } else { prior };
    Ok(GestureIntent::Paint { polarity })
}
