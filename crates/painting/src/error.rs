//! Error types for the paint tool and its collaborators.

use std::fmt;

use thiserror::Error;
use vr_paint_ipc::Side;

use crate::types::ObjectId;

/// Mesh data a paint target lacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingPaintData {
    pub uvs: bool,
    pub materials: bool,
    pub textures: bool,
    pub stencil: bool,
}

impl MissingPaintData {
    pub fn any(&self) -> bool {
        self.uvs || self.materials || self.textures || self.stencil
    }
}

impl fmt::Display for MissingPaintData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.uvs, "UVs"),
            (self.materials, "Materials"),
            (self.textures, "Textures"),
            (self.stencil, "Stencil"),
        ]
        .into_iter()
        .filter_map(|(missing, name)| missing.then_some(name))
        .collect();
        write!(f, "Missing {} detected!", names.join(", "))
    }
}

/// Failures reported by the paint engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("{0}")]
    MissingPaintData(MissingPaintData),

    #[error("Paint engine failure: {0}")]
    Backend(String),
}

/// Failures reported by the scene context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("Object {object:?} cannot enter paint mode: {reason}")]
    PaintModeUnavailable { object: ObjectId, reason: String },
}

/// Reasons a gesture produced no paint or adjustment.
///
/// `SessionRejected` and `InvalidContext` are surfaced to the user as
/// warnings; the others are expected interaction states.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("Stroke could not be started: {reason}")]
    SessionRejected { reason: String },

    #[error("No active object to paint")]
    InvalidContext,

    #[error("Two-handed gestures are not supported by the paint tool")]
    BimanualUnsupported,

    #[error("Structural edit mode is active")]
    StructuralEditActive,

    #[error("A gesture is already in progress on the {0:?} hand")]
    GestureInProgress(Side),
}

impl GestureError {
    /// Whether this error should be reported to the user.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            GestureError::SessionRejected { .. } | GestureError::InvalidContext
        )
    }
}

impl From<EngineError> for GestureError {
    fn from(err: EngineError) -> Self {
        GestureError::SessionRejected {
            reason: err.to_string(),
        }
    }
}

impl From<SceneError> for GestureError {
    fn from(err: SceneError) -> Self {
        GestureError::SessionRejected {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_message() {
        let missing = MissingPaintData {
            uvs: true,
            materials: true,
            ..Default::default()
        };
        assert!(missing.any());
        assert_eq!(missing.to_string(), "Missing UVs, Materials detected!");
        assert!(!MissingPaintData::default().any());
    }

    #[test]
    fn test_engine_error_becomes_rejection() {
        let err: GestureError = EngineError::MissingPaintData(MissingPaintData {
            textures: true,
            ..Default::default()
        })
        .into();
        assert_eq!(
            err,
            GestureError::SessionRejected {
                reason: "Missing Textures detected!".to_string()
            }
        );
        assert!(err.is_user_visible());
    }

    #[test]
    fn test_silent_errors() {
        assert!(!GestureError::BimanualUnsupported.is_user_visible());
        assert!(!GestureError::StructuralEditActive.is_user_visible());
        assert!(!GestureError::GestureInProgress(Side::Left).is_user_visible());
        assert!(GestureError::InvalidContext.is_user_visible());
    }
}
