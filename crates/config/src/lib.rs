//! Shared configuration for the VR texture-paint tool
//!
//! This crate provides the single source of truth for brush limits, the
//! spatial-to-brush-unit scales used by parameter adjustment, and cursor
//! display settings.

use serde::{Deserialize, Serialize};
use vr_paint_ipc::ProjectionMode;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Max paint radius in brush units
pub const MAX_RADIUS: f32 = 500.0;

/// Radius of a freshly created tool
pub const DEFAULT_RADIUS: f32 = 100.0;

/// Strength of a freshly created tool
pub const DEFAULT_STRENGTH: f32 = 1.0;

/// World units per brush unit (1/100 * 0.05)
pub const BRUSH_SCALE: f32 = 1.0 / 100.0 * 0.05;

/// World units of controller displacement that span the full strength range
pub const STRENGTH_SCALE: f32 = 0.25;

/// Alpha of the raycast-mode ring
pub const RING_OPACITY: f32 = 0.8;

/// Alpha of the proximity-mode ball
pub const BALL_OPACITY: f32 = 0.1;

/// Segments used to tessellate cursor rings
pub const CIRCLE_SEGMENTS: u32 = 100;

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// Paint tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct PaintToolConfig {
    /// Upper bound for the brush radius
    pub max_radius: f32,
    /// Initial brush radius
    pub default_radius: f32,
    /// Initial brush strength
    pub default_strength: f32,
    /// World units per brush unit, used for radius adjustment and ring size
    pub brush_scale: f32,
    /// World units of displacement per full strength
    pub strength_scale: f32,
    /// Initial cursor projection mode
    pub projection: ProjectionMode,
    /// Use trigger pressure (or brush strength) as stroke pressure
    pub use_trigger_pressure: bool,
    /// Flip the effect of every stroke
    pub pen_flip: bool,
    /// Radius of the optional inner ring, in world units
    pub inner_ring_radius: Option<f32>,
    /// Alpha of the raycast ring
    pub ring_opacity: f32,
    /// Alpha of the proximity ball
    pub ball_opacity: f32,
    /// Ring tessellation
    pub circle_segments: u32,
}

impl Default for PaintToolConfig {
    fn default() -> Self {
        Self {
            max_radius: MAX_RADIUS,
            default_radius: DEFAULT_RADIUS,
            default_strength: DEFAULT_STRENGTH,
            brush_scale: BRUSH_SCALE,
            strength_scale: STRENGTH_SCALE,
            projection: ProjectionMode::Raycast,
            use_trigger_pressure: true,
            pen_flip: false,
            inner_ring_radius: None,
            ring_opacity: RING_OPACITY,
            ball_opacity: BALL_OPACITY,
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

impl PaintToolConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `VR_PAINT_PROJECTION` and `VR_PAINT_TRIGGER_PRESSURE`.
    ///
    /// Unrecognized values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        match lookup("VR_PAINT_PROJECTION").as_deref() {
            Some("raycast") => self.projection = ProjectionMode::Raycast,
            Some("proximity") => self.projection = ProjectionMode::Proximity,
            _ => {}
        }
        match lookup("VR_PAINT_TRIGGER_PRESSURE").as_deref() {
            Some("1") | Some("true") => self.use_trigger_pressure = true,
            Some("0") | Some("false") => self.use_trigger_pressure = false,
            _ => {}
        }
    }

    /// Reject configs that would break clamping or scaling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_radius", self.max_radius),
            ("brush_scale", self.brush_scale),
            ("strength_scale", self.strength_scale),
        ];
        for (field, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if !(0.0..=self.max_radius).contains(&self.default_radius) {
            return Err(ConfigError::InvalidValue {
                field: "default_radius",
                value: self.default_radius,
            });
        }
        if !(0.0..=1.0).contains(&self.default_strength) {
            return Err(ConfigError::InvalidValue {
                field: "default_strength",
                value: self.default_strength,
            });
        }
        Ok(())
    }

    /// Clamp a radius into `[0, max_radius]`. NaN maps to 0.
    ///
    /// Never panics, even on a config that fails [`validate`](Self::validate).
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.min(self.max_radius).max(0.0)
    }

    /// Clamp a strength into `[0, 1]`. NaN maps to 0.
    pub fn clamp_strength(&self, strength: f32) -> f32 {
        strength.min(1.0).max(0.0)
    }
}
