//! IPC message protocol for the VR texture-paint tool
//!
//! Defines the shared state enums and the message types exchanged between
//! the interaction core and whatever UI front end observes it.

pub mod error;
pub mod input;
pub mod messages;
pub mod types;

pub use error::IpcError;
pub use input::*;
pub use messages::*;
pub use types::*;

impl ToolToUi {
    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl UiToTool {
    /// Parse a command from the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            return Err(IpcError::EmptyCommand);
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}
