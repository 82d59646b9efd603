//! Errors raised while encoding tool notifications or decoding UI commands.

/// Failure to move a message across the tool/UI boundary.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// The JSON was malformed or did not match a known message
    #[error("Malformed paint tool message: {0}")]
    Json(#[from] serde_json::Error),

    /// The UI sent a blank command
    #[error("Empty paint tool command")]
    EmptyCommand,
}
