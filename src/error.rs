//! Unified error type for wallgen.

use thiserror::Error;

/// Errors that can occur while talking to the wallpaper service.
#[derive(Debug, Error)]
pub enum WallError {
    /// The service answered with a non-success status or an undecodable body.
    #[error("Service error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or decode failure.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The returned image content could not be decoded or converted.
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// The service reported no path for the generated image.
    #[error("Service returned an empty image path")]
    EmptyImagePath,

    /// A cassette could not serve the requested interaction.
    #[error("Replay error: {0}")]
    Replay(String),
}

impl WallError {
    /// Cassette form of this error. `Api` keeps its status so replay can
    /// rebuild it; every other variant is stored as its message.
    #[must_use]
    pub fn to_recorded(&self) -> serde_json::Value {
        match self {
            Self::Api { status, message } => {
                serde_json::json!({ "status": status, "message": message })
            }
            other => serde_json::Value::String(other.to_string()),
        }
    }

    /// Rebuild an error from its cassette form.
    #[must_use]
    pub fn from_recorded(value: &serde_json::Value) -> Self {
        let status = value.get("status").and_then(serde_json::Value::as_u64);
        let message = value.get("message").and_then(serde_json::Value::as_str);
        match (status.and_then(|s| u16::try_from(s).ok()), message) {
            (Some(status), Some(message)) => Self::Api { status, message: message.to_string() },
            _ => Self::Replay(value.as_str().unwrap_or("replayed error").to_string()),
        }
    }
}
