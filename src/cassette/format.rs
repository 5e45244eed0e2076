//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made at.
    pub commit: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

/// One call through a port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the session, starting at zero.
    pub seq: u64,
    /// Port name, e.g. `wallpaper_service`.
    pub port: String,
    /// Method name on the port.
    pub method: String,
    /// Serialized call arguments.
    pub input: serde_json::Value,
    /// `{"Ok": value}` or `{"Err": "message"}`.
    pub output: serde_json::Value,
}
