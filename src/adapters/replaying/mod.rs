//! Replaying adapters that serve recorded interactions from cassettes.

pub mod wallpaper_service;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::WallError;

/// Retrieve the next recorded output for a given port and method.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, WallError> {
    let mut guard =
        replayer.lock().map_err(|e| WallError::Replay(format!("replayer lock poisoned: {e}")))?;
    let interaction = guard.next_interaction(port, method).map_err(WallError::Replay)?;
    Ok(interaction.output)
}

/// Deserialize a replayed output recorded as `{"Ok": ..}` or `{"Err": ..}`.
///
/// A recorded service error comes back as [`WallError::Api`]; any other
/// recorded error as [`WallError::Replay`] carrying its message.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, WallError> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        return Err(WallError::from_recorded(err_val));
    }
    let value = match output.get("Ok").or_else(|| output.get("ok")) {
        Some(ok_val) => ok_val.clone(),
        None => output,
    };
    serde_json::from_value(value)
        .map_err(|e| WallError::Replay(format!("Recorded output does not match: {e}")))
}
