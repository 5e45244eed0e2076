//! Recording adapters that capture interactions to cassettes.

pub mod wallpaper_service;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::WallError;

/// Record a `Result<T, WallError>` interaction using the Ok/Err JSON convention.
///
/// Serialization or lock failures are logged and the interaction is skipped;
/// they never affect the result returned to the caller.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, WallError>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = match serde_json::to_value(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(port, method, "failed to serialize recording input: {e}");
            return;
        }
    };

    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "Ok": inner }),
            Err(e) => {
                tracing::warn!(port, method, "failed to serialize recorded result: {e}");
                return;
            }
        },
        Err(e) => serde_json::json!({ "Err": e.to_recorded() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(e) => tracing::warn!(port, method, "recorder lock poisoned: {e}"),
    }
}
