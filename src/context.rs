//! Selects the live, recording, or replaying wallpaper service.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reqwest::Url;

use crate::adapters::live::local_service::LocalServiceClient;
use crate::adapters::recording::wallpaper_service::RecordingWallpaperService;
use crate::adapters::replaying::wallpaper_service::ReplayingWallpaperService;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::WALLPAPER_PORT;
use crate::error::WallError;
use crate::ports::WallpaperService;

/// The wallpaper service selected for this run: live, recording, or replaying.
pub struct ServiceContext {
    /// Service that handles generation and wallpaper calls.
    pub service: Box<dyn WallpaperService>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context talking to the service at `base_url`.
    #[must_use]
    pub fn live(base_url: Url) -> Self {
        Self { service: Box::new(LocalServiceClient::new(base_url)) }
    }

    /// Create a recording context that wraps the live client with a recorder.
    ///
    /// The cassette is written under `.wallgen/cassettes/<timestamp>/`.
    #[must_use]
    pub fn recording(base_url: Url) -> (Self, RecordingSession) {
        let live_ctx = Self::live(base_url);

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".wallgen/cassettes")
            .join(&timestamp)
            .join(format!("{WALLPAPER_PORT}.cassette.yaml"));
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-{WALLPAPER_PORT}"),
            get_commit_hash(),
        )));

        let service = RecordingWallpaperService::new(live_ctx.service, Arc::clone(&recorder));

        (Self { service: Box::new(service) }, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, WallError> {
        let replayer = load_cassette(path)
            .map_err(|e| WallError::Config(format!("Failed to load cassette: {e}")))?;
        let service = ReplayingWallpaperService::new(Arc::new(Mutex::new(replayer)));
        Ok(Self { service: Box::new(service) })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
