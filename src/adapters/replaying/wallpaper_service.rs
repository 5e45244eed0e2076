//! Replaying adapter for the `WallpaperService` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::WALLPAPER_PORT;
use crate::ports::wallpaper_service::{
    GenImgRequest, GenImgResponse, ServiceFuture, SetWallpaperRequest, SetWallpaperResponse,
    WallpaperService,
};

/// Serves recorded service results from a cassette.
pub struct ReplayingWallpaperService {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingWallpaperService {
    /// Create a replaying service backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl WallpaperService for ReplayingWallpaperService {
    fn generate_image(&self, _request: &GenImgRequest) -> ServiceFuture<'_, GenImgResponse> {
        let result = next_output(&self.replayer, WALLPAPER_PORT, "generate_image")
            .and_then(replay_result::<GenImgResponse>);
        Box::pin(async move { result })
    }

    fn set_wallpaper(
        &self,
        _request: &SetWallpaperRequest,
    ) -> ServiceFuture<'_, SetWallpaperResponse> {
        let result = next_output(&self.replayer, WALLPAPER_PORT, "set_wallpaper")
            .and_then(replay_result::<SetWallpaperResponse>);
        Box::pin(async move { result })
    }
}
