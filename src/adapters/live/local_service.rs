//! Live adapter for the local wallpaper service HTTP API.

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;

use crate::error::WallError;
use crate::ports::wallpaper_service::{
    GenImgRequest, GenImgResponse, ServiceFuture, SetWallpaperRequest, SetWallpaperResponse,
    WallpaperService,
};

const GEN_IMG_PATH: &str = "GenImg";
const SET_WALLPAPER_PATH: &str = "SetWallpaper";

/// Live client that POSTs JSON to the local service.
pub struct LocalServiceClient {
    client: Client,
    base_url: Url,
}

impl LocalServiceClient {
    /// Create a client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self { client: Client::new(), base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// POST `body` and return the status and text of a 2xx reply.
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, String), WallError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "service rejected request");
            return Err(WallError::Api { status: status.as_u16(), message: response_text });
        }
        Ok((status, response_text))
    }
}

impl WallpaperService for LocalServiceClient {
    fn generate_image(&self, request: &GenImgRequest) -> ServiceFuture<'_, GenImgResponse> {
        let request = request.clone();
        Box::pin(async move {
            let (status, response_text) = self.post_json(GEN_IMG_PATH, &request).await?;

            let parsed: GenImgResponse =
                serde_json::from_str(&response_text).map_err(|e| WallError::Api {
                    status: status.as_u16(),
                    message: format!("Failed to parse response: {e}"),
                })?;

            tracing::info!(image_path = %parsed.image_path, "image generated");
            Ok(parsed)
        })
    }

    fn set_wallpaper(
        &self,
        request: &SetWallpaperRequest,
    ) -> ServiceFuture<'_, SetWallpaperResponse> {
        let request = request.clone();
        Box::pin(async move {
            let (_, body) = self.post_json(SET_WALLPAPER_PATH, &request).await?;
            tracing::info!(image_path = %request.image_path, "wallpaper set");
            Ok(SetWallpaperResponse { body })
        })
    }
}
