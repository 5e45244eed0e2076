//! Wallpaper service port: wire types for the two service endpoints.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::WallError;

/// Body of `POST /GenImg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenImgRequest {
    /// Address of the image generation backend.
    pub server: String,
    /// Port of the image generation backend.
    pub port: u16,
    /// Text prompt describing the desired image.
    pub prompt: String,
    /// Directory on the service host where the image is written.
    #[serde(rename = "OutputDir")]
    pub output_dir: String,
}

/// Body returned by `POST /GenImg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenImgResponse {
    /// Path of the generated image on the service host.
    pub image_path: String,
    /// Base64-encoded image bytes.
    pub image_content: String,
}

/// Body of `POST /SetWallpaper`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWallpaperRequest {
    /// Image path as seen by the service host.
    pub image_path: String,
}

/// Raw reply from `POST /SetWallpaper`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWallpaperResponse {
    /// Response body text, possibly empty.
    pub body: String,
}

/// Boxed future type returned by [`WallpaperService`] methods.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, WallError>> + Send + 'a>>;

/// The local service that generates images and applies wallpapers.
pub trait WallpaperService: Send + Sync {
    /// Request generation of an image.
    fn generate_image(&self, request: &GenImgRequest) -> ServiceFuture<'_, GenImgResponse>;

    /// Set an image as the desktop wallpaper.
    fn set_wallpaper(
        &self,
        request: &SetWallpaperRequest,
    ) -> ServiceFuture<'_, SetWallpaperResponse>;
}
