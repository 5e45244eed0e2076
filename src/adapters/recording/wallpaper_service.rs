//! Recording adapter for the `WallpaperService` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::WALLPAPER_PORT;
use crate::ports::wallpaper_service::{
    GenImgRequest, GenImgResponse, ServiceFuture, SetWallpaperRequest, SetWallpaperResponse,
    WallpaperService,
};

/// Records service interactions while delegating to an inner implementation.
pub struct RecordingWallpaperService {
    inner: Box<dyn WallpaperService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingWallpaperService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn WallpaperService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl WallpaperService for RecordingWallpaperService {
    fn generate_image(&self, request: &GenImgRequest) -> ServiceFuture<'_, GenImgResponse> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.generate_image(&request).await;
            record_result(&self.recorder, WALLPAPER_PORT, "generate_image", &request, &result);
            result
        })
    }

    fn set_wallpaper(
        &self,
        request: &SetWallpaperRequest,
    ) -> ServiceFuture<'_, SetWallpaperResponse> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.set_wallpaper(&request).await;
            record_result(&self.recorder, WALLPAPER_PORT, "set_wallpaper", &request, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WallError;

    struct StubService;

    impl WallpaperService for StubService {
        fn generate_image(&self, request: &GenImgRequest) -> ServiceFuture<'_, GenImgResponse> {
            let image_path = format!("C:\\out\\{}.png", request.prompt);
            Box::pin(async move {
                Ok(GenImgResponse { image_path, image_content: "AAEC".into() })
            })
        }

        fn set_wallpaper(
            &self,
            _request: &SetWallpaperRequest,
        ) -> ServiceFuture<'_, SetWallpaperResponse> {
            Box::pin(async { Err(WallError::Api { status: 404, message: "no such file".into() }) })
        }
    }

    #[tokio::test]
    async fn records_ok_and_err_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "rec", "abc")));
        let service = RecordingWallpaperService::new(Box::new(StubService), Arc::clone(&recorder));

        let request = GenImgRequest {
            server: "10.176.33.52".into(),
            port: 7860,
            prompt: "fox".into(),
            output_dir: "C:\\out".into(),
        };
        let response = service.generate_image(&request).await.unwrap();
        assert_eq!(response.image_path, "C:\\out\\fox.png");

        let err = service
            .set_wallpaper(&SetWallpaperRequest { image_path: "missing.png".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, WallError::Api { status: 404, .. }));

        drop(service);
        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette: crate::cassette::format::Cassette =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cassette.interactions.len(), 2);

        let generated = &cassette.interactions[0];
        assert_eq!(generated.method, "generate_image");
        assert_eq!(generated.input["OutputDir"], "C:\\out");
        assert_eq!(generated.output["Ok"]["ImagePath"], "C:\\out\\fox.png");

        let failed = &cassette.interactions[1];
        assert_eq!(failed.method, "set_wallpaper");
        assert_eq!(failed.input["imagePath"], "missing.png");
        assert_eq!(failed.output["Err"]["status"], 404);
        assert_eq!(failed.output["Err"]["message"], "no such file");
    }
}
