//! 스크린 캡처.
//!
//! xcap 기반 주 모니터 캡처. 캡처는 블로킹 호출이므로 `spawn_blocking`에서 실행한다.

use async_trait::async_trait;
use image::{DynamicImage, RgbImage};
use screencoach_core::error::CoreError;
use screencoach_core::ports::vision::FrameSource;
use tracing::debug;
use xcap::Monitor;

/// 스크린 캡처: xcap 기반
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenCapture;

impl ScreenCapture {
    pub fn new() -> Self {
        Self
    }

    /// 주 모니터 캡처 (블로킹). 주 모니터를 알 수 없으면 첫 번째 모니터.
    pub fn capture_primary(&self) -> Result<RgbImage, CoreError> {
        let monitors =
            Monitor::all().map_err(|e| CoreError::Capture(format!("모니터 목록 조회 실패: {e}")))?;

        let primary = monitors
            .iter()
            .position(|m| m.is_primary().unwrap_or(false))
            .unwrap_or(0);
        let monitor = monitors
            .into_iter()
            .nth(primary)
            .ok_or_else(|| CoreError::Capture("모니터를 찾을 수 없음".to_string()))?;

        let image = monitor
            .capture_image()
            .map_err(|e| CoreError::Capture(format!("스크린 캡처 실패: {e}")))?;

        debug!("스크린 캡처 완료: {}x{}", image.width(), image.height());

        Ok(DynamicImage::ImageRgba8(image).into_rgb8())
    }
}

#[async_trait]
impl FrameSource for ScreenCapture {
    async fn capture(&self) -> Result<RgbImage, CoreError> {
        let capture = *self;
        tokio::task::spawn_blocking(move || capture.capture_primary())
            .await
            .map_err(|e| CoreError::Internal(format!("캡처 태스크 실패: {e}")))?
    }
}
