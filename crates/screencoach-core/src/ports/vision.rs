//! 비전(이미지 입력) 포트.
//!
//! 구현: `screencoach-vision` crate (xcap)

use async_trait::async_trait;
use image::RgbImage;

use crate::error::CoreError;

/// 프레임 소스: 호출 시점의 화면을 RGB 비트맵으로 반환
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// 화면 캡처. 실패는 틱 단위로 보고되고 루프는 계속된다.
    async fn capture(&self) -> Result<RgbImage, CoreError>;
}
