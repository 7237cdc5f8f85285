//! 비전 파이프라인 에러 타입.

use screencoach_core::error::CoreError;
use screencoach_core::models::region::Region;
use thiserror::Error;

/// 프레임 전처리 에러
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisionError {
    /// 리댁션 영역이 비트맵 밖으로 벗어남 (클램핑하지 않음)
    #[error("리댁션 영역 {region}이(가) {width}x{height} 화면 범위를 벗어남")]
    OutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },

    /// 비교 대상 프레임 크기 불일치
    #[error("프레임 크기 불일치: 현재 {current:?}, 이전 {previous:?}")]
    DimensionMismatch {
        current: (u32, u32),
        previous: (u32, u32),
    },

    /// 크기 0 이미지
    #[error("빈 이미지는 인코딩할 수 없음")]
    EmptyImage,

    /// 리사이즈 실패
    #[error("리사이즈 실패: {0}")]
    Resize(String),

    /// 압축 인코딩 실패
    #[error("인코딩 실패: {0}")]
    Encode(String),
}

impl From<VisionError> for CoreError {
    fn from(err: VisionError) -> Self {
        CoreError::Vision(err.to_string())
    }
}
