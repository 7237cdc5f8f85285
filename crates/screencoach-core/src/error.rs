//! Screen Coach 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 에러 타입에서 `From<_> for CoreError`로 변환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 직렬화, 설정, 캡처, 분석 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 스크린 캡처 실패
    #[error("캡처 에러: {0}")]
    Capture(String),

    /// 외부 분석 서비스 실패 (응답 형식 오류 포함)
    #[error("분석 에러: {0}")]
    Analysis(String),

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 이미지 전처리 실패 (리댁션 범위 초과, 인코딩 실패 등)
    #[error("이미지 처리 에러: {0}")]
    Vision(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
