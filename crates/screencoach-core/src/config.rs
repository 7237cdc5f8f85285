//! 애플리케이션 설정 구조체.
//!
//! 캡처 주기, 창 필터, 리댁션, 인코딩, 외부 분석 API 설정 등
//! 런타임 설정을 정의한다. JSON 파일에서 로드한 뒤 CLI 인자로 오버라이드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;
use crate::models::frame::{OutputFormat, RedactionMode};

/// 기본 코칭 프롬프트
pub const DEFAULT_PROMPT: &str = "You are Screen Coach, a concise assistant observing the user's current task. \
Provide a short actionable suggestion (max 2 sentences) based on the visible screen. \
Focus on helpful tips, avoid repeating yourself unless something significant changes.";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 캡처 주기/창 필터 설정
    pub capture: CaptureConfig,
    /// 리댁션 설정
    #[serde(default)]
    pub privacy: PrivacyConfig,
    /// 변경 감지/인코딩 설정
    pub vision: VisionConfig,
    /// 외부 분석 API 설정
    pub analysis: AnalysisConfig,
}

// ============================================================
// 캡처 설정
// ============================================================

/// 캡처 설정: 틱 주기, 활성 창 키워드 필터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// 틱 간격 (초, 소수 허용)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: f64,
    /// 활성 창 제목 키워드 (비어 있으면 필터 없음, 대소문자 무시)
    #[serde(default)]
    pub window_keywords: Vec<String>,
}

// ============================================================
// 프라이버시 설정
// ============================================================

/// 리댁션 방식 선택
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionStyle {
    /// 단색 채우기
    #[default]
    Fill,
    /// 가우시안 블러
    Blur,
}

/// 프라이버시 설정: 전송 전 가릴 화면 영역
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyConfig {
    /// `left,top,right,bottom;...` 형식 영역 목록
    #[serde(default)]
    pub redact: String,
    /// 리댁션 방식
    #[serde(default)]
    pub style: RedactionStyle,
    /// 블러 반경 (style=Blur)
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f32,
    /// 채우기 색상 (style=Fill)
    #[serde(default)]
    pub fill_color: [u8; 3],
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            redact: String::new(),
            style: RedactionStyle::Fill,
            blur_radius: default_blur_radius(),
            fill_color: [0, 0, 0],
        }
    }
}

impl PrivacyConfig {
    /// 설정된 스타일의 리댁션 모드
    pub fn redaction_mode(&self) -> RedactionMode {
        match self.style {
            RedactionStyle::Fill => RedactionMode::Fill {
                color: self.fill_color,
            },
            RedactionStyle::Blur => RedactionMode::Blur {
                radius: self.blur_radius,
            },
        }
    }
}

// ============================================================
// 비전 설정
// ============================================================

/// 비전 설정: 변경 감지 임계값, 리사이즈 한도, 압축 품질
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// RMS 변경 임계값 (이 값 이상이면 유의미한 변경)
    #[serde(default = "default_change_threshold")]
    pub change_threshold: f64,
    /// 최대 출력 너비 (픽셀)
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    /// 최대 출력 높이 (픽셀)
    #[serde(default = "default_max_height")]
    pub max_height: u32,
    /// 압축 품질 (1-100)
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// WebP 우선 (false면 JPEG)
    #[serde(default = "default_true")]
    pub prefer_webp: bool,
}

impl VisionConfig {
    /// 전송 포맷
    pub fn output_format(&self) -> OutputFormat {
        if self.prefer_webp {
            OutputFormat::WebP
        } else {
            OutputFormat::Jpeg
        }
    }
}

// ============================================================
// 분석 API 설정
// ============================================================

/// AI API 제공자 타입: 요청/응답 형식과 인증 헤더 결정
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiProviderType {
    /// Anthropic Claude API: `x-api-key` 헤더 + `/v1/messages` 형식
    Anthropic,
    /// OpenAI 호환 API: `Authorization: Bearer` 헤더 + `/v1/chat/completions` 형식
    #[default]
    OpenAi,
    /// 기타 제공자: Bearer 인증 + OpenAI 요청 형식, 범용 응답 파싱
    Generic,
}

/// 외부 AI API 엔드포인트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalApiEndpoint {
    /// API URL (예: "https://api.openai.com/v1/chat/completions")
    pub endpoint: String,
    /// API 키 (비어 있으면 환경변수에서 주입)
    #[serde(default)]
    pub api_key: String,
    /// 모델 이름
    pub model: Option<String>,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
    /// AI 제공자 타입
    #[serde(default)]
    pub provider_type: AiProviderType,
    /// 응답 최대 토큰 수
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

/// 분석 설정: 엔드포인트 + 프롬프트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 외부 API 엔드포인트
    pub api: ExternalApiEndpoint,
    /// 프레임과 함께 보낼 프롬프트
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            capture: CaptureConfig {
                interval_secs: default_interval_secs(),
                window_keywords: Vec::new(),
            },
            privacy: PrivacyConfig::default(),
            vision: VisionConfig {
                change_threshold: default_change_threshold(),
                max_width: default_max_width(),
                max_height: default_max_height(),
                quality: default_quality(),
                prefer_webp: true,
            },
            analysis: AnalysisConfig {
                api: ExternalApiEndpoint {
                    endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                    api_key: String::new(),
                    model: Some("gpt-4o-mini".to_string()),
                    timeout_secs: default_api_timeout_secs(),
                    provider_type: AiProviderType::OpenAi,
                    max_output_tokens: default_max_output_tokens(),
                },
                prompt: default_prompt(),
            },
        }
    }

    /// 틱 간격을 Duration으로 반환
    ///
    /// `validate`를 통과한 설정이면 그대로 변환된다. 표현할 수 없는 값은 기본 간격.
    pub fn tick_interval(&self) -> Duration {
        interval_duration(self.capture.interval_secs)
            .unwrap_or_else(|| Duration::from_secs_f64(default_interval_secs()))
    }

    /// 실행 전 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if interval_duration(self.capture.interval_secs).is_none() {
            return Err(invalid(
                "capture.interval_secs",
                "0보다 크고 표현 가능한 초 단위 값이어야 함",
            ));
        }
        let threshold = self.vision.change_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(invalid("vision.change_threshold", "0 이상이어야 함"));
        }
        if self.vision.max_width == 0 || self.vision.max_height == 0 {
            return Err(invalid("vision.max_width/max_height", "0보다 커야 함"));
        }
        if !(1..=100).contains(&self.vision.quality) {
            return Err(invalid("vision.quality", "1~100 범위여야 함"));
        }
        let radius = self.privacy.blur_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid("privacy.blur_radius", "0보다 커야 함"));
        }
        if self.analysis.api.endpoint.trim().is_empty() {
            return Err(invalid("analysis.api.endpoint", "비어 있음"));
        }
        Ok(())
    }
}

/// 초 단위 간격 → 0이 아닌 Duration. NaN, 음수, 오버플로, 0ns 절삭은 `None`.
fn interval_duration(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|d| !d.is_zero())
}

fn invalid(field: &str, message: &str) -> CoreError {
    CoreError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_true() -> bool {
    true
}
fn default_interval_secs() -> f64 {
    2.0
}
fn default_blur_radius() -> f32 {
    25.0
}
fn default_change_threshold() -> f64 {
    8.0
}
fn default_max_width() -> u32 {
    1280
}
fn default_max_height() -> u32 {
    720
}
fn default_quality() -> u8 {
    80
}
fn default_api_timeout_secs() -> u64 {
    30
}
fn default_max_output_tokens() -> u32 {
    200
}
fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}
