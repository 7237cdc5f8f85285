//! 프레임(스크린샷) 전처리 모델.
//!
//! 리댁션 방식, 출력 포맷, 인코딩된 프레임, 페이로드 다이제스트를 정의.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 리댁션 방식
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RedactionMode {
    /// 가우시안 블러 (radius = 표준편차, 픽셀 단위)
    Blur { radius: f32 },
    /// 단색 채우기 (RGB)
    Fill { color: [u8; 3] },
}

impl Default for RedactionMode {
    fn default() -> Self {
        Self::Fill { color: [0, 0, 0] }
    }
}

/// 전송용 손실 압축 포맷
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JPEG: 기본/폴백 포맷
    #[default]
    Jpeg,
    /// WebP (lossy)
    #[serde(rename = "webp")]
    WebP,
}

impl OutputFormat {
    /// 포맷 이름 해석: (포맷, 폴백 여부) 반환. 지원하지 않는 이름은 JPEG.
    pub fn from_name(name: &str) -> (Self, bool) {
        match name.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => (Self::Jpeg, false),
            "webp" => (Self::WebP, false),
            _ => (Self::Jpeg, true),
        }
    }

    /// MIME 타입
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// 짧은 포맷 이름
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 인코딩 완료된 프레임 (생성 후 불변)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    /// 압축된 이미지 바이트
    pub data: Vec<u8>,
    /// 인코딩 포맷
    pub format: OutputFormat,
    /// 리사이즈 후 너비
    pub width: u32,
    /// 리사이즈 후 높이
    pub height: u32,
}

impl EncodedFrame {
    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 인코딩된 페이로드의 SHA-256 다이제스트 (중복 전송 방지용)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// 로그용 앞 12자리
    pub fn short(&self) -> String {
        self.to_string()[..12].to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}
