//! # screencoach-vision
//!
//! 프레임 전처리 + 변경 감지 파이프라인.
//! 스크린 캡처, 영역 리댁션, RMS 변경 감지, 리사이즈/손실 압축, 페이로드 다이제스트,
//! 그리고 틱 단위로 이들을 순서대로 실행하는 오케스트레이터를 담당한다.

pub mod capture;
pub mod change;
pub mod encoder;
pub mod error;
pub mod fingerprint;
pub mod pipeline;
pub mod redact;
pub mod resize;

pub use error::VisionError;
pub use pipeline::{CoachPipeline, PipelineSettings, PipelineState, TickOutcome};
