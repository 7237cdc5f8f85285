//! # screencoach-network
//!
//! 외부 AI 비전 분석 API 어댑터.
//! 인코딩된 프레임과 프롬프트를 OpenAI 호환 / Anthropic API로 보내고
//! 코칭 제안 텍스트를 받는다.

pub mod analysis_client;

pub use analysis_client::RemoteAnalysisClient;
