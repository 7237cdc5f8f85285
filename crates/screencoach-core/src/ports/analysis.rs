//! 외부 분석 서비스 포트.
//!
//! 인코딩된 프레임 + 프롬프트를 비전 모델에 보내고 짧은 제안 텍스트를 받는다.
//! 구현: `screencoach-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;

/// 프레임 분석기
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// 프레임 분석 요청.
    ///
    /// 반환 텍스트는 trim된 상태. 빈 문자열은 "제안 없음"이며 에러가 아니다.
    async fn analyze(
        &self,
        prompt: &str,
        payload: &[u8],
        media_type: &str,
    ) -> Result<String, CoreError>;

    /// 제공자 이름 (로그용)
    fn provider_name(&self) -> &str;
}
