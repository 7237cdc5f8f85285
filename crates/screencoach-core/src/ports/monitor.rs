//! 활성 창 조회 포트.
//!
//! 구현: `screencoach-monitor` crate (플랫폼별 FFI / CLI)

use async_trait::async_trait;

/// 현재 포커스된 창 제목 조회 (best-effort)
#[async_trait]
pub trait WindowClassifier: Send + Sync {
    /// 제목을 알 수 없거나 플랫폼 미지원이면 `None`
    async fn active_window_title(&self) -> Option<String>;
}
