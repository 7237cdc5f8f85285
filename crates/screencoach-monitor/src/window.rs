//! 활성 창 제목 조회.
//!
//! `WindowClassifier` 포트 구현. 플랫폼 API 호출은 블로킹이므로
//! `spawn_blocking`에서 실행하고, 모든 실패는 `None`으로 흡수한다.

use async_trait::async_trait;
use screencoach_core::error::CoreError;
use screencoach_core::ports::monitor::WindowClassifier;
use tracing::debug;

/// 활성 창 추적기: `WindowClassifier` 포트 구현
#[derive(Debug, Default, Clone, Copy)]
pub struct ActiveWindowTracker;

impl ActiveWindowTracker {
    pub fn new() -> Self {
        Self
    }

    /// 플랫폼별 조회 (블로킹)
    pub fn query_blocking() -> Result<Option<String>, CoreError> {
        #[cfg(target_os = "macos")]
        {
            crate::macos::frontmost_app_name()
        }
        #[cfg(target_os = "windows")]
        {
            crate::windows::foreground_window_title()
        }
        #[cfg(target_os = "linux")]
        {
            crate::linux::focused_window_name()
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Ok(None)
        }
    }
}

#[async_trait]
impl WindowClassifier for ActiveWindowTracker {
    async fn active_window_title(&self) -> Option<String> {
        let result = tokio::task::spawn_blocking(Self::query_blocking)
            .await
            .map_err(|e| CoreError::Internal(format!("창 조회 태스크 실패: {e}")))
            .and_then(|r| r);

        match result {
            Ok(title) => title,
            Err(e) => {
                debug!("활성 창 조회 실패 (무시): {e}");
                None
            }
        }
    }
}

/// 명령 출력/API 결과를 제목으로 정리: 공백만 있으면 `None`
pub(crate) fn normalize_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
