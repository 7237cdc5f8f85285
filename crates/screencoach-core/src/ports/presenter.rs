//! 제안 표시 포트.
//!
//! 구현: `screencoach-app` crate (콘솔 오버레이)

/// 제안/상태 텍스트 표시면: 호출자를 블로킹하지 않아야 한다
pub trait SuggestionPresenter: Send + Sync {
    /// 현재 표시 중인 텍스트를 교체
    fn display(&self, text: &str);
}
