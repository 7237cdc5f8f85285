//! 콘솔 제안 표시.
//!
//! 오버레이 대신 터미널에 현재 제안/상태 문구를 출력한다.
//! 같은 문구가 연속으로 들어오면 다시 출력하지 않는다.

use chrono::Local;
use screencoach_core::ports::presenter::SuggestionPresenter;
use std::io::Write;
use std::sync::Mutex;

/// 시작 안내 문구
pub const LISTENING_NOTICE: &str = "Screen Coach listening…";

/// 콘솔 표시면: `SuggestionPresenter` 구현
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    current: Mutex<Option<String>>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 표시 중인 문구
    #[cfg(test)]
    pub fn current(&self) -> Option<String> {
        self.current.lock().ok().and_then(|c| c.clone())
    }

    /// 표시 문구 교체. 바뀌었으면 `true`.
    fn replace(&self, text: &str) -> bool {
        let Ok(mut current) = self.current.lock() else {
            return true;
        };
        if current.as_deref() == Some(text) {
            return false;
        }
        *current = Some(text.to_string());
        true
    }
}

impl SuggestionPresenter for ConsolePresenter {
    fn display(&self, text: &str) {
        if !self.replace(text) {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "[{}] {}", Local::now().format("%H:%M:%S"), text);
        let _ = stdout.flush();
    }
}
