//! Linux 플랫폼: `xdotool`을 통한 포커스 창 제목 조회.
//!
//! Wayland에서는 XWayland 앱만 감지된다. xdotool 미설치/실패는 `None`.

use screencoach_core::error::CoreError;
use std::process::Command;
use tracing::debug;

use crate::window::normalize_title;

/// 포커스된 창 이름
pub fn focused_window_name() -> Result<Option<String>, CoreError> {
    let output = match Command::new("xdotool")
        .args(["getwindowfocus", "getwindowname"])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("xdotool 미설치 - 'sudo apt install xdotool' 실행 필요");
            return Ok(None);
        }
        Err(e) => return Err(CoreError::Internal(format!("xdotool 실행 실패: {e}"))),
    };

    if !output.status.success() {
        debug!(
            "xdotool 실패: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Ok(None);
    }

    Ok(normalize_title(&String::from_utf8_lossy(&output.stdout)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_window_returns_option() {
        // 헤드리스 환경에서는 Ok(None) 또는 실행 에러
        if let Ok(Some(title)) = focused_window_name() {
            assert!(!title.is_empty());
        }
    }
}
