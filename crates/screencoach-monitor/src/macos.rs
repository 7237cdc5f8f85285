//! macOS 플랫폼: 최전면 앱 이름 조회.
//!
//! `osascript`로 System Events에 질의한다. 창 제목 대신 앱 이름을 반환.

use screencoach_core::error::CoreError;
use std::process::Command;
use tracing::debug;

use crate::window::normalize_title;

/// 최전면 애플리케이션 이름
pub fn frontmost_app_name() -> Result<Option<String>, CoreError> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(
            r#"tell application "System Events"
            return name of first application process whose frontmost is true
        end tell"#,
        )
        .output()
        .map_err(|e| CoreError::Internal(format!("osascript 실행 실패: {e}")))?;

    if !output.status.success() {
        debug!("활성 앱 감지 실패 (osascript)");
        return Ok(None);
    }

    Ok(normalize_title(&String::from_utf8_lossy(&output.stdout)))
}
