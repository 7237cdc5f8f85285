//! Windows 플랫폼: 전면 창 제목 조회.
//!
//! Win32 API `GetForegroundWindow` + `GetWindowTextLengthW` + `GetWindowTextW` 기반.

#![cfg(target_os = "windows")]

use screencoach_core::error::CoreError;
use tracing::debug;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
};

/// 전면 창 제목
pub fn foreground_window_title() -> Result<Option<String>, CoreError> {
    // SAFETY: 핸들은 null 검사 후에만 사용하고, 버퍼 길이를 API에 그대로 전달한다.
    unsafe {
        let hwnd: HWND = GetForegroundWindow();
        if hwnd.is_null() {
            debug!("활성 창 없음 (GetForegroundWindow → null)");
            return Ok(None);
        }

        let length = GetWindowTextLengthW(hwnd);
        if length <= 0 {
            return Ok(None);
        }

        let mut buf = vec![0u16; length as usize + 1];
        let copied = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
        if copied <= 0 {
            return Ok(None);
        }

        Ok(crate::window::normalize_title(&String::from_utf16_lossy(
            &buf[..copied as usize],
        )))
    }
}
