//! # screencoach-monitor
//!
//! 활성 창 조회 어댑터.
//! 플랫폼별(macOS, Windows, Linux) 네이티브 API / CLI를 통해
//! 현재 포커스된 창의 제목을 best-effort로 가져온다.

pub mod window;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

pub use window::ActiveWindowTracker;
