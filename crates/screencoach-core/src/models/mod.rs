//! 도메인 모델.
//!
//! 리댁션 영역, 프레임 인코딩 결과 등 크레이트 간 공유 데이터 구조.

pub mod frame;
pub mod region;
