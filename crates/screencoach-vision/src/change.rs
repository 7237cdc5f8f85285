//! 프레임 변경 감지.
//!
//! 두 RGB 프레임의 샘플 단위 RMS 차이로 "의미 있는 변경" 여부를 판단한다.

use image::RgbImage;
use tracing::trace;

use crate::error::VisionError;

/// 기본 RMS 임계값
pub const DEFAULT_CHANGE_THRESHOLD: f64 = 8.0;

/// 두 프레임의 RMS 차이
///
/// `sqrt(Σ(a−b)² / (width·height·3))`. 크기가 다르면 에러.
pub fn rms_difference(current: &RgbImage, previous: &RgbImage) -> Result<f64, VisionError> {
    if current.dimensions() != previous.dimensions() {
        return Err(VisionError::DimensionMismatch {
            current: current.dimensions(),
            previous: previous.dimensions(),
        });
    }

    let samples = current.as_raw().len();
    if samples == 0 {
        return Ok(0.0);
    }

    let sum_sq: u64 = current
        .as_raw()
        .iter()
        .zip(previous.as_raw())
        .map(|(&a, &b)| {
            let d = u64::from(a.abs_diff(b));
            d * d
        })
        .sum();

    Ok((sum_sq as f64 / samples as f64).sqrt())
}

/// 이전 프레임 대비 의미 있는 변경인지
///
/// 이전 프레임이 없으면 항상 `true`.
pub fn is_significant_change(
    current: &RgbImage,
    previous: Option<&RgbImage>,
    threshold: f64,
) -> Result<bool, VisionError> {
    let Some(previous) = previous else {
        return Ok(true);
    };
    let rms = rms_difference(current, previous)?;
    trace!("RMS 차이: {rms:.3} (임계값 {threshold})");
    Ok(rms >= threshold)
}
