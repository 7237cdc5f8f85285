//! 영역 리댁션.
//!
//! 전송 전 민감 영역을 블러 또는 단색으로 가린다.
//! 모든 영역의 범위를 먼저 검사한 뒤 픽셀을 수정하며, 입력 비트맵은 건드리지 않는다.

use image::{imageops, Rgb, RgbImage};
use screencoach_core::models::frame::RedactionMode;
use screencoach_core::models::region::{Region, RegionSet};
use tracing::debug;

use crate::error::VisionError;

/// 리댁션 적용: 새 비트맵 반환
///
/// 영역은 순서대로 적용되며 겹치는 부분은 마지막 영역이 덮어쓴다.
pub fn redact(
    image: &RgbImage,
    regions: &RegionSet,
    mode: RedactionMode,
) -> Result<RgbImage, VisionError> {
    let (width, height) = image.dimensions();
    if let Some(region) = regions.iter().find(|r| !r.fits_within(width, height)) {
        return Err(VisionError::OutOfBounds {
            region: *region,
            width,
            height,
        });
    }

    let mut output = image.clone();
    for region in regions {
        apply_region(&mut output, region, mode);
    }

    if !regions.is_empty() {
        debug!("리댁션 적용: {}개 영역 ({:?})", regions.len(), mode);
    }
    Ok(output)
}

/// 범위 검사가 끝난 단일 영역 처리
fn apply_region(output: &mut RgbImage, region: &Region, mode: RedactionMode) {
    let x = region.left() as u32;
    let y = region.top() as u32;
    let w = region.width() as u32;
    let h = region.height() as u32;

    match mode {
        RedactionMode::Fill { color } => {
            let pixel = Rgb(color);
            for py in y..y + h {
                for px in x..x + w {
                    output.put_pixel(px, py, pixel);
                }
            }
        }
        RedactionMode::Blur { radius } => {
            // 블러는 잘라낸 영역 안에서만: 주변 픽셀이 섞이지 않음
            let crop = imageops::crop_imm(output, x, y, w, h).to_image();
            let sigma = if radius.is_finite() && radius > 0.0 {
                radius
            } else {
                1.0
            };
            let blurred = imageops::blur(&crop, sigma);
            imageops::replace(output, &blurred, i64::from(x), i64::from(y));
        }
    }
}
