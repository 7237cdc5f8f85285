//! 전송용 다운샘플링.
//!
//! fast_image_resize Lanczos3 기반. 종횡비를 유지하고 한도를 넘을 때만 축소하며
//! 확대는 하지 않는다.

use fast_image_resize::{images::Image as FirImage, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;
use tracing::debug;

use crate::error::VisionError;

/// 기본 최대 너비
pub const DEFAULT_MAX_WIDTH: u32 = 1280;
/// 기본 최대 높이
pub const DEFAULT_MAX_HEIGHT: u32 = 720;

/// `max_width`×`max_height` 안에 들어가는 목표 크기
///
/// 이미 들어가면 원본 크기 그대로. 각 변은 최소 1픽셀.
pub fn target_size(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = (f64::from(max_width) / f64::from(width))
        .min(f64::from(max_height) / f64::from(height));
    let scaled = |dim: u32, bound: u32| ((f64::from(dim) * scale).round() as u32).clamp(1, bound);
    (scaled(width, max_width), scaled(height, max_height))
}

/// 한도 안으로 축소한 복사본 반환
pub fn fit_within(
    image: &RgbImage,
    max_width: u32,
    max_height: u32,
) -> Result<RgbImage, VisionError> {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(VisionError::EmptyImage);
    }
    if max_width == 0 || max_height == 0 {
        return Err(VisionError::Resize("목표 이미지 크기 0".to_string()));
    }

    let (dst_w, dst_h) = target_size(src_w, src_h, max_width, max_height);
    if (dst_w, dst_h) == (src_w, src_h) {
        return Ok(image.clone());
    }

    let src_image = FirImage::from_vec_u8(src_w, src_h, image.as_raw().clone(), PixelType::U8x3)
        .map_err(|e| VisionError::Resize(format!("소스 이미지 생성 실패: {e}")))?;
    let mut dst_image = FirImage::new(dst_w, dst_h, PixelType::U8x3);

    let mut resizer = Resizer::new();
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(
        fast_image_resize::FilterType::Lanczos3,
    ));
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| VisionError::Resize(e.to_string()))?;

    let resized = RgbImage::from_raw(dst_w, dst_h, dst_image.into_vec())
        .ok_or_else(|| VisionError::Resize("결과 이미지 생성 실패".to_string()))?;

    debug!("리사이즈: {src_w}x{src_h} → {dst_w}x{dst_h}");
    Ok(resized)
}
