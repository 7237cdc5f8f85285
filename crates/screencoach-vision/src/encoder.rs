//! 전송용 프레임 인코더.
//!
//! 한도 내 다운샘플 후 JPEG 또는 WebP 손실 압축.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbImage};
use screencoach_core::models::frame::{EncodedFrame, OutputFormat};
use tracing::{debug, warn};

use crate::error::VisionError;
use crate::resize::{fit_within, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};

/// 기본 압축 품질
pub const DEFAULT_QUALITY: u8 = 80;

/// 인코딩 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub format: OutputFormat,
    /// 1-100 (범위 밖 값은 클램핑)
    pub quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            format: OutputFormat::WebP,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// 포맷 이름 해석. 알 수 없는 이름은 JPEG으로 폴백하고 경고 로그.
pub fn resolve_format(name: &str) -> OutputFormat {
    let (format, fallback) = OutputFormat::from_name(name);
    if fallback {
        warn!("지원하지 않는 이미지 포맷 '{name}', {format}로 대체");
    }
    format
}

/// 프레임 인코딩
pub fn encode(image: &RgbImage, options: &EncodeOptions) -> Result<EncodedFrame, VisionError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(VisionError::EmptyImage);
    }

    let resized = fit_within(image, options.max_width, options.max_height)?;
    let (width, height) = resized.dimensions();
    let quality = options.quality.clamp(1, 100);

    let data = match options.format {
        OutputFormat::Jpeg => encode_jpeg(&resized, quality)?,
        OutputFormat::WebP => encode_webp(&resized, quality),
    };

    debug!(
        "{} 인코딩: {}x{} → {} bytes (품질 {}, 압축률 {:.1}%)",
        options.format,
        width,
        height,
        data.len(),
        quality,
        (data.len() as f32 / resized.as_raw().len() as f32) * 100.0
    );

    Ok(EncodedFrame {
        data,
        format: options.format,
        width,
        height,
    })
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, VisionError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| VisionError::Encode(format!("JPEG: {e}")))?;
    Ok(buf)
}

fn encode_webp(image: &RgbImage, quality: u8) -> Vec<u8> {
    let encoder = webp::Encoder::from_rgb(image.as_raw(), image.width(), image.height());
    encoder.encode(f32::from(quality)).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn make_test_image(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
    }

    #[test]
    fn jpeg_has_magic_and_media_type() {
        let options = EncodeOptions {
            format: OutputFormat::Jpeg,
            ..EncodeOptions::default()
        };
        let frame = encode(&make_test_image(64, 48), &options).unwrap();
        assert_eq!(frame.media_type(), "image/jpeg");
        assert_eq!(&frame.data[..3], &[0xFF, 0xD8, 0xFF]);
        assert_eq!((frame.width, frame.height), (64, 48));
    }

    #[test]
    fn webp_has_riff_header() {
        let frame = encode(&make_test_image(64, 48), &EncodeOptions::default()).unwrap();
        assert_eq!(frame.media_type(), "image/webp");
        assert_eq!(&frame.data[..4], b"RIFF");
        assert_eq!(&frame.data[8..12], b"WEBP");
    }

    #[test]
    fn large_frame_is_bounded() {
        let frame = encode(&make_test_image(2560, 1440), &EncodeOptions::default()).unwrap();
        assert_eq!((frame.width, frame.height), (1280, 720));
        assert!(!frame.is_empty());
    }

    #[test]
    fn decoded_jpeg_matches_reported_size() {
        let options = EncodeOptions {
            format: OutputFormat::Jpeg,
            max_width: 100,
            max_height: 100,
            quality: 60,
        };
        let frame = encode(&make_test_image(400, 200), &options).unwrap();
        let decoded = image::load_from_memory(&frame.data).unwrap();
        assert_eq!(decoded.width(), frame.width);
        assert_eq!(decoded.height(), frame.height);
        assert_eq!((frame.width, frame.height), (100, 50));
    }

    #[test]
    fn out_of_range_quality_is_clamped() {
        let options = EncodeOptions {
            format: OutputFormat::Jpeg,
            quality: 0,
            ..EncodeOptions::default()
        };
        assert!(encode(&make_test_image(16, 16), &options).is_ok());
    }

    #[test]
    fn lower_quality_is_not_larger() {
        let img = make_test_image(320, 240);
        let high = encode(
            &img,
            &EncodeOptions {
                format: OutputFormat::Jpeg,
                quality: 95,
                ..EncodeOptions::default()
            },
        )
        .unwrap();
        let low = encode(
            &img,
            &EncodeOptions {
                format: OutputFormat::Jpeg,
                quality: 20,
                ..EncodeOptions::default()
            },
        )
        .unwrap();
        assert!(low.len() <= high.len());
    }

    #[test]
    fn empty_image_is_error() {
        assert_eq!(
            encode(&RgbImage::new(0, 10), &EncodeOptions::default()),
            Err(VisionError::EmptyImage)
        );
    }

    #[test]
    fn unknown_format_falls_back_to_jpeg() {
        assert_eq!(resolve_format("webp"), OutputFormat::WebP);
        assert_eq!(resolve_format("JPG"), OutputFormat::Jpeg);
        assert_eq!(resolve_format("png"), OutputFormat::Jpeg);
    }
}
