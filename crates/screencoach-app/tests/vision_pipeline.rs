//! 비전 파이프라인 통합 테스트.
//!
//! 리댁션 설정 → 리댁션 → 변경 감지 → 인코딩 → 다이제스트 cross-module 연동.

use image::{Rgb, RgbImage};
use screencoach_core::models::frame::{OutputFormat, RedactionMode};
use screencoach_core::models::region::{Region, RegionSet};
use screencoach_vision::change::{is_significant_change, rms_difference};
use screencoach_vision::encoder::{encode, EncodeOptions};
use screencoach_vision::fingerprint::fingerprint;
use screencoach_vision::redact::redact;
use screencoach_vision::VisionError;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// 설정 문자열 → 영역 → 20x20 흰 이미지 좌상단 10x10만 검게
#[test]
fn redaction_spec_blacks_out_top_left_block() {
    let regions = RegionSet::parse("0,0,10,10").unwrap();
    assert_eq!(regions.as_slice(), &[Region::new(0, 0, 10, 10).unwrap()]);

    let image = RgbImage::from_pixel(20, 20, WHITE);
    let out = redact(&image, &regions, RedactionMode::Fill { color: [0, 0, 0] }).unwrap();

    for (x, y, pixel) in out.enumerate_pixels() {
        let expected = if x < 10 && y < 10 { BLACK } else { WHITE };
        assert_eq!(*pixel, expected, "({x},{y})");
    }
}

/// 리댁션 영역 안에서만 바뀐 화면은 변경으로 보지 않음
#[test]
fn changes_inside_redacted_area_are_invisible() {
    let regions = RegionSet::parse("0,0,50,50").unwrap();
    let before = RgbImage::from_pixel(100, 100, WHITE);
    let mut after = before.clone();
    for y in 0..50 {
        for x in 0..50 {
            after.put_pixel(x, y, Rgb([(x * 5) as u8, (y * 5) as u8, 0]));
        }
    }
    assert!(rms_difference(&before, &after).unwrap() > 8.0);

    let mode = RedactionMode::default();
    let before = redact(&before, &regions, mode).unwrap();
    let after = redact(&after, &regions, mode).unwrap();
    assert!(!is_significant_change(&after, Some(&before), 8.0).unwrap());
}

/// 같은 리댁션 프레임은 같은 다이제스트
#[test]
fn identical_frames_share_digest() {
    let regions = RegionSet::parse("5,5,25,25").unwrap();
    let image = RgbImage::from_fn(64, 48, |x, y| Rgb([x as u8, y as u8, 7]));
    let options = EncodeOptions {
        format: OutputFormat::Jpeg,
        ..EncodeOptions::default()
    };

    let a = encode(&redact(&image, &regions, RedactionMode::default()).unwrap(), &options).unwrap();
    let b = encode(&redact(&image, &regions, RedactionMode::default()).unwrap(), &options).unwrap();
    assert_eq!(fingerprint(&a.data), fingerprint(&b.data));

    let other = RgbImage::from_pixel(64, 48, WHITE);
    let c = encode(&other, &options).unwrap();
    assert_ne!(fingerprint(&a.data), fingerprint(&c.data));
}

/// 4K 화면 → 1280x720 WebP
#[test]
fn large_capture_is_bounded_before_upload() {
    let image = RgbImage::from_pixel(3840, 2160, Rgb([30, 60, 90]));
    let frame = encode(&image, &EncodeOptions::default()).unwrap();
    assert_eq!((frame.width, frame.height), (1280, 720));
    assert_eq!(frame.media_type(), "image/webp");
}

/// 화면보다 큰 리댁션 영역은 명시적으로 실패
#[test]
fn oversized_region_is_rejected() {
    let regions = RegionSet::parse("0,0,1920,1080").unwrap();
    let image = RgbImage::new(1280, 720);
    let err = redact(&image, &regions, RedactionMode::default()).unwrap_err();
    assert!(matches!(err, VisionError::OutOfBounds { width: 1280, height: 720, .. }));
    assert!(err.to_string().contains("0,0,1920,1080"));
}
