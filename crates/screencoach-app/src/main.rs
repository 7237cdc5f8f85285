//! # screencoach-app
//!
//! Screen Coach 바이너리 진입점.
//! CLI 파싱, 설정 로드, 어댑터 DI, 라이프사이클 관리, 스케줄러 실행.

mod lifecycle;
mod presenter;
mod scheduler;

use anyhow::{Context, Result};
use clap::Parser;
use screencoach_core::config::AppConfig;
use screencoach_core::config::RedactionStyle;
use screencoach_core::config_manager::ConfigManager;
use screencoach_core::models::region::RegionSet;
use screencoach_core::ports::presenter::SuggestionPresenter;
use screencoach_monitor::ActiveWindowTracker;
use screencoach_network::RemoteAnalysisClient;
use screencoach_vision::capture::ScreenCapture;
use screencoach_vision::{CoachPipeline, PipelineSettings};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::lifecycle::LifecycleManager;
use crate::presenter::{ConsolePresenter, LISTENING_NOTICE};
use crate::scheduler::{Scheduler, SchedulerConfig};

/// API 키 보조 환경변수
const API_KEY_FALLBACK_ENV: &str = "SCREEN_COACH_API_KEY";

/// Screen Coach: 화면을 보고 짧은 작업 제안을 해주는 데스크톱 코치
#[derive(Parser, Debug)]
#[command(name = "screencoach")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 캡처 간격 (초)
    #[arg(long, env = "SCREEN_COACH_INTERVAL")]
    interval: Option<f64>,

    /// 이 키워드가 창 제목에 있을 때만 분석 (쉼표 구분)
    #[arg(long, env = "SCREEN_COACH_WINDOW_KEYWORDS")]
    window_keywords: Option<String>,

    /// 전송 전 가릴 영역 (`left,top,right,bottom;...`)
    #[arg(long, env = "SCREEN_COACH_REDACT")]
    redact: Option<String>,

    /// 프레임과 함께 보낼 프롬프트
    #[arg(long, env = "SCREEN_COACH_PROMPT")]
    prompt: Option<String>,

    /// WebP 대신 JPEG 인코딩
    #[arg(long)]
    no_webp: bool,

    /// 리댁션 영역을 채우기 대신 블러 처리
    #[arg(long)]
    blur: bool,

    /// RMS 변경 임계값
    #[arg(long)]
    threshold: Option<f64>,

    /// 전송 이미지 최대 너비
    #[arg(long)]
    max_width: Option<u32>,

    /// 전송 이미지 최대 높이
    #[arg(long)]
    max_height: Option<u32>,

    /// 압축 품질 (1-100)
    #[arg(long)]
    quality: Option<u8>,

    /// 분석 API 엔드포인트
    #[arg(long, env = "SCREEN_COACH_ENDPOINT")]
    endpoint: Option<String>,

    /// 비전 모델 이름
    #[arg(long, env = "SCREEN_COACH_MODEL")]
    model: Option<String>,

    /// 응답 최대 토큰 수
    #[arg(long, env = "SCREEN_COACH_MAX_TOKENS")]
    max_tokens: Option<u32>,

    /// 분석 API 키
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 틱 1회만 실행하고 종료
    #[arg(long)]
    once: bool,
}

/// 쉼표 구분 키워드 파싱 (빈 항목 제거)
fn parse_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// CLI 인자로 설정 오버라이드
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(interval) = args.interval {
        config.capture.interval_secs = interval;
    }
    if let Some(ref keywords) = args.window_keywords {
        config.capture.window_keywords = parse_keywords(keywords);
    }
    if let Some(ref redact) = args.redact {
        config.privacy.redact = redact.clone();
    }
    if args.blur {
        config.privacy.style = RedactionStyle::Blur;
    }
    if let Some(ref prompt) = args.prompt {
        config.analysis.prompt = prompt.clone();
    }
    if args.no_webp {
        config.vision.prefer_webp = false;
    }
    if let Some(threshold) = args.threshold {
        config.vision.change_threshold = threshold;
    }
    if let Some(max_width) = args.max_width {
        config.vision.max_width = max_width;
    }
    if let Some(max_height) = args.max_height {
        config.vision.max_height = max_height;
    }
    if let Some(quality) = args.quality {
        config.vision.quality = quality;
    }
    if let Some(ref endpoint) = args.endpoint {
        config.analysis.api.endpoint = endpoint.clone();
    }
    if let Some(ref model) = args.model {
        config.analysis.api.model = Some(model.clone());
    }
    if let Some(max_tokens) = args.max_tokens {
        config.analysis.api.max_output_tokens = max_tokens;
    }

    // 키 우선순위: --api-key / OPENAI_API_KEY > config.json > SCREEN_COACH_API_KEY (.env 파일은 읽지 않음)
    if let Some(ref key) = args.api_key {
        if !key.trim().is_empty() {
            config.analysis.api.api_key = key.clone();
        }
    }
    if config.analysis.api.api_key.trim().is_empty() {
        if let Ok(key) = std::env::var(API_KEY_FALLBACK_ENV) {
            config.analysis.api.api_key = key;
        }
    }
}

/// 설정 파일 로드. 명시 경로 실패는 에러, 기본 경로 실패는 기본 설정으로 대체.
fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let manager = ConfigManager::with_path(path.clone())
                .with_context(|| format!("설정 파일 로드 실패: {}", path.display()))?;
            info!("설정 파일: {}", manager.config_path().display());
            Ok(manager.get())
        }
        None => match ConfigManager::new() {
            Ok(manager) => {
                info!("설정 파일: {}", manager.config_path().display());
                Ok(manager.get())
            }
            Err(e) => {
                warn!("설정 관리자 초기화 실패, 기본 설정 사용: {e}");
                Ok(AppConfig::default_config())
            }
        },
    }
}

/// 리댁션 설정 파싱. 실패하면 표시면에 알리고 리댁션 없이 진행.
fn resolve_regions(spec: &str, presenter: &dyn SuggestionPresenter) -> RegionSet {
    match RegionSet::parse(spec) {
        Ok(regions) => {
            if !regions.is_empty() {
                info!("리댁션 영역 {}개: {}", regions.len(), regions);
            }
            regions
        }
        Err(e) => {
            warn!("리댁션 설정 무시: {e}");
            presenter.display(&format!("Invalid redaction config: {e}"));
            RegionSet::empty()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "screencoach={lvl},screencoach_app={lvl},screencoach_core={lvl},screencoach_vision={lvl},screencoach_monitor={lvl},screencoach_network={lvl}",
        lvl = args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("Screen Coach 시작 (v{})", env!("CARGO_PKG_VERSION"));

    // 설정 로드 + CLI 오버라이드
    let mut config = load_config(args.config.as_ref())?;
    apply_overrides(&mut config, &args);
    config.validate().context("설정 검증 실패")?;

    // 분석 클라이언트: API 키 없으면 시작 실패
    let analyzer = RemoteAnalysisClient::new(&config.analysis.api)
        .context("분석 클라이언트 초기화 실패")?;
    info!(
        "분석 API: {} (모델 {})",
        config.analysis.api.endpoint,
        analyzer.model()
    );

    let presenter = Arc::new(ConsolePresenter::new());
    let regions = resolve_regions(&config.privacy.redact, presenter.as_ref());
    let settings = PipelineSettings::from_config(&config, regions);
    if !settings.window_keywords().is_empty() {
        info!("창 키워드 필터: {:?}", settings.window_keywords());
    }

    let mut pipeline = CoachPipeline::new(
        Arc::new(ScreenCapture::new()),
        Arc::new(ActiveWindowTracker::new()),
        Arc::new(analyzer),
        presenter.clone(),
        settings,
    );

    let lifecycle = Arc::new(LifecycleManager::new());
    let signal_lifecycle = lifecycle.clone();
    tokio::spawn(async move {
        signal_lifecycle.wait_for_signal().await;
    });

    let scheduler = Scheduler::new(SchedulerConfig {
        interval: config.tick_interval(),
        run_once: args.once,
    });

    presenter.display(LISTENING_NOTICE);
    scheduler.run(&mut pipeline, lifecycle.subscribe()).await;

    info!("Screen Coach 종료");
    Ok(())
}
