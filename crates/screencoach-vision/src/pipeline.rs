//! 코칭 파이프라인 오케스트레이터.
//!
//! 틱 하나마다 창 필터 → 캡처 → 리댁션 → 변경 감지 → 인코딩 → 다이제스트 비교
//! → 분석 → 표시 순서로 진행한다. 각 단계에서 조기 종료할 수 있으며,
//! 상태(`PipelineState`)는 분석이 성공한 틱의 마지막에만 갱신된다.

use image::RgbImage;
use screencoach_core::config::AppConfig;
use screencoach_core::models::frame::{Digest, RedactionMode};
use screencoach_core::models::region::RegionSet;
use screencoach_core::ports::analysis::AnalysisService;
use screencoach_core::ports::monitor::WindowClassifier;
use screencoach_core::ports::presenter::SuggestionPresenter;
use screencoach_core::ports::vision::FrameSource;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::change::is_significant_change;
use crate::encoder::{encode, EncodeOptions};
use crate::fingerprint::fingerprint;
use crate::redact::redact;

/// 창 필터에 걸렸을 때 표시되는 안내
pub const WAITING_NOTICE: &str = "Waiting for target window…";

/// 틱 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// 활성 창이 키워드와 맞지 않음
    SkippedWindow,
    /// 캡처 실패
    CaptureFailed,
    /// 리댁션 영역이 화면 밖
    RedactionFailed,
    /// 의미 있는 변경 없음
    Unchanged,
    /// 인코딩 실패
    EncodeFailed,
    /// 직전 전송과 동일한 페이로드
    Duplicate,
    /// 분석 서비스 실패
    AnalysisFailed,
    /// 분석 성공, 빈 응답
    NoSuggestion,
    /// 분석 성공, 직전과 같은 제안
    Repeated,
    /// 새 제안 표시
    Delivered,
}

impl TickOutcome {
    /// 전체 결과 목록 (요약 출력 순서)
    pub const ALL: [TickOutcome; 10] = [
        Self::Delivered,
        Self::Repeated,
        Self::NoSuggestion,
        Self::Unchanged,
        Self::Duplicate,
        Self::SkippedWindow,
        Self::CaptureFailed,
        Self::RedactionFailed,
        Self::EncodeFailed,
        Self::AnalysisFailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkippedWindow => "skipped_window",
            Self::CaptureFailed => "capture_failed",
            Self::RedactionFailed => "redaction_failed",
            Self::Unchanged => "unchanged",
            Self::EncodeFailed => "encode_failed",
            Self::Duplicate => "duplicate",
            Self::AnalysisFailed => "analysis_failed",
            Self::NoSuggestion => "no_suggestion",
            Self::Repeated => "repeated",
            Self::Delivered => "delivered",
        }
    }

    /// 분석 서비스까지 도달해 성공한 틱인지
    pub fn analyzed(&self) -> bool {
        matches!(self, Self::NoSuggestion | Self::Repeated | Self::Delivered)
    }
}

impl fmt::Display for TickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 파이프라인 설정 (세션 동안 불변)
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    window_keywords: Vec<String>,
    pub regions: RegionSet,
    pub redaction: RedactionMode,
    pub change_threshold: f64,
    pub encode: EncodeOptions,
    pub prompt: String,
}

impl PipelineSettings {
    /// 기본 설정 + 주어진 키워드
    pub fn new(window_keywords: Vec<String>) -> Self {
        let config = AppConfig::default_config();
        Self::from_config(&config, RegionSet::empty()).with_window_keywords(window_keywords)
    }

    /// 앱 설정과 파싱된 리댁션 영역으로 생성
    pub fn from_config(config: &AppConfig, regions: RegionSet) -> Self {
        Self {
            window_keywords: Vec::new(),
            regions,
            redaction: config.privacy.redaction_mode(),
            change_threshold: config.vision.change_threshold,
            encode: EncodeOptions {
                max_width: config.vision.max_width,
                max_height: config.vision.max_height,
                format: config.vision.output_format(),
                quality: config.vision.quality,
            },
            prompt: config.analysis.prompt.clone(),
        }
        .with_window_keywords(config.capture.window_keywords.clone())
    }

    /// 창 키워드 지정 (trim + 소문자화, 빈 키워드 제거)
    pub fn with_window_keywords(mut self, keywords: Vec<String>) -> Self {
        self.window_keywords = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn window_keywords(&self) -> &[String] {
        &self.window_keywords
    }

    /// 활성 창 제목이 키워드 중 하나를 포함하는지 (대소문자 무시)
    pub fn matches_window(&self, title: &str) -> bool {
        if self.window_keywords.is_empty() {
            return true;
        }
        let title = title.to_lowercase();
        self.window_keywords.iter().any(|k| title.contains(k.as_str()))
    }
}

/// 세션 상태: 분석이 성공한 틱에서만 갱신
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    /// 마지막으로 분석에 보낸 리댁션된 프레임
    pub last_raw_frame: Option<RgbImage>,
    /// 마지막으로 분석에 보낸 페이로드 다이제스트
    pub last_digest: Option<Digest>,
    /// 마지막으로 표시한 제안
    pub last_message: Option<String>,
}

/// 코칭 파이프라인
pub struct CoachPipeline {
    source: Arc<dyn FrameSource>,
    window: Arc<dyn WindowClassifier>,
    analyzer: Arc<dyn AnalysisService>,
    presenter: Arc<dyn SuggestionPresenter>,
    settings: PipelineSettings,
    state: PipelineState,
}

impl CoachPipeline {
    pub fn new(
        source: Arc<dyn FrameSource>,
        window: Arc<dyn WindowClassifier>,
        analyzer: Arc<dyn AnalysisService>,
        presenter: Arc<dyn SuggestionPresenter>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            source,
            window,
            analyzer,
            presenter,
            settings,
            state: PipelineState::default(),
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// 틱 1회 처리
    pub async fn tick(&mut self) -> TickOutcome {
        // 1. 창 필터: 제목을 알 수 없으면 통과
        if !self.settings.window_keywords.is_empty() {
            if let Some(title) = self.window.active_window_title().await {
                if !self.settings.matches_window(&title) {
                    debug!("대상 창 아님, 건너뜀: {title}");
                    self.presenter.display(WAITING_NOTICE);
                    return TickOutcome::SkippedWindow;
                }
            }
        }

        // 2. 캡처
        let raw = match self.source.capture().await {
            Ok(image) => image,
            Err(e) => {
                warn!("캡처 실패: {e}");
                self.presenter.display(&format!("Capture failed: {e}"));
                return TickOutcome::CaptureFailed;
            }
        };

        // 3. 리댁션
        let redacted = match redact(&raw, &self.settings.regions, self.settings.redaction) {
            Ok(image) => image,
            Err(e) => {
                error!("리댁션 실패, 프레임 전송 중단: {e}");
                self.presenter.display(&format!("Redaction failed: {e}"));
                return TickOutcome::RedactionFailed;
            }
        };

        // 4. 변경 감지: 해상도 변경은 의미 있는 변경으로 간주
        match is_significant_change(
            &redacted,
            self.state.last_raw_frame.as_ref(),
            self.settings.change_threshold,
        ) {
            Ok(true) => {}
            Ok(false) => {
                debug!("유의미한 화면 변경 없음");
                return TickOutcome::Unchanged;
            }
            Err(e) => info!("이전 프레임과 비교 불가, 변경으로 처리: {e}"),
        }

        // 5. 인코딩
        let frame = match encode(&redacted, &self.settings.encode) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("프레임 인코딩 실패: {e}");
                self.presenter.display(&format!("Encoding failed: {e}"));
                return TickOutcome::EncodeFailed;
            }
        };

        // 6. 다이제스트 비교
        let digest = fingerprint(&frame.data);
        if self.state.last_digest == Some(digest) {
            debug!("동일 페이로드, 분석 생략: {}", digest.short());
            return TickOutcome::Duplicate;
        }

        // 7. 분석
        debug!(
            "분석 요청: {} {}x{} {} bytes ({})",
            self.analyzer.provider_name(),
            frame.width,
            frame.height,
            frame.len(),
            digest.short()
        );
        let response = match self
            .analyzer
            .analyze(&self.settings.prompt, &frame.data, frame.media_type())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("분석 실패: {e}");
                self.presenter.display(&format!("Analysis failed: {e}"));
                return TickOutcome::AnalysisFailed;
            }
        };

        // 8. 상태 갱신 + 표시
        self.state.last_raw_frame = Some(redacted);
        self.state.last_digest = Some(digest);

        let message = response.trim();
        if message.is_empty() {
            debug!("분석 결과 제안 없음");
            return TickOutcome::NoSuggestion;
        }
        if self.state.last_message.as_deref() == Some(message) {
            debug!("직전과 같은 제안, 표시 유지");
            return TickOutcome::Repeated;
        }

        info!("새 제안 표시 ({}자)", message.chars().count());
        self.presenter.display(message);
        self.state.last_message = Some(message.to_string());
        TickOutcome::Delivered
    }
}
