//! 코칭 틱 스케줄러.
//!
//! 고정 간격으로 파이프라인 틱을 하나씩 실행한다. 틱은 완료될 때까지 await되므로
//! 겹치지 않으며, 긴 틱 동안 밀린 틱은 건너뛴다 (`MissedTickBehavior::Skip`).

use chrono::{DateTime, Local};
use screencoach_vision::{CoachPipeline, TickOutcome};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// 스케줄러 설정
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// 틱 간격
    pub interval: Duration,
    /// 첫 틱만 실행하고 종료
    pub run_once: bool,
}

/// 세션 통계: 틱 결과별 횟수
#[derive(Debug, Clone)]
pub struct SessionStats {
    started_at: DateTime<Local>,
    counts: HashMap<TickOutcome, u64>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started_at: Local::now(),
            counts: HashMap::new(),
        }
    }

    pub fn record(&mut self, outcome: TickOutcome) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    pub fn count(&self, outcome: TickOutcome) -> u64 {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// 전체 틱 수
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// 분석 서비스 호출에 성공한 틱 수
    pub fn analyzed(&self) -> u64 {
        self.counts
            .iter()
            .filter(|(outcome, _)| outcome.analyzed())
            .map(|(_, count)| count)
            .sum()
    }

    /// 한 줄 요약 (0회 결과는 생략)
    pub fn summary(&self) -> String {
        let elapsed = Local::now().signed_duration_since(self.started_at);
        let parts: Vec<String> = TickOutcome::ALL
            .iter()
            .filter_map(|outcome| {
                let count = self.count(*outcome);
                (count > 0).then(|| format!("{outcome}={count}"))
            })
            .collect();
        format!(
            "{}부터 {}초 동안 틱 {}회 (분석 {}회){}{}",
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            elapsed.num_seconds(),
            self.total(),
            self.analyzed(),
            if parts.is_empty() { "" } else { ": " },
            parts.join(", ")
        )
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// 코칭 스케줄러
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// 종료 신호가 올 때까지 틱 반복. 세션 통계 반환.
    pub async fn run(
        &self,
        pipeline: &mut CoachPipeline,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> SessionStats {
        let mut stats = SessionStats::new();
        info!(
            "스케줄러 시작: 간격 {}ms{}",
            self.config.interval.as_millis(),
            if self.config.run_once { " (1회)" } else { "" }
        );

        let mut interval = tokio::time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if *shutdown_rx.borrow() {
                break;
            }
            tokio::select! {
                _ = interval.tick() => {
                    let outcome = pipeline.tick().await;
                    debug!("틱 결과: {outcome}");
                    stats.record(outcome);
                    if self.config.run_once {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("스케줄러 종료 — {}", stats.summary());
        stats
    }
}
