use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};
use crate::domain::ai::client::SharedAiBackend;

/// 업스트림 체크 타임아웃
const UPSTREAM_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Degraded 상태 임계값 (ms)
const DEGRADED_THRESHOLD_MS: u64 = 2000;

/// 체크 결과 캐시 유효 시간
const CACHE_TTL: Duration = Duration::from_secs(30);

struct CachedCheck {
    result: CheckResult,
    checked_at: Instant,
}

/// 헬스체크 서비스
///
/// 업스트림 체크 결과를 30초간 캐싱하여 헬스체크 폴링이
/// 생성 API 호출 횟수를 불리지 않도록 합니다.
#[derive(Clone)]
pub struct HealthService {
    backend: SharedAiBackend,
    started_at: Instant,
    cache: Arc<RwLock<Option<CachedCheck>>>,
}

impl HealthService {
    pub fn new(backend: SharedAiBackend) -> Self {
        Self {
            backend,
            started_at: Instant::now(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// 서버 가동 시간(초) 반환
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// 전체 헬스 체크 수행
    pub async fn check(&self) -> HealthStatus {
        let upstream = self.check_upstream_cached().await;
        let status = determine_health_state(&upstream);

        HealthStatus {
            status,
            version: env!("CARGO_PKG_VERSION"),
            uptime_secs: self.uptime_secs(),
            checks: HealthChecks {
                generative_api: upstream,
            },
        }
    }

    async fn check_upstream_cached(&self) -> CheckResult {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.checked_at.elapsed() < CACHE_TTL {
                    return cached.result.clone();
                }
            }
        }

        let result = self.probe_upstream().await;

        *self.cache.write().await = Some(CachedCheck {
            result: result.clone(),
            checked_at: Instant::now(),
        });

        result
    }

    async fn probe_upstream(&self) -> CheckResult {
        let start = Instant::now();

        match timeout(UPSTREAM_CHECK_TIMEOUT, self.backend.check_connectivity()).await {
            Ok(Ok(())) => CheckResult::success(start.elapsed().as_millis() as u64),
            Ok(Err(e)) => CheckResult::failure(start.elapsed().as_millis() as u64, e.to_string()),
            Err(_) => CheckResult::timeout(UPSTREAM_CHECK_TIMEOUT.as_millis() as u64),
        }
    }
}

/// 업스트림 체크 결과에 따른 전체 상태 결정
fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    if let Some(latency) = check.latency_ms {
        if latency >= DEGRADED_THRESHOLD_MS {
            return HealthState::Degraded;
        }
    }

    HealthState::Healthy
}
