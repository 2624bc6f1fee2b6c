use crate::config::AppConfig;
use crate::domain::ai::service::AiService;
use crate::domain::health::service::HealthService;

/// 핸들러 전역에서 공유되는 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub ai_service: AiService,
    pub health_service: HealthService,
}
